use serde::{Deserialize, Serialize};

/// A user record as stored in the `users` table.
///
/// `password` always holds the SHA-256 hash, never the plaintext. It is
/// written by `Db::save_user` and compared by `Db::authenticate`, and
/// skipped on serialization so the hash never leaks into API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

/// Input for `Db::save_user`. The id, password hash and creation timestamp
/// are filled in by the save operation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_not_serialized() {
        let user = User {
            id: "some-key".to_string(),
            username: "chuck".to_string(),
            password: "deadbeef".to_string(),
            name: "Chuck".to_string(),
            email: "chuck@platzi.test".to_string(),
            created_at: "2026-08-29T00:00:00.000000Z".to_string(),
        };

        let json = serde_json::to_value(&user).expect("serialize user");
        assert!(json.get("password").is_none(), "hash must not leak");
        assert_eq!(json["username"], "chuck");
        assert_eq!(json["email"], "chuck@platzi.test");
    }
}
