use sha2::{Digest, Sha256};

/// Hashes a plaintext password to a lowercase hex SHA-256 digest.
///
/// Deliberately unsalted: equal plaintexts always produce equal hashes.
/// This is a known weakness carried over for compatibility with the
/// existing user records; do not swap the algorithm without migrating them.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        assert_eq!(
            hash_password("foo123"),
            "02b353bf5358995bc7d193ed1ce9c2eaec2b694b21d2f96232c9d6a0832121d1"
        );
    }

    #[test]
    fn deterministic() {
        assert_eq!(hash_password("s3cr3t"), hash_password("s3cr3t"));
        assert_ne!(hash_password("s3cr3t"), hash_password("s3cr3t "));
    }

    #[test]
    fn output_is_lowercase_hex() {
        let hash = hash_password("anything");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
