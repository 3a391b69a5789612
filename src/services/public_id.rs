//! Base62 public ids.
//!
//! Primary keys are UUIDs assigned by the store. Clients never see them
//! directly: the key's 128-bit value is encoded into a fixed-width base62
//! string (`0-9A-Za-z`), which is shorter than the hyphenated UUID and hides
//! its internal structure. The encoding is deterministic and reversible.

use uuid::Uuid;

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// 62^22 > 2^128, so 22 digits cover every UUID.
const ENCODED_LEN: usize = 22;

/// Encodes a primary key as its 22-character base62 public id.
pub fn encode(id: &Uuid) -> String {
    let mut n = id.as_u128();
    let mut out = [ALPHABET[0]; ENCODED_LEN];
    let mut i = ENCODED_LEN;
    while n > 0 {
        i -= 1;
        out[i] = ALPHABET[(n % 62) as usize];
        n /= 62;
    }
    // out is pure ASCII
    String::from_utf8(out.to_vec()).expect("base62 output is ascii")
}

/// Decodes a public id back into the primary key it was derived from.
///
/// Returns `None` for malformed input: anything but exactly 22 characters,
/// characters outside the alphabet, or a value overflowing 128 bits.
pub fn decode(public_id: &str) -> Option<Uuid> {
    if public_id.len() != ENCODED_LEN {
        return None;
    }
    let mut n: u128 = 0;
    for &b in public_id.as_bytes() {
        let digit = ALPHABET.iter().position(|&a| a == b)? as u128;
        n = n.checked_mul(62)?.checked_add(digit)?;
    }
    Some(Uuid::from_u128(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for _ in 0..32 {
            let id = Uuid::new_v4();
            let public_id = encode(&id);
            assert_eq!(public_id.len(), ENCODED_LEN);
            assert_eq!(decode(&public_id), Some(id));
        }
    }

    #[test]
    fn encode_is_deterministic() {
        let id = Uuid::new_v4();
        assert_eq!(encode(&id), encode(&id));
    }

    #[test]
    fn nil_uuid_is_all_zero_digits() {
        assert_eq!(encode(&Uuid::nil()), "0".repeat(ENCODED_LEN));
        assert_eq!(decode(&"0".repeat(ENCODED_LEN)), Some(Uuid::nil()));
    }

    #[test]
    fn rejects_malformed_input() {
        // alphabet violations at the right length
        assert_eq!(decode("with-hyphen-0000000000"), None);
        assert_eq!(decode(&"!".repeat(ENCODED_LEN)), None);
        // 22 digits but larger than u128::MAX
        assert_eq!(decode(&"z".repeat(ENCODED_LEN)), None);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("1"), None);
        assert_eq!(decode(&"0".repeat(ENCODED_LEN - 1)), None);
        assert_eq!(decode(&"0".repeat(ENCODED_LEN + 1)), None);
    }
}
