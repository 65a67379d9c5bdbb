//! HMAC helpers for request signing

use hmac::{Hmac, Mac};
use sha2::Sha384;

type HmacSha384 = Hmac<Sha384>;

/// Compute HMAC-SHA384 of `message` keyed with `secret`, as lowercase hex
///
/// # Arguments
/// * `secret` - The API secret, used as raw UTF-8 bytes
/// * `message` - The string to sign
pub fn hmac_sha384_hex(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha384::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_sha384_known_vector() {
        // RFC 4231, test case 2
        let signature = hmac_sha384_hex("Jefe", "what do ya want for nothing?");
        assert_eq!(
            signature,
            "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649"
        );
    }

    #[test]
    fn test_hmac_sha384_length_and_case() {
        let signature = hmac_sha384_hex("secret", "/api/v3.2/order1591369420000");
        assert_eq!(signature.len(), 96);
        assert!(signature.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_hmac_sha384_accepts_any_key_length() {
        let long_secret = "k".repeat(500);
        for secret in ["", "x", long_secret.as_str()] {
            assert_eq!(hmac_sha384_hex(secret, "/api/v3.2/user/wallet1").len(), 96);
        }
    }
}
