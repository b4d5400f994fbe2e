use sha2::{Digest, Sha256};

use crate::domain::{AppKey, Nonce, UnixTimestamp};

/// Lowercase hex SHA-256 of `appkey=..&random=..&time=..&mobile=..`.
pub fn calculate_signature(
    key: &AppKey,
    nonce: Nonce,
    time: UnixTimestamp,
    mobile: &str,
) -> String {
    let plain = format!(
        "appkey={}&random={}&time={}&mobile={}",
        key.as_str(),
        nonce.value(),
        time.value(),
        mobile
    );
    hex::encode(Sha256::digest(plain.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> AppKey {
        AppKey::new(value).unwrap()
    }

    #[test]
    fn matches_provider_reference_vector() {
        let sig = calculate_signature(
            &key("5f03a35d00ee52a21327ab048186a2c4"),
            Nonce::new(7_226_249_334),
            UnixTimestamp::new(1_457_336_869),
            "13788888888",
        );
        assert_eq!(
            sig,
            "ecab4881ee80ad3d76bb1da68387428ca752eb885e52621a3129dcf4d9bc4fd4"
        );
    }

    #[test]
    fn is_deterministic_for_fixed_inputs() {
        let k = key("secret");
        let nonce = Nonce::new(123_456);
        let time = UnixTimestamp::new(1_700_000_000);

        let first = calculate_signature(&k, nonce, time, "13800000000");
        let second = calculate_signature(&k, nonce, time, "13800000000");
        assert_eq!(first, second);
        assert_eq!(
            first,
            "7569102958c2b49e524a279a0f1e76e04aecb96f4532e4b11533a1b0f7b0d0d6"
        );
    }

    #[test]
    fn changes_with_phone_or_time() {
        let k = key("secret");
        let nonce = Nonce::new(123_456);
        let time = UnixTimestamp::new(1_700_000_000);
        let base = calculate_signature(&k, nonce, time, "13800000000");

        assert_ne!(
            base,
            calculate_signature(&k, nonce, time, "13800000001")
        );
        assert_ne!(
            base,
            calculate_signature(&k, nonce, UnixTimestamp::new(1_700_000_001), "13800000000")
        );
        assert_ne!(
            base,
            calculate_signature(&k, Nonce::new(654_321), time, "13800000000")
        );
        assert_ne!(
            base,
            calculate_signature(&key("other"), nonce, time, "13800000000")
        );
    }
}
