use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("malformed hex token: {0}")]
    BadHex(#[from] hex::FromHexError),
    #[error("token too short to carry a key byte")]
    MissingKey,
}

/// Decode a Cloudflare `data-cfemail` token.
///
/// The first byte is an XOR key; each following byte XOR key is one ASCII
/// character of the plaintext address.
pub fn decode_cfemail(token: &str) -> Result<String, DecodeError> {
    let bytes = hex::decode(token)?;
    let (key, rest) = bytes.split_first().ok_or(DecodeError::MissingKey)?;
    Ok(rest.iter().map(|b| (b ^ key) as char).collect())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_token() {
        // jane@example.com XOR-masked with key 0x49
        assert_eq!(
            decode_cfemail("492328272c092c31282439252c672a2624").unwrap(),
            "jane@example.com"
        );
    }

    #[test]
    fn second_known_token() {
        // Different key byte, independently verified plaintext
        assert_eq!(
            decode_cfemail("7a13141c153a1f021b170a161f54191517").unwrap(),
            "info@example.com"
        );
    }

    #[test]
    fn deterministic() {
        let token = "6e2e312f3b";
        assert_eq!(decode_cfemail(token).unwrap(), "@_AU");
        assert_eq!(decode_cfemail(token), decode_cfemail(token));
    }

    #[test]
    fn key_only_token_decodes_to_empty() {
        assert_eq!(decode_cfemail("6e").unwrap(), "");
    }

    #[test]
    fn odd_length_rejected() {
        assert!(matches!(
            decode_cfemail("492328272c092c31282439252c672a262"),
            Err(DecodeError::BadHex(hex::FromHexError::OddLength))
        ));
    }

    #[test]
    fn non_hex_rejected() {
        assert!(matches!(
            decode_cfemail("49zz28272c09"),
            Err(DecodeError::BadHex(_))
        ));
    }

    #[test]
    fn empty_token_rejected() {
        assert_eq!(decode_cfemail("").unwrap_err(), DecodeError::MissingKey);
    }
}
