use ::hex::FromHexError;

use crate::error::DecodeError;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Combines two hex digit characters into a byte, high nibble first.
///
/// Both upper and lower case digits are accepted. Returns `None` if either
/// character is not a hex digit.
///
/// # Example
/// ```
/// use webutil::hex::byte_from_hex_digits;
/// assert_eq!(byte_from_hex_digits(b'7', b'f'), Some(0x7f));
/// assert_eq!(byte_from_hex_digits(b'7', b'g'), None);
/// ```
pub fn byte_from_hex_digits(hi: u8, lo: u8) -> Option<u8> {
    Some(nibble(hi)? * 16 + nibble(lo)?)
}

/// Returns the two uppercase hex characters of `b` without allocating.
pub fn hex_pair(b: u8) -> [u8; 2] {
    [HEX_UPPER[usize::from(b >> 4)], HEX_UPPER[usize::from(b & 0x0f)]]
}

/// Formats one byte as exactly two uppercase hex characters.
///
/// # Example
/// ```
/// use webutil::hex::hex_string;
/// assert_eq!(hex_string(0x0a), "0A");
/// ```
pub fn hex_string(b: u8) -> String {
    ::hex::encode_upper([b])
}

/// Hex encodes a byte slice, two uppercase characters per byte.
pub fn encode_hex(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Decodes a string of hex digit pairs into bytes.
///
/// # Arguments
///
/// * `input` - Hex digits, any case, with no separators.
///
/// # Returns
///
/// The decoded bytes, or a `DecodeError` if the input has an odd number of
/// bytes or contains a character that is not a hex digit. The error offset
/// is the byte index of that character.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, DecodeError> {
    ::hex::decode(input).map_err(|e| match e {
        FromHexError::InvalidHexCharacter { index, .. } => {
            tracing::debug!(offset = index, "rejecting invalid hex digit");
            DecodeError::InvalidHex { offset: index }
        }
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            tracing::debug!(len = input.len(), "rejecting odd length hex input");
            DecodeError::OddLength { len: input.len() }
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(b'0', b'0' => Some(0x00); "zero")]
    #[test_case(b'f', b'F' => Some(0xff); "mixed case")]
    #[test_case(b'A', b'9' => Some(0xa9); "upper then digit")]
    #[test_case(b'1', b'G' => None; "invalid low")]
    #[test_case(b'x', b'0' => None; "invalid high")]
    #[test_case(b' ', b'1' => None; "space")]
    fn hex_digit_pairs(hi: u8, lo: u8) -> Option<u8> {
        byte_from_hex_digits(hi, lo)
    }

    #[test]
    fn hex_string_is_zero_padded_uppercase() {
        assert_eq!(hex_string(0), "00");
        assert_eq!(hex_string(0x0f), "0F");
        assert_eq!(hex_string(0xab), "AB");
        assert_eq!(hex_string(255), "FF");
    }

    #[test]
    fn decode_hex_string() {
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_hex("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_hex_rejects_odd_length() {
        assert_eq!(decode_hex("abc"), Err(DecodeError::OddLength { len: 3 }));
    }

    #[test]
    fn decode_hex_reports_offset_of_bad_pair() {
        assert_eq!(decode_hex("00zz"), Err(DecodeError::InvalidHex { offset: 2 }));
    }

    #[test]
    fn decode_hex_reports_offset_of_bad_low_digit() {
        assert_eq!(decode_hex("00aZ"), Err(DecodeError::InvalidHex { offset: 3 }));
    }

    #[test]
    fn hex_pair_matches_hex_string() {
        for b in 0..=255u8 {
            assert_eq!(hex_pair(b).to_vec(), hex_string(b).into_bytes());
        }
    }

    #[test]
    fn decode_hex_rejects_multibyte_characters() {
        assert!(decode_hex("é0").is_err());
    }

    #[test]
    fn every_byte_survives_encode_hex() {
        let all: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_hex(&encode_hex(&all)).unwrap(), all);
    }
}
