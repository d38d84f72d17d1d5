use percent_encoding::{AsciiSet, CONTROLS, percent_encode as encode_with};

use crate::error::DecodeError;
use crate::hex::byte_from_hex_digits;

/// Bytes written as `%XX` by [`percent_encode`].
///
/// The encoder always escapes non-ASCII bytes, so only the ASCII part is
/// listed here. DEL is left alone.
pub const URL_UNSAFE: &AsciiSet = &CONTROLS
    .remove(0x7f)
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'+')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'~');

/// Percent encodes a byte sequence.
///
/// Every byte in [`URL_UNSAFE`] or outside ASCII is replaced by `%` and two
/// uppercase hex digits. Everything else is copied unchanged.
///
/// # Example
/// ```
/// use webutil::url_encoding::percent_encode;
/// assert_eq!(percent_encode(b"a b+c"), b"a%20b%2Bc");
/// ```
pub fn percent_encode(input: &[u8]) -> Vec<u8> {
    encode_with(input, URL_UNSAFE).collect::<String>().into_bytes()
}

/// Decodes a percent encoded byte sequence.
///
/// `%XX` becomes the byte `0xXX` (hex digits in any case) and `+` becomes a
/// space. A `%` that is not followed by two hex digits makes the whole
/// decode fail.
///
/// # Arguments
///
/// * `input` - The encoded bytes.
///
/// # Returns
///
/// The decoded bytes, or `DecodeError::Truncated` / `DecodeError::InvalidHex`
/// carrying the offset of the offending `%`.
pub fn percent_decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(input.len());
    let mut iter = input.iter().enumerate();
    while let Some((offset, &c)) = iter.next() {
        match c {
            b'%' => {
                let (Some((_, &hi)), Some((_, &lo))) = (iter.next(), iter.next()) else {
                    tracing::debug!(offset, "truncated percent escape");
                    return Err(DecodeError::Truncated { offset });
                };
                let Some(b) = byte_from_hex_digits(hi, lo) else {
                    tracing::debug!(offset, "invalid percent escape");
                    return Err(DecodeError::InvalidHex { offset });
                };
                out.push(b);
            }
            b'+' => out.push(b' '),
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Encodes a string for URL safety and returns an owned `String`
///
/// # Example
/// ```
/// use webutil::url_encoding::encode_url_owned;
/// let encoded = encode_url_owned("Hello World!");
/// assert_eq!(encoded, "Hello%20World!");
/// ```
pub fn encode_url_owned(input: &str) -> String {
    encode_with(input.as_bytes(), URL_UNSAFE).to_string()
}

/// Encodes a string in place for URL safety
///
/// # Example
/// ```
/// use webutil::url_encoding::encode_url;
/// let mut s = String::from("a+b");
/// encode_url(&mut s);
/// assert_eq!(s, "a%2Bb");
/// ```
pub fn encode_url(input: &mut String) {
    let encoded = encode_url_owned(input);
    *input = encoded;
}

/// Decodes a URL-encoded string and returns an owned `String`.
///
/// # Arguments
///
/// * `input` - A URL-encoded string as a `&str`.
///
/// # Returns
///
/// The decoded value, or an error if an escape is malformed or the decoded
/// bytes are not UTF-8.
pub fn decode_url_owned(input: &str) -> Result<String, DecodeError> {
    let bytes = percent_decode(input.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Decodes a URL-encoded string in place.
///
/// On failure the input is left untouched.
pub fn decode_url(input: &mut String) -> Result<(), DecodeError> {
    let decoded = decode_url_owned(input)?;
    *input = decoded;
    Ok(())
}
