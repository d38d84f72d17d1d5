/// Builds a `String` from UTF-8 bytes, stopping at the first malformed
/// sequence.
///
/// Everything before the bad sequence is kept. The bad sequence and all
/// bytes after it are dropped without error.
///
/// # Example
/// ```
/// use webutil::utf8::utf8_decode;
/// assert_eq!(utf8_decode(b"caf\xc3\xa9"), "café");
/// assert_eq!(utf8_decode(b"ok\xffignored"), "ok");
/// ```
pub fn utf8_decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(e) => {
            let valid = e.valid_up_to();
            tracing::debug!(valid, len = bytes.len(), "discarding malformed UTF-8 tail");
            std::str::from_utf8(&bytes[..valid])
                .unwrap_or_default()
                .to_owned()
        }
    }
}

/// Returns the UTF-8 bytes of a string.
pub fn utf8_encode(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}
