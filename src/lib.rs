//! String, byte and path utilities for web framework support code.
//!
//! Every function is a pure transformation of its input:
//!
//! - `url_encoding`: percent encoding and decoding (feature `url_encoding`)
//! - [`hex`](crate::hex): hex digit pairs and strings
//! - [`replace`]: grapheme aware substring replacement
//! - [`file_path`]: `/` separated path components and extensions
//! - [`digest`]: HTTP Digest `Authorization` header fields
//! - [`html`]: HTML entity escaping
//! - [`utf8`]: lenient UTF-8 decoding
//! - `date`: epoch timestamps and strftime formatting (feature `date`)

pub mod char_class;
pub mod digest;
pub mod error;
pub mod file_path;
pub mod hex;
pub mod html;
pub mod replace;
pub mod utf8;

#[cfg(feature = "url_encoding")]
pub mod url_encoding;

#[cfg(feature = "date")]
pub mod date;

pub use char_class::{CharClassExt, should_url_encode};
pub use digest::{DigestAuth, parse_digest_auth};
pub use error::{DecodeError, Error, Result};
pub use file_path::{
    file_extension, last_path_component, parent_path, path_without_extension, resolve_symlinks,
    split_path_components,
};
pub use crate::hex::{byte_from_hex_digits, decode_hex, encode_hex, hex_string};
pub use html::encode_html;
pub use replace::replace;
pub use utf8::utf8_decode;

#[cfg(feature = "url_encoding")]
pub use url_encoding::{decode_url, decode_url_owned, encode_url, encode_url_owned, percent_decode, percent_encode};

#[cfg(feature = "date")]
pub use date::{format_date, now_millis};
