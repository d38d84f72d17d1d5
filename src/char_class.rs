//! Byte classification used by the encoders and path parsers.
//!
//! Every ASCII byte is looked up in a table built at compile time. Bytes
//! outside the ASCII range belong to no class, except that they always
//! need percent-encoding.

pub(crate) const C_URL_UNSAFE: u8 = 1;
pub(crate) const C_HEX: u8 = 2;
pub(crate) const C_DIGIT: u8 = 4;
pub(crate) const C_ALPHA: u8 = 8;
pub(crate) const C_SPACE: u8 = 16;
pub(crate) const C_PATH_SEP: u8 = 32;
pub(crate) const C_EXT_SEP: u8 = 64;

/// The file path separator, `/`.
pub const PATH_SEPARATOR: char = '/';

static TABLE: [u8; 128] = build_table();

pub(crate) fn char_classes(b: u8) -> u8 {
    match TABLE.get(usize::from(b)) {
        Some(classes) => *classes,
        None => C_URL_UNSAFE,
    }
}

const fn build_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        let mut classes = 0;
        if is_url_unsafe(b) {
            classes |= C_URL_UNSAFE;
        }
        if b.is_ascii_hexdigit() {
            classes |= C_HEX;
        }
        if b.is_ascii_digit() {
            classes |= C_DIGIT;
        }
        if b.is_ascii_alphabetic() {
            classes |= C_ALPHA;
        }
        // C-locale isspace, which unlike is_ascii_whitespace includes \v
        if matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r') {
            classes |= C_SPACE;
        }
        if b == b'/' {
            classes |= C_PATH_SEP;
        }
        if b == b'.' {
            classes |= C_EXT_SEP;
        }
        table[i] = classes;
        i += 1;
    }
    table
}

/// Returns whether the byte has to be written as `%XX` in a URL.
///
/// This covers every non-ASCII byte, the control range, space, and the
/// delimiters `"`, `#`, `$`, `%`, `+`, `:`, `<`, `>`, `[`, `\`, `]`, `^`,
/// the backtick, `{`, `|`, `}` and `~`.
const fn is_url_unsafe(cc: u8) -> bool {
    cc >= 128
        || cc < 33
        || (cc >= 34 && cc < 38)
        || (cc > 59 && cc < 61)
        || cc == 62
        || cc == 58
        || (cc >= 91 && cc < 95)
        || cc == 96
        || (cc >= 123 && cc <= 126)
        || cc == 43
}

pub fn should_url_encode(b: u8) -> bool {
    char_classes(b) & C_URL_UNSAFE != 0
}

pub fn is_hex_digit(b: u8) -> bool {
    char_classes(b) & C_HEX != 0
}

pub fn is_digit(b: u8) -> bool {
    char_classes(b) & C_DIGIT != 0
}

pub fn is_alpha_num(b: u8) -> bool {
    char_classes(b) & (C_ALPHA | C_DIGIT) != 0
}

pub fn is_white_space(b: u8) -> bool {
    char_classes(b) & C_SPACE != 0
}

pub fn is_path_separator(b: u8) -> bool {
    char_classes(b) & C_PATH_SEP != 0
}

pub fn is_extension_separator(b: u8) -> bool {
    char_classes(b) & C_EXT_SEP != 0
}

/// The byte predicates lifted to Unicode scalars.
///
/// Scalars outside ASCII belong to no class.
pub trait CharClassExt {
    fn is_white_space(&self) -> bool;
    fn is_dec_digit(&self) -> bool;
    fn is_alpha_num(&self) -> bool;
    fn is_hex_digit(&self) -> bool;
}

impl CharClassExt for char {
    fn is_white_space(&self) -> bool {
        ascii_classes(*self) & C_SPACE != 0
    }

    fn is_dec_digit(&self) -> bool {
        ascii_classes(*self) & C_DIGIT != 0
    }

    fn is_alpha_num(&self) -> bool {
        ascii_classes(*self) & (C_ALPHA | C_DIGIT) != 0
    }

    fn is_hex_digit(&self) -> bool {
        ascii_classes(*self) & C_HEX != 0
    }
}

fn ascii_classes(c: char) -> u8 {
    if c.is_ascii() { TABLE[c as usize] } else { 0 }
}
