//! HTML escaping for text that is inserted into a page.

/// Returns the text with all special HTML characters encoded.
///
/// Line breaks become `<br>` tags. A `\r\n` pair produces a single tag.
/// Control characters below tab are written as `&#x0;` through `&#x8;`,
/// markup characters as named or numeric entities, and everything above
/// `~` as a decimal character reference.
///
/// # Example
/// ```
/// use webutil::html::encode_html;
/// assert_eq!(encode_html("<a href=\"x\">Tom & Jerry</a>"),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;");
/// assert_eq!(encode_html("one\r\ntwo\nthree"), "one<br>\r\ntwo<br>\nthree");
/// ```
pub fn encode_html(input: &str) -> String {
    let mut ret = String::with_capacity(input.len());
    let mut last_was_cr = false;
    for c in input.chars() {
        match c {
            '\n' => {
                if last_was_cr {
                    ret.push('\n');
                } else {
                    ret.push_str("<br>\n");
                }
                last_was_cr = false;
                continue;
            }
            '\r' => {
                last_was_cr = true;
                ret.push_str("<br>\r");
                continue;
            }
            _ => last_was_cr = false,
        }
        match c {
            '\0'..='\u{8}' => {
                ret.push_str("&#x");
                ret.push(char::from(b'0' + c as u8));
                ret.push(';');
            }
            '"' => ret.push_str("&quot;"),
            '&' => ret.push_str("&amp;"),
            '\'' => ret.push_str("&#39;"),
            '<' => ret.push_str("&lt;"),
            '>' => ret.push_str("&gt;"),
            c if u32::from(c) > 126 => {
                ret.push_str("&#");
                ret.push_str(&u32::from(c).to_string());
                ret.push(';');
            }
            c => ret.push(c),
        }
    }
    ret
}
