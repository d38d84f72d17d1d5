//! Substring search and replace over extended grapheme clusters.
//!
//! Matching compares whole clusters, so `"e"` never matches the first half
//! of `"e\u{301}"`.

use unicode_segmentation::UnicodeSegmentation;

/// Replaces every occurrence of `find` in `subject` with `with`.
///
/// Matches are found left to right and never overlap. Text produced by a
/// replacement is not searched again. An empty `find` or an empty subject
/// returns the subject unchanged.
///
/// # Example
/// ```
/// use webutil::replace::replace;
/// assert_eq!(replace("aaa", "a", "bb"), "bbbbbb");
/// assert_eq!(replace("a-b-c", "-", ", "), "a, b, c");
/// ```
pub fn replace(subject: &str, find: &str, with: &str) -> String {
    if find.is_empty() || subject.is_empty() {
        return subject.to_string();
    }

    let haystack: Vec<&str> = subject.graphemes(true).collect();
    let needle: Vec<&str> = find.graphemes(true).collect();

    let mut ret = String::with_capacity(subject.len());
    let mut idx = 0;
    while idx < haystack.len() {
        if haystack[idx..].starts_with(&needle) {
            ret.push_str(with);
            idx += needle.len();
            continue;
        }
        ret.push_str(haystack[idx]);
        idx += 1;
    }
    ret
}

/// Returns whether `s` starts with `prefix`, comparing grapheme clusters.
pub fn begins_with(s: &str, prefix: &str) -> bool {
    let mut clusters = s.graphemes(true);
    prefix
        .graphemes(true)
        .all(|want| clusters.next() == Some(want))
}

/// Returns whether `s` ends with `suffix`, comparing grapheme clusters.
pub fn ends_with(s: &str, suffix: &str) -> bool {
    let mut clusters = s.graphemes(true).rev();
    suffix
        .graphemes(true)
        .rev()
        .all(|want| clusters.next() == Some(want))
}

/// Returns whether `needle` occurs in `s` on grapheme cluster boundaries.
pub fn contains(s: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack: Vec<&str> = s.graphemes(true).collect();
    let needle: Vec<&str> = needle.graphemes(true).collect();
    haystack.windows(needle.len()).any(|w| w == needle.as_slice())
}
