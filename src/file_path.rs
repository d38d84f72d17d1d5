//! Manipulation of `/` separated file path strings.
//!
//! These functions only look at the text of the path. Nothing touches the
//! filesystem except [`resolve_symlinks`].
//!
//! # Examples
//!
//! ```
//! use webutil::file_path::*;
//!
//! assert_eq!(split_path_components("/srv/www/", true), ["/", "srv", "www", "/"]);
//! assert_eq!(last_path_component("/srv/www/index.html"), "index.html");
//! assert_eq!(parent_path("/srv/www/index.html"), "/srv/www");
//! assert_eq!(file_extension("/srv/www/index.html"), "html");
//! assert_eq!(path_without_extension("/srv/www/index.html"), "/srv/www/index");
//! ```

use crate::char_class::{PATH_SEPARATOR, is_extension_separator, is_path_separator};
use crate::error::Result;

const SEPARATOR: &str = "/";

pub fn begins_with_separator(path: &str) -> bool {
    path.as_bytes().first().is_some_and(|b| is_path_separator(*b))
}

pub fn ends_with_separator(path: &str) -> bool {
    path.as_bytes().last().is_some_and(|b| is_path_separator(*b))
}

/// Splits a path into its components.
///
/// Empty components produced by repeated separators are dropped. With
/// `include_anchors` set, an absolute path gets a leading `"/"` component
/// and a path ending in a separator gets a trailing `"/"` component. The
/// root path `"/"` yields a single `"/"`.
///
/// # Arguments
///
/// * `path` - The path to split.
/// * `include_anchors` - Whether to report leading and trailing separators.
///
/// # Returns
///
/// The components in order. An empty path has no components.
pub fn split_path_components(path: &str, include_anchors: bool) -> Vec<&str> {
    let mut r = Vec::new();
    if path.is_empty() {
        return r;
    }
    let absolute = begins_with_separator(path);
    if include_anchors && absolute {
        r.push(SEPARATOR);
    }

    r.extend(path.split(PATH_SEPARATOR).filter(|c| !c.is_empty()));

    if include_anchors && ends_with_separator(path) && (!absolute || r.len() > 1) {
        r.push(SEPARATOR);
    }
    r
}

/// Returns the final component of a path.
///
/// Trailing separators are ignored, so `"/a/b/"` gives `"b"`. A path made
/// only of separators gives `"/"`.
pub fn last_path_component(path: &str) -> &str {
    match split_path_components(path, false).last().copied() {
        Some(last) => last,
        None if begins_with_separator(path) => SEPARATOR,
        None => "",
    }
}

/// Returns the path with its final component removed.
///
/// The result is rejoined with single separators and keeps the leading
/// separator of an absolute path. A relative path with a single component
/// has no parent and gives `""`.
pub fn parent_path(path: &str) -> String {
    let mut comps = split_path_components(path, false);
    let absolute = begins_with_separator(path);
    if comps.len() <= 1 {
        return if absolute { SEPARATOR.to_string() } else { String::new() };
    }
    comps.pop();
    let joined = comps.join(SEPARATOR);
    if absolute {
        SEPARATOR.to_string() + &joined
    } else {
        joined
    }
}

/// Index just past the final component, skipping any trailing separators.
fn component_end(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rposition(|b| !is_path_separator(*b))
        .map_or(0, |i| i + 1)
}

/// Index of the `.` that starts the extension of the component ending at
/// `end`, if it has one.
///
/// The scan never crosses a separator, and a `.` in the first position of
/// the component does not count.
fn extension_separator(bytes: &[u8], end: usize) -> Option<usize> {
    let start = bytes[..end]
        .iter()
        .rposition(|b| is_path_separator(*b))
        .map_or(0, |i| i + 1);
    bytes[start..end]
        .iter()
        .rposition(|b| is_extension_separator(*b))
        .filter(|i| *i > 0)
        .map(|i| start + i)
}

/// Returns the extension of the final path component, without the `.`.
///
/// # Example
/// ```
/// use webutil::file_path::file_extension;
/// assert_eq!(file_extension("archive.tar.gz"), "gz");
/// assert_eq!(file_extension("/home/user/.profile"), "");
/// assert_eq!(file_extension("/a.d/readme"), "");
/// ```
pub fn file_extension(path: &str) -> &str {
    let end = component_end(path.as_bytes());
    match extension_separator(path.as_bytes(), end) {
        Some(dot) => &path[dot + 1..end],
        None => "",
    }
}

/// Returns the path with the extension of its final component removed.
///
/// Trailing separators are dropped as well. A path consisting only of
/// separators is returned unchanged.
pub fn path_without_extension(path: &str) -> &str {
    let end = component_end(path.as_bytes());
    match extension_separator(path.as_bytes(), end) {
        Some(dot) => &path[..dot],
        None if end == 0 => path,
        None => &path[..end],
    }
}

/// Resolves every symbolic link in `path` through the filesystem.
///
/// The path must exist. The result is absolute.
pub fn resolve_symlinks(path: &str) -> Result<String> {
    match std::fs::canonicalize(path) {
        Ok(real) => Ok(real.to_string_lossy().into_owned()),
        Err(e) => {
            tracing::warn!(path, error = %e, "failed to resolve symlinks");
            Err(e.into())
        }
    }
}
