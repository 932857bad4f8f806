/// Path utilities for splitting and canonicalizing templates and candidates
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static MORE_SLASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"//+").unwrap());

/// Splits a template or path on `/`, keeping every piece
///
/// Leading, trailing and doubled separators all yield empty pieces, so the
/// piece count is always one more than the number of `/` characters.
///
/// # Examples
///
/// ```
/// use segmux::path::split_pattern;
///
/// let parts: Vec<&str> = split_pattern("/name/:id").collect();
/// assert_eq!(parts, vec!["", "name", ":id"]);
///
/// let parts: Vec<&str> = split_pattern("a//b/").collect();
/// assert_eq!(parts, vec!["a", "", "b", ""]);
/// ```
pub fn split_pattern(path: &str) -> std::str::Split<'_, char> {
    path.split('/')
}

/// Canonicalizes `path`, then splits it without its leading `/`
///
/// ```
/// use segmux::path::split_and_trim_prefix;
///
/// assert_eq!(split_and_trim_prefix("/a/./b/../c"), vec!["a", "c"]);
/// assert_eq!(split_and_trim_prefix("a/b/"), vec!["a", "b", ""]);
/// ```
pub fn split_and_trim_prefix(path: &str) -> Vec<String> {
    let cleaned = clean_path(path);
    cleaned
        .strip_prefix('/')
        .unwrap_or(&cleaned)
        .split('/')
        .map(str::to_string)
        .collect()
}

/// Checks whether `path` is already in the form [`clean_path`] produces
fn is_clean(path: &str) -> bool {
    if path == "/" {
        return true;
    }

    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    !rest.is_empty() && rest.split('/').all(|s| !matches!(s, "" | "." | ".."))
}

/// Returns the canonical form of `path`
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`.
///
/// # Rules
///
/// - Empty input becomes `/`
/// - A missing leading `/` is added
/// - Repeated slashes collapse, `.` is dropped, `..` removes the previous
///   element (and is ignored at the root)
/// - A trailing `/` is kept when the input had one, except for the root
///
/// # Examples
///
/// ```
/// use segmux::path::clean_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(clean_path("/users/42"), Cow::Borrowed("/users/42")));
/// assert_eq!(clean_path(""), "/");
/// assert_eq!(clean_path("users//42/"), "/users/42/");
/// assert_eq!(clean_path("/a/b/../../.."), "/");
/// ```
pub fn clean_path(path: &str) -> Cow<'_, str> {
    if path.is_empty() {
        return Cow::Borrowed("/");
    }

    // Fast path: already canonical
    if is_clean(path) {
        return Cow::Borrowed(path);
    }

    let elements = path.split('/').fold(Vec::new(), |mut stack, segment| {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            s => stack.push(s),
        }
        stack
    });

    let mut cleaned = String::with_capacity(path.len() + 1);
    cleaned.push('/');
    cleaned.push_str(&elements.join("/"));

    if path.ends_with('/') && cleaned != "/" {
        cleaned.push('/');
    }

    Cow::Owned(cleaned)
}

/// Replaces every run of `/` with a single `/`
///
/// ```
/// use segmux::path::collapse_slashes;
///
/// assert_eq!(collapse_slashes("//a///b/"), "/a/b/");
/// ```
pub fn collapse_slashes(path: &str) -> Cow<'_, str> {
    MORE_SLASHES.replace_all(path, "/")
}
