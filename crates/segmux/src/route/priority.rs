/// Priority ranking of raw templates
///
/// Lower rank = more specific. Routers holding several templates that accept
/// the same path pick the one with the lowest rank.

use std::fmt;

use super::pattern::{has_key_param, has_param};
use crate::path::split_pattern;

/// Specificity of a template
///
/// Ordered so that `Exact < Constrained < Loose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// No parameter segments
    Exact,
    /// The first parameter seen is a constrained `{name:[...]}` segment
    Constrained,
    /// The first parameter seen is a loose `:name` segment
    Loose,
}

impl Priority {
    /// Numeric rank: 0, 1 or 2
    pub fn rank(self) -> u8 {
        match self {
            Priority::Exact => 0,
            Priority::Constrained => 1,
            Priority::Loose => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// Ranks a template by the first parameter segment found, left to right
///
/// For each segment in order: a constrained segment returns
/// [`Priority::Constrained`], any other parameter shape returns
/// [`Priority::Loose`]. A template without parameters is [`Priority::Exact`].
///
/// # Examples
///
/// ```
/// use segmux::route::priority::{check_priority, Priority};
///
/// assert_eq!(check_priority("/name/id"), Priority::Exact);
/// assert_eq!(check_priority(r"/name/{id:[\d+]}"), Priority::Constrained);
/// assert_eq!(check_priority("/name/:id"), Priority::Loose);
///
/// // First special segment decides
/// assert_eq!(check_priority(r"/:org/{id:[\d+]}"), Priority::Loose);
/// ```
pub fn check_priority(template: &str) -> Priority {
    split_pattern(template)
        .find_map(|segment| {
            if has_key_param(segment) {
                Some(Priority::Constrained)
            } else if has_param(segment) {
                Some(Priority::Loose)
            } else {
                None
            }
        })
        .unwrap_or(Priority::Exact)
}
