/// Segment classification for route templates
///
/// Pure functional parsing of a single `/`-delimited template segment into a
/// typed [`SegmentKind`]. Classification looks only at the segment's own text;
/// sibling segments never influence the outcome.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PatternError;

/// Constraint source used for colon parameters: any non-empty value
pub const ANY_VALUE: &str = r"[\w\W]+";

// Runs of non-word characters, stripped from literal segments
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

// `{...}` spanning the whole segment
static BRACED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{[\w\W]+\}$").unwrap());

// `:name` spanning the whole segment
static PICKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:[\w\W]+$").unwrap());

// Either parameter form, anywhere in the input
static PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\w+:[\w\W]+\}|:\w+").unwrap());

// Constrained parameter form, anywhere in the input
static KEY_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\w+:[\w\W]+\}").unwrap());

/// Represents the three mutually exclusive kinds of template segment
///
/// # Examples
///
/// ```
/// use segmux::route::pattern::{classify_segment, SegmentKind};
///
/// let seg = classify_segment("users").unwrap();
/// assert!(matches!(seg, SegmentKind::Literal(_)));
///
/// let seg = classify_segment(":id").unwrap();
/// assert!(matches!(seg, SegmentKind::Pick(_)));
///
/// let seg = classify_segment(r"{id:[\d+]}").unwrap();
/// assert!(matches!(seg, SegmentKind::Keyed { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Literal text, normalized to word characters only
    Literal(String),
    /// Colon parameter: `:name`
    Pick(String),
    /// Constrained parameter: `{name:[constraint]}`
    Keyed { name: String, constraint: String },
}

impl SegmentKind {
    /// Name the segment binds to (the normalized token for literals)
    pub fn name(&self) -> &str {
        match self {
            SegmentKind::Literal(token) => token,
            SegmentKind::Pick(name) => name,
            SegmentKind::Keyed { name, .. } => name,
        }
    }

    /// Regular-expression source the segment compiles to
    pub fn constraint(&self) -> &str {
        match self {
            SegmentKind::Literal(token) => token,
            SegmentKind::Pick(_) => ANY_VALUE,
            SegmentKind::Keyed { constraint, .. } => constraint,
        }
    }

    /// Whether a successful match contributes to the capture map
    pub fn is_param(&self) -> bool {
        !matches!(self, SegmentKind::Literal(_))
    }
}

/// Classifies a segment into a [`SegmentKind`] (pure function)
///
/// # Classification Rules (evaluated in order)
///
/// 1. **Colon parameter**: `:` followed by at least one character
/// 2. **Literal**: anything that is not wrapped in `{` and `}`; non-word
///    characters are stripped, so `v1.0` becomes `v10`
/// 3. **Constrained parameter**: `{name:[constraint]}`, split on the first `:`
///
/// # Errors
///
/// Returns [`PatternError::MalformedPattern`] for a braced segment without a
/// `:`, with an empty name, or whose constraint is not wrapped in `[` `]`.
pub fn classify_segment(segment: &str) -> Result<SegmentKind, PatternError> {
    if has_pick(segment) {
        return Ok(SegmentKind::Pick(segment[1..].to_string()));
    }

    if !BRACED.is_match(segment) {
        let token = NON_WORD.replace_all(segment, "").into_owned();
        return Ok(SegmentKind::Literal(token));
    }

    let (name, constraint) = parse_keyed(segment)?;
    Ok(SegmentKind::Keyed { name, constraint })
}

/// Splits a braced segment into its name and bracket-free constraint
///
/// # Examples
///
/// ```
/// use segmux::route::pattern::parse_keyed;
///
/// let (name, constraint) = parse_keyed(r"{id:[\d+]}").unwrap();
/// assert_eq!(name, "id");
/// assert_eq!(constraint, r"\d+");
///
/// // Only the first colon separates; the rest belongs to the constraint
/// let (name, constraint) = parse_keyed(r"{at:[\d{2}:\d{2}]}").unwrap();
/// assert_eq!(name, "at");
/// assert_eq!(constraint, r"\d{2}:\d{2}");
/// ```
pub fn parse_keyed(segment: &str) -> Result<(String, String), PatternError> {
    let (name, wrapped) = remove_curly(segment)
        .split_once(':')
        .ok_or_else(|| PatternError::malformed(segment, "missing `:` between name and constraint"))?;

    if name.is_empty() {
        return Err(PatternError::malformed(segment, "empty parameter name"));
    }

    if wrapped.len() < 2 || !wrapped.starts_with('[') || !wrapped.ends_with(']') {
        return Err(PatternError::malformed(
            segment,
            "constraint must be wrapped in `[` and `]`",
        ));
    }

    Ok((name.to_string(), remove_bracket(wrapped).to_string()))
}

/// True when the whole segment is a colon parameter (`:id`, `:name`)
pub fn has_pick(segment: &str) -> bool {
    PICKER.is_match(segment)
}

/// True when a colon or constrained parameter appears anywhere in the input
///
/// ```
/// use segmux::route::pattern::has_param;
///
/// assert!(has_param(r"/admin/{id:[\d+]}"));
/// assert!(has_param("/admin/:id"));
/// assert!(!has_param("/admin/id"));
/// ```
pub fn has_param(input: &str) -> bool {
    PARAM.is_match(input)
}

/// True when a constrained parameter appears anywhere in the input
pub fn has_key_param(input: &str) -> bool {
    KEY_PARAM.is_match(input)
}

/// Removes one trailing `}` and one leading `{`, independently
pub fn remove_curly(s: &str) -> &str {
    let s = s.strip_suffix('}').unwrap_or(s);
    s.strip_prefix('{').unwrap_or(s)
}

/// Removes one trailing `]` and one leading `[`, independently
pub fn remove_bracket(s: &str) -> &str {
    let s = s.strip_suffix(']').unwrap_or(s);
    s.strip_prefix('[').unwrap_or(s)
}
