/// Compiled per-segment matchers
///
/// A [`SegmentMatcher`] is built once per template segment and only read
/// afterwards. The kind of check it performs is fixed at compile time:
///
/// - `Pattern`: a compiled regex, tested unanchored against the segment
/// - `Predicate`: a caller-supplied function on the raw segment string
/// - `Exact`: string equality against the segment's original text

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::PatternError;
use crate::route::pattern::{classify_segment, SegmentKind};

/// Caller-supplied segment check used by functional templates
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Validators keyed by the literal template segment they replace
pub type Validators = HashMap<String, Validator>;

/// Wraps a closure as a [`Validator`]
///
/// ```
/// use segmux::matcher::validator;
///
/// let digits = validator(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()));
/// assert!(digits("42"));
/// assert!(!digits("4x"));
/// ```
pub fn validator<F>(check: F) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Arc::new(check)
}

/// How a segment matcher decides whether a value is accepted
#[derive(Clone)]
pub enum MatchKind {
    Pattern(Regex),
    Predicate(Validator),
    Exact,
}

impl fmt::Debug for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            MatchKind::Predicate(_) => f.write_str("Predicate(..)"),
            MatchKind::Exact => f.write_str("Exact"),
        }
    }
}

/// One compiled template segment
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    /// Bound parameter name, or the segment text for non-parameters
    name: String,
    /// Whether a successful match is recorded in the capture map
    param: bool,
    kind: MatchKind,
}

impl SegmentMatcher {
    /// Classifies and compiles a segment into a regex-backed matcher
    ///
    /// # Errors
    ///
    /// - [`PatternError::MalformedPattern`] from classification
    /// - [`PatternError::InvalidConstraint`] if the constraint is not a valid regex
    ///
    /// # Examples
    ///
    /// ```
    /// use segmux::matcher::SegmentMatcher;
    ///
    /// let m = SegmentMatcher::compile(r"{id:[\d+]}").unwrap();
    /// assert_eq!(m.name(), "id");
    /// assert!(m.is_param());
    /// assert!(m.validate("12"));
    /// assert!(!m.validate("abc"));
    /// ```
    pub fn compile(segment: &str) -> Result<Self, PatternError> {
        let kind = classify_segment(segment)?;
        tracing::trace!(segment, ?kind, "classified segment");
        Self::from_kind(segment, &kind)
    }

    /// Compiles an already classified segment
    pub fn from_kind(segment: &str, kind: &SegmentKind) -> Result<Self, PatternError> {
        let regex = Regex::new(kind.constraint()).map_err(|source| {
            PatternError::InvalidConstraint {
                segment: segment.to_string(),
                source,
            }
        })?;

        Ok(SegmentMatcher {
            name: kind.name().to_string(),
            param: kind.is_param(),
            kind: MatchKind::Pattern(regex),
        })
    }

    /// Builds a functional matcher for a raw segment
    ///
    /// With a validator the segment becomes a parameter bound to its own text.
    /// Without one it only accepts values equal to that text.
    pub fn functional(segment: &str, validator: Option<Validator>) -> Self {
        let (param, kind) = match validator {
            Some(check) => (true, MatchKind::Predicate(check)),
            None => (false, MatchKind::Exact),
        };

        SegmentMatcher {
            name: segment.to_string(),
            param,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_param(&self) -> bool {
        self.param
    }

    pub fn kind(&self) -> &MatchKind {
        &self.kind
    }

    /// Checks a candidate segment against this matcher
    pub fn validate(&self, value: &str) -> bool {
        match &self.kind {
            MatchKind::Pattern(regex) => regex.is_match(value),
            MatchKind::Predicate(check) => check(value),
            MatchKind::Exact => value == self.name,
        }
    }
}

impl fmt::Display for SegmentMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
