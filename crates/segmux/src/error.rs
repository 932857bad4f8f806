/// Error types for template compilation and path matching
///
/// Compilation failures are fatal for the template: no partial `Mux` is ever
/// returned. Match failures are ordinary outcomes and only surface as errors
/// through `Mux::try_match`.

use thiserror::Error;

/// Raised while compiling a template into segment matchers
#[derive(Debug, Error)]
pub enum PatternError {
    /// A braced segment does not have the `{name:[constraint]}` shape
    #[error("malformed segment `{segment}`: {reason}")]
    MalformedPattern {
        segment: String,
        reason: &'static str,
    },

    /// The constraint body of a braced segment is not a valid regular expression
    #[error("invalid constraint in segment `{segment}`")]
    InvalidConstraint {
        segment: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    pub(crate) fn malformed(segment: &str, reason: &'static str) -> Self {
        PatternError::MalformedPattern {
            segment: segment.to_string(),
            reason,
        }
    }
}

/// Why a candidate path failed to match a compiled template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Strict length was requested and the segment counts differ
    #[error("expected {expected} segments, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// The matcher at `position` refused the candidate segment
    #[error("segment {position} (`{segment}`) was rejected")]
    Rejected { position: usize, segment: String },

    /// The candidate ran out of segments before the template did
    #[error("no candidate segment at position {position} (only {available} available)")]
    IndexMismatch { position: usize, available: usize },
}
