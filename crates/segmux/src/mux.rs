/// Template compilation and path matching
///
/// A [`Mux`] owns a template string and one [`SegmentMatcher`] per
/// `/`-separated piece of it. Matching is positional: candidate segment `k`
/// is checked by matcher `k`, and parameter matchers record what they saw.
///
/// Two construction modes share the same matching walk:
/// - [`Mux::classic`]: every segment is classified and compiled to a regex
/// - [`Mux::functional`]: segments named in a validator map use those
///   validators, every other segment must match its text exactly

use std::collections::HashMap;
use std::str::FromStr;

use crate::config::{CapturePolicy, MatchOptions};
use crate::error::{MatchError, PatternError};
use crate::matcher::{SegmentMatcher, Validators};
use crate::path::split_pattern;
use crate::route::priority::{check_priority, Priority};

/// Parameter name → matched segment value
pub type Params = HashMap<String, String>;

/// Outcome of validating one path against a compiled template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    /// Whether every template segment accepted its candidate segment
    pub matched: bool,
    /// Captured parameters (may be partial when `matched` is false)
    pub params: Params,
}

impl Validation {
    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// Looks up a captured parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// A compiled route template
///
/// Immutable after construction; share it freely between threads.
#[derive(Debug, Clone)]
pub struct Mux {
    pattern: String,
    matchers: Vec<SegmentMatcher>,
}

impl Mux {
    /// Compiles a template where every segment is regex-backed
    ///
    /// # Errors
    ///
    /// The first segment that fails to classify or compile aborts the whole
    /// template; see [`PatternError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use segmux::Mux;
    ///
    /// let mux = Mux::classic(r"/name/{id:[\d+]}").unwrap();
    ///
    /// let result = mux.validate("/name/12", false);
    /// assert!(result.matched);
    /// assert_eq!(result.get("id"), Some("12"));
    ///
    /// assert!(!mux.validate("/name/abc", false).matched);
    /// ```
    pub fn classic(template: &str) -> Result<Self, PatternError> {
        let matchers = split_pattern(template)
            .map(SegmentMatcher::compile)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            template,
            segments = matchers.len(),
            "compiled classic template"
        );

        Ok(Mux {
            pattern: template.to_string(),
            matchers,
        })
    }

    /// Builds a template from raw segments and a validator map
    ///
    /// A segment whose raw text is a key of `validators` becomes a parameter
    /// named after that text and checked by the validator. All other segments
    /// accept only their own text. No regex is compiled, so this cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use segmux::{matcher::validator, Mux, Validators};
    ///
    /// let mut validators = Validators::new();
    /// validators.insert(
    ///     "id".to_string(),
    ///     validator(|s| s.chars().all(|c| c.is_ascii_digit())),
    /// );
    ///
    /// let mux = Mux::functional("/name/id", &validators);
    /// assert_eq!(mux.validate("/name/2", false).get("id"), Some("2"));
    /// assert!(!mux.validate("/name/x", false).matched);
    /// ```
    pub fn functional(template: &str, validators: &Validators) -> Self {
        let matchers: Vec<SegmentMatcher> = split_pattern(template)
            .map(|segment| SegmentMatcher::functional(segment, validators.get(segment).cloned()))
            .collect();

        tracing::debug!(
            template,
            segments = matchers.len(),
            validators = validators.len(),
            "compiled functional template"
        );

        Mux {
            pattern: template.to_string(),
            matchers,
        }
    }

    /// The template this mux was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matchers(&self) -> &[SegmentMatcher] {
        &self.matchers
    }

    /// Number of compiled segments
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Always false: even the empty template compiles to one segment
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Specificity rank of the source template
    pub fn priority(&self) -> Priority {
        check_priority(&self.pattern)
    }

    /// Validates `path` with default options and the given length mode
    ///
    /// With `strict_length` off, extra trailing candidate segments are
    /// ignored and a candidate that runs out of segments fails.
    pub fn validate(&self, path: &str, strict_length: bool) -> Validation {
        self.validate_with(path, &MatchOptions::new().with_strict_length(strict_length))
    }

    /// Validates `path` with explicit options
    ///
    /// On failure, captures from positions that matched before the failing
    /// one are returned under [`CapturePolicy::KeepPartial`] and dropped under
    /// [`CapturePolicy::ClearOnFailure`].
    pub fn validate_with(&self, path: &str, options: &MatchOptions) -> Validation {
        let mut params = Params::new();

        match self.walk(path, options.strict_length, &mut params) {
            Ok(()) => Validation {
                matched: true,
                params,
            },
            Err(reason) => {
                tracing::trace!(pattern = %self.pattern, path, %reason, "path did not match");
                if options.capture_policy == CapturePolicy::ClearOnFailure {
                    params.clear();
                }
                Validation {
                    matched: false,
                    params,
                }
            }
        }
    }

    /// Like [`Mux::validate`], but reports why a path was refused
    ///
    /// ```
    /// use segmux::{MatchError, Mux};
    ///
    /// let mux = Mux::classic("/name/:id").unwrap();
    /// assert_eq!(
    ///     mux.try_match("/name", false),
    ///     Err(MatchError::IndexMismatch { position: 2, available: 2 })
    /// );
    /// ```
    pub fn try_match(&self, path: &str, strict_length: bool) -> Result<Params, MatchError> {
        let mut params = Params::new();
        self.walk(path, strict_length, &mut params)?;
        Ok(params)
    }

    /// Positional walk shared by every matching entry point
    fn walk(&self, path: &str, strict_length: bool, params: &mut Params) -> Result<(), MatchError> {
        let segments: Vec<&str> = split_pattern(path).collect();

        if strict_length && segments.len() != self.matchers.len() {
            return Err(MatchError::LengthMismatch {
                expected: self.matchers.len(),
                found: segments.len(),
            });
        }

        for (position, matcher) in self.matchers.iter().enumerate() {
            let segment = *segments.get(position).ok_or(MatchError::IndexMismatch {
                position,
                available: segments.len(),
            })?;

            if !matcher.validate(segment) {
                return Err(MatchError::Rejected {
                    position,
                    segment: segment.to_string(),
                });
            }

            if matcher.is_param() {
                params.insert(matcher.name().to_string(), segment.to_string());
            }
        }

        Ok(())
    }
}

impl FromStr for Mux {
    type Err = PatternError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        Mux::classic(template)
    }
}
