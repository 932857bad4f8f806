// File: src/config.rs
// Purpose: Match options, optionally parsed from a `[matching]` TOML table

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What happens to captures gathered before a failing segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapturePolicy {
    /// Return the captures collected before the failure alongside `matched = false`
    #[default]
    KeepPartial,
    /// Return an empty capture map whenever the match fails
    ClearOnFailure,
}

/// Options controlling a single `validate` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchOptions {
    /// Reject candidates whose segment count differs from the template's
    #[serde(default)]
    pub strict_length: bool,

    #[serde(default)]
    pub capture_policy: CapturePolicy,
}

/// Top-level document layout for option files
#[derive(Debug, Deserialize)]
struct OptionsFile {
    #[serde(default)]
    matching: MatchOptions,
}

impl MatchOptions {
    /// Default options: lenient length, partial captures kept
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with strict length checking turned on
    pub fn strict() -> Self {
        Self::default().with_strict_length(true)
    }

    /// Sets strict length checking (builder pattern)
    pub fn with_strict_length(mut self, strict_length: bool) -> Self {
        self.strict_length = strict_length;
        self
    }

    /// Sets the capture policy (builder pattern)
    pub fn with_capture_policy(mut self, capture_policy: CapturePolicy) -> Self {
        self.capture_policy = capture_policy;
        self
    }

    /// Parses options from a TOML document with an optional `[matching]` table
    ///
    /// ```
    /// use segmux::{CapturePolicy, MatchOptions};
    ///
    /// let options = MatchOptions::from_toml_str(r#"
    ///     [matching]
    ///     strict_length = true
    ///     capture_policy = "clear_on_failure"
    /// "#).unwrap();
    ///
    /// assert!(options.strict_length);
    /// assert_eq!(options.capture_policy, CapturePolicy::ClearOnFailure);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: OptionsFile =
            toml::from_str(content).context("Failed to parse match options")?;
        Ok(file.matching)
    }

    /// Loads options from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let options = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid match options in {}", path.display()))?;
        tracing::debug!(?options, "loaded match options from {}", path.display());
        Ok(options)
    }
}
