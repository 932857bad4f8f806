//! # Segmux
//!
//! Compiles route templates into per-segment matchers and validates request
//! paths against them, collecting named parameters on the way.
//!
//! Supported segment forms:
//! - Literal segments (`/name`), matched by their word characters
//! - Colon parameters (`/:id`), matching any non-empty value
//! - Constrained parameters (`/{id:[\d+]}`), matching a regex constraint
//! - Predicate parameters, supplied as closures through [`Mux::functional`]
//!
//! ## Matching Model
//!
//! Templates and paths are split on every `/`, keeping empty pieces, and
//! compared position by position. There is no backtracking, no catch-all and
//! no multi-route dispatch: one compiled template is checked against one
//! path. Routers that hold several templates can order them with
//! [`check_priority`] (exact before constrained before loose).
//!
//! ## Example
//!
//! ```
//! use segmux::{check_priority, Mux, Priority};
//!
//! let mux = Mux::classic("/name/:id").unwrap();
//!
//! let result = mux.validate("/name/42", false);
//! assert!(result.matched);
//! assert_eq!(result.params.get("id"), Some(&"42".to_string()));
//!
//! assert_eq!(check_priority("/name/:id"), Priority::Loose);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod matcher;
pub mod mux;
pub mod path;
pub mod route;

// Re-export public types
pub use config::{CapturePolicy, MatchOptions};
pub use error::{MatchError, PatternError};
pub use matcher::{validator, MatchKind, SegmentMatcher, Validator, Validators};
pub use mux::{Mux, Params, Validation};
pub use path::{clean_path, collapse_slashes, split_and_trim_prefix, split_pattern};
pub use route::pattern::{
    classify_segment, has_key_param, has_param, has_pick, parse_keyed, remove_bracket,
    remove_curly, SegmentKind, ANY_VALUE,
};
pub use route::priority::{check_priority, Priority};
