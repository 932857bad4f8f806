/// Route template analysis
///
/// Pure functions that look at template text without compiling it:
/// - `pattern`: classify one segment and test for parameter shapes
/// - `priority`: rank a whole template by specificity

pub mod pattern;
pub mod priority;

// Re-export commonly used types
pub use pattern::{classify_segment, has_key_param, has_param, has_pick, SegmentKind};
pub use priority::{check_priority, Priority};
