//! Stable exit codes for lineage binaries.

/// Command succeeded; the demo output was written in full.
pub const OK: i32 = 0;
/// Command failed: unwritable output, invalid config, or graph violations.
pub const INVALID: i32 = 1;
