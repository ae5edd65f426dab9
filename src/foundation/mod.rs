//! Shared building blocks: the error type and text formatting used across stages.

/// Error taxonomy and result alias.
pub mod error;
/// Duration, size and timestamp formatting plus info-panel lines.
pub mod format;
