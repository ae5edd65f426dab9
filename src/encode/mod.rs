//! Output encoding.

/// JPEG encoding, output writing and default naming.
pub mod jpeg;
