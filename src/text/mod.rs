//! Typeface resolution and text rendering.

/// Font discovery with ordered family fallbacks.
pub mod fonts;
/// Shaping and glyph painting.
pub mod shape;
