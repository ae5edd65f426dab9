//! Grid configuration and the pixel layout derived from it.

/// `ROWSxCOLS` grid configuration.
pub mod grid;
/// Layout constants and the computed [`plan::LayoutPlan`].
pub mod plan;
