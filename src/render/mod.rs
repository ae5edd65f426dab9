//! CPU rendering of the sheet: panel, tiles, watermark and final composition.
//!
//! All intermediate rasters are premultiplied RGBA8 [`surface::Surface`]s; only the
//! compositor flattens to opaque RGB.

/// Premultiplied source-over arithmetic.
pub mod composite;
/// Canvas assembly.
pub mod compositor;
/// Metadata header.
pub mod panel;
/// Premultiplied raster.
pub mod surface;
/// Frame resize and timestamp badge.
pub mod tile;
/// Caption overlay.
pub mod watermark;
