//! Layout calculation modules for card sheets
//!
//! This module handles all the geometric calculations:
//! - Grid layout (margins, slot size, decorations in points)
//! - Slot placement (raster order across pages)
//! - Border paths and crop marks around each card

mod geometry;
mod grid;
mod types;

pub use geometry::*;
pub use grid::*;
pub use types::*;
