//! PDF rendering for card sheets
//!
//! This module handles all PDF-specific operations:
//! - Creating image XObjects from encoded image files
//! - Building pages and their content streams
//! - Writing the finished document

mod pdf;
mod xobject;

pub use pdf::{PdfCanvas, PdfImage};
pub use xobject::create_image_xobject;
