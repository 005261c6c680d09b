//! Drawing surface used by the sequencer
//!
//! The sequencer only knows about pages, images, line widths and stroked
//! paths. `render::PdfCanvas` is the production implementation.

use crate::layout::{Point, Rect};
use crate::types::Result;
use std::io::Write;

pub trait Canvas {
    /// Handle to an image registered with the canvas
    type Image: Clone;

    /// Add encoded image bytes to the document without drawing them.
    fn register_image(&mut self, name: &str, bytes: &[u8]) -> Result<Self::Image>;

    /// Open a new empty page. The previous page must already be closed.
    fn new_page(&mut self, width_pt: f32, height_pt: f32) -> Result<()>;

    /// Close the page opened by the last `new_page`.
    fn close_page(&mut self) -> Result<()>;

    /// Draw a registered image scaled to fill `rect`.
    fn draw_image_in_rect(&mut self, image: &Self::Image, rect: Rect) -> Result<()>;

    fn set_line_width(&mut self, width_pt: f32) -> Result<()>;

    /// Stroke an open polyline through `points`.
    fn stroke_path(&mut self, points: &[Point]) -> Result<()>;

    /// Serialize every closed page to `sink`.
    fn encode_to<W: Write>(&mut self, sink: &mut W) -> Result<()>;
}
