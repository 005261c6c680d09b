//! Card sequencing
//!
//! The `Sequencer` takes images in order, gives every repetition the next
//! free slot and issues the draw calls for it on a `Canvas`.

use crate::canvas::Canvas;
use crate::layout::{
    CardStyle, Placement, Point, SheetGrid, SlotCursor, border_path, crop_mark_segments,
    image_rect, next_origin,
};
use crate::options::SheetOptions;
use crate::types::*;
use std::collections::HashMap;
use std::io::Write;

/// Lifecycle of one output document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// No page opened yet
    Idle,
    /// A page is open and accepting cards
    PageOpen,
    /// The document has been encoded; nothing more can be written
    Finalized,
}

/// Lays out cards on pages and draws them on a canvas.
///
/// One sequencer produces exactly one document into `sink`. It is meant for
/// a single owner: slot positions depend on every card written before.
pub struct Sequencer<C: Canvas, W: Write> {
    canvas: C,
    sink: W,
    grid: SheetGrid,
    style: CardStyle,
    cursor: SlotCursor,
    origin: Point,
    state: SequencerState,
    pages_opened: usize,
    images: HashMap<String, C::Image>,
}

impl<C: Canvas, W: Write> Sequencer<C, W> {
    /// Create a sequencer, rejecting configurations that can't be laid out.
    pub fn new(canvas: C, sink: W, options: &SheetOptions) -> Result<Self> {
        options.validate()?;
        let grid = SheetGrid::from_options(options)?;
        let style = CardStyle::new(&options.card);

        log::debug!(
            "Card grid {}×{} on {:.1}×{:.1}pt page, margins {:.2}pt / {:.2}pt",
            grid.columns,
            grid.rows,
            grid.page_width_pt,
            grid.page_height_pt,
            grid.margin_left_pt,
            grid.margin_bottom_pt
        );

        Ok(Self {
            canvas,
            sink,
            grid,
            style,
            cursor: SlotCursor::default(),
            origin: Point::default(),
            state: SequencerState::Idle,
            pages_opened: 0,
            images: HashMap::new(),
        })
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn cards_placed(&self) -> usize {
        self.cursor.placed
    }

    pub fn pages_opened(&self) -> usize {
        self.pages_opened
    }

    pub fn grid(&self) -> &SheetGrid {
        &self.grid
    }

    /// Place `repeat_count` copies of an image.
    ///
    /// The image is registered with the canvas the first time its name is
    /// seen; later calls with the same name reuse that registration.
    pub fn write_image(&mut self, name: &str, bytes: &[u8], repeat_count: usize) -> Result<()> {
        if self.state == SequencerState::Finalized {
            return Err(CardSheetError::Finalized);
        }
        if repeat_count == 0 {
            return Err(CardSheetError::Config(format!(
                "Repeat count for {} must be at least 1",
                name
            )));
        }

        let image = self.register(name, bytes)?;
        for _ in 0..repeat_count {
            self.place(&image)?;
        }
        Ok(())
    }

    pub fn write_card(&mut self, card: &CardImage) -> Result<()> {
        self.write_image(&card.name, &card.bytes, card.repeat_count)
    }

    /// Close the last page and encode the document into the sink.
    ///
    /// A document without cards still gets one empty page.
    pub fn finalize(&mut self) -> Result<()> {
        match self.state {
            SequencerState::Finalized => return Err(CardSheetError::Finalized),
            SequencerState::Idle => self.open_page()?,
            SequencerState::PageOpen => {}
        }
        self.state = SequencerState::Finalized;

        self.canvas.close_page()?;
        self.canvas.encode_to(&mut self.sink)?;
        self.sink.flush()?;

        log::info!(
            "Placed {} cards on {} pages",
            self.cursor.placed,
            self.pages_opened
        );
        Ok(())
    }

    /// Give back the sink, typically after `finalize`.
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn register(&mut self, name: &str, bytes: &[u8]) -> Result<C::Image> {
        if let Some(image) = self.images.get(name) {
            return Ok(image.clone());
        }
        let image = self.canvas.register_image(name, bytes)?;
        log::debug!("Registered image {}", name);
        self.images.insert(name.to_string(), image.clone());
        Ok(image)
    }

    fn place(&mut self, image: &C::Image) -> Result<()> {
        let Placement {
            origin,
            starts_page,
        } = next_origin(self.cursor, self.origin, &self.grid);

        if starts_page {
            if self.state == SequencerState::PageOpen {
                self.canvas.close_page()?;
            }
            self.open_page()?;
        }

        let (card_width, card_height) = (self.grid.card_width_pt, self.grid.card_height_pt);

        if let Some(crop) = self.style.crop_marks {
            self.canvas.set_line_width(crop.line_width)?;
            for segment in crop_mark_segments(origin, card_width, card_height, crop.gap, crop.length)
            {
                self.canvas.stroke_path(&[segment.from, segment.to])?;
            }
        }

        let rect = image_rect(origin, &self.grid, self.style.image_padding);
        self.canvas.draw_image_in_rect(image, rect)?;

        if let Some(border) = self.style.border {
            self.canvas.set_line_width(border.width)?;
            let path = border_path(origin, card_width, card_height, border.inset, border.width);
            self.canvas.stroke_path(&path)?;
        }

        self.origin = origin;
        self.cursor = self.cursor.advance();
        Ok(())
    }

    fn open_page(&mut self) -> Result<()> {
        self.canvas
            .new_page(self.grid.page_width_pt, self.grid.page_height_pt)?;
        self.pages_opened += 1;
        self.state = SequencerState::PageOpen;
        log::debug!("Opened page {}", self.pages_opened);
        Ok(())
    }
}
