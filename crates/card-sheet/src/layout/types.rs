//! Layout data types for card placement
//!
//! All coordinates are PDF points with the origin at the lower-left corner
//! of the page.

/// A point on the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// The same rectangle shrunk by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }
}

/// Number of cards placed so far in one document.
///
/// The cursor never moves backwards; `advance` returns the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotCursor {
    pub placed: usize,
}

impl SlotCursor {
    pub fn new(placed: usize) -> Self {
        Self { placed }
    }

    pub fn advance(self) -> Self {
        Self {
            placed: self.placed + 1,
        }
    }

    /// Slot index relative to the current page
    pub fn slot_index(self, cards_per_page: usize) -> usize {
        self.placed % cards_per_page
    }

    /// Zero-based page number
    pub fn page_index(self, cards_per_page: usize) -> usize {
        self.placed / cards_per_page
    }
}

/// Where the next card goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Lower-left corner of the card's slot
    pub origin: Point,
    /// The card is the first one on a fresh page
    pub starts_page: bool,
}
