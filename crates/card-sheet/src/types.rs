use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardSheetError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Canvas error: {0}")]
    Canvas(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Document already finalized")]
    Finalized,
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CardSheetError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// What to do when the card grid is wider or taller than the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarginStrategy {
    /// Refuse the configuration
    #[default]
    Reject,
    /// Pin the negative margin to zero; the grid runs off the far edge
    Clamp,
}

/// A card image and the number of copies to place
#[derive(Debug, Clone, PartialEq)]
pub struct CardImage {
    /// File name, also used as the image's identity inside one document
    pub name: String,
    /// Encoded image bytes (JPEG, or anything `image` can decode)
    pub bytes: Vec<u8>,
    pub repeat_count: usize,
}

impl CardImage {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, repeat_count: usize) -> Self {
        Self {
            name: name.into(),
            bytes,
            repeat_count,
        }
    }
}

/// Statistics about a card sheet run
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStatistics {
    /// Number of distinct source images
    pub source_images: usize,
    /// Number of cards placed (sum of repeat counts)
    pub total_cards: usize,
    /// Slots on one page (columns × rows)
    pub cards_per_page: usize,
    /// Output page count
    pub pages: usize,
    /// Unused slots on the last page
    pub empty_slots: usize,
}
