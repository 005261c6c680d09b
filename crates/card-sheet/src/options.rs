use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page size and card grid
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub columns: usize,
    pub rows: usize,
    /// Gap between neighbouring cards, both directions
    pub spacing_mm: f32,
    pub margin_strategy: MarginStrategy,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from_paper(PaperSize::A4, Orientation::Portrait)
    }
}

impl PageConfig {
    /// Default 3×3 grid on the given paper
    pub fn from_paper(paper: PaperSize, orientation: Orientation) -> Self {
        let (page_width_mm, page_height_mm) = paper.dimensions_with_orientation(orientation);
        Self {
            page_width_mm,
            page_height_mm,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            spacing_mm: 0.0,
            margin_strategy: MarginStrategy::default(),
        }
    }

    pub fn cards_per_page(&self) -> usize {
        self.columns * self.rows
    }
}

/// Card size and decorations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardConfig {
    pub card_width_mm: f32,
    pub card_height_mm: f32,
    /// Stroke width of the border
    pub border_width_mm: f32,
    /// Distance from the card edge to the border path
    pub border_inset_mm: f32,
    /// Distance from the card edge to the image, only applied with a border
    pub border_padding_mm: f32,
    /// Blank distance between the card edge and its crop marks
    pub crop_mark_gap_mm: f32,
    pub crop_mark_length_mm: f32,
    pub crop_line_width_pt: f32,
    pub draw_border: bool,
    pub draw_crop_marks: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            card_width_mm: DEFAULT_CARD_WIDTH_MM,
            card_height_mm: DEFAULT_CARD_HEIGHT_MM,
            border_width_mm: DEFAULT_BORDER_WIDTH_MM,
            border_inset_mm: DEFAULT_BORDER_INSET_MM,
            border_padding_mm: DEFAULT_BORDER_PADDING_MM,
            crop_mark_gap_mm: DEFAULT_CROP_MARK_GAP_MM,
            crop_mark_length_mm: DEFAULT_CROP_MARK_LENGTH_MM,
            crop_line_width_pt: DEFAULT_CROP_LINE_WIDTH_PT,
            draw_border: true,
            draw_crop_marks: true,
        }
    }
}

impl CardConfig {
    /// Image inset from the card edge. Without a border the image fills the card.
    pub fn image_padding_mm(&self) -> f32 {
        if self.draw_border {
            self.border_padding_mm
        } else {
            0.0
        }
    }
}

/// Complete configuration of one card sheet document
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetOptions {
    pub page: PageConfig,
    pub card: CardConfig,
}

impl SheetOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CardSheetError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CardSheetError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options.
    ///
    /// Margins are checked separately when the grid is resolved, since the
    /// outcome depends on the margin strategy.
    pub fn validate(&self) -> Result<()> {
        let page = &self.page;
        let card = &self.card;

        if page.columns == 0 || page.rows == 0 {
            return Err(CardSheetError::Config(format!(
                "Grid must have at least one column and one row (got {}×{})",
                page.columns, page.rows
            )));
        }

        if page.page_width_mm <= 0.0 || page.page_height_mm <= 0.0 {
            return Err(CardSheetError::Config(
                "Page dimensions must be positive".to_string(),
            ));
        }

        if card.card_width_mm <= 0.0 || card.card_height_mm <= 0.0 {
            return Err(CardSheetError::Config(
                "Card dimensions must be positive".to_string(),
            ));
        }

        if page.spacing_mm < 0.0 {
            return Err(CardSheetError::Config(
                "Card spacing cannot be negative".to_string(),
            ));
        }

        let half_short_side = card.card_width_mm.min(card.card_height_mm) / 2.0;
        if card.border_padding_mm < 0.0 || card.border_padding_mm >= half_short_side {
            return Err(CardSheetError::Config(format!(
                "Border padding must be between 0 and {:.2}mm (got {:.2}mm)",
                half_short_side, card.border_padding_mm
            )));
        }

        if card.draw_border && (card.border_width_mm <= 0.0 || card.border_inset_mm < 0.0) {
            return Err(CardSheetError::Config(
                "Border width must be positive and border inset non-negative".to_string(),
            ));
        }

        if card.draw_crop_marks
            && (card.crop_mark_gap_mm <= 0.0
                || card.crop_mark_length_mm <= 0.0
                || card.crop_line_width_pt <= 0.0)
        {
            return Err(CardSheetError::Config(
                "Crop mark gap, length and line width must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
