//! Grid layout calculation
//!
//! Resolves page and card options into a grid of fixed-size slots centered
//! on the page, in points.

use crate::constants::mm_to_pt;
use crate::options::{CardConfig, PageConfig, SheetOptions};
use crate::types::{CardSheetError, MarginStrategy, Result};

// =============================================================================
// Margins
// =============================================================================

/// Left margin that centers `columns` cards horizontally.
///
/// Negative when the grid is wider than the page.
pub fn margin_left(page_width: f32, columns: usize, card_width: f32, spacing: f32) -> f32 {
    let footprint = columns as f32 * card_width + (columns as f32 - 1.0) * spacing;
    (page_width - footprint) / 2.0
}

/// Bottom margin that centers `rows` cards vertically.
///
/// Negative when the grid is taller than the page.
pub fn margin_bottom(page_height: f32, rows: usize, card_height: f32, spacing: f32) -> f32 {
    let footprint = rows as f32 * card_height + (rows as f32 - 1.0) * spacing;
    (page_height - footprint) / 2.0
}

fn resolve_margin(axis: &str, margin: f32, strategy: MarginStrategy) -> Result<f32> {
    if margin >= 0.0 {
        return Ok(margin);
    }
    match strategy {
        MarginStrategy::Reject => Err(CardSheetError::Config(format!(
            "Card grid does not fit the page: {} margin would be {:.2}pt",
            axis, margin
        ))),
        MarginStrategy::Clamp => {
            log::warn!(
                "Card grid overflows the page ({} margin {:.2}pt), clamping to 0",
                axis,
                margin
            );
            Ok(0.0)
        }
    }
}

// =============================================================================
// Sheet Grid
// =============================================================================

/// A validated card grid, all lengths in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGrid {
    pub columns: usize,
    pub rows: usize,
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub card_width_pt: f32,
    pub card_height_pt: f32,
    pub spacing_pt: f32,
    pub margin_left_pt: f32,
    pub margin_bottom_pt: f32,
}

impl SheetGrid {
    /// Resolve the grid for validated options.
    ///
    /// Fails with a configuration error when the grid is empty or, under
    /// `MarginStrategy::Reject`, when it does not fit on the page.
    pub fn new(page: &PageConfig, card: &CardConfig) -> Result<Self> {
        if page.cards_per_page() == 0 {
            return Err(CardSheetError::Config(
                "Grid must contain at least one slot".to_string(),
            ));
        }

        let page_width_pt = mm_to_pt(page.page_width_mm);
        let page_height_pt = mm_to_pt(page.page_height_mm);
        let card_width_pt = mm_to_pt(card.card_width_mm);
        let card_height_pt = mm_to_pt(card.card_height_mm);
        let spacing_pt = mm_to_pt(page.spacing_mm);

        let left = margin_left(page_width_pt, page.columns, card_width_pt, spacing_pt);
        let bottom = margin_bottom(page_height_pt, page.rows, card_height_pt, spacing_pt);

        Ok(Self {
            columns: page.columns,
            rows: page.rows,
            page_width_pt,
            page_height_pt,
            card_width_pt,
            card_height_pt,
            spacing_pt,
            margin_left_pt: resolve_margin("horizontal", left, page.margin_strategy)?,
            margin_bottom_pt: resolve_margin("vertical", bottom, page.margin_strategy)?,
        })
    }

    pub fn from_options(options: &SheetOptions) -> Result<Self> {
        Self::new(&options.page, &options.card)
    }

    /// Total number of slots on one page
    pub fn cards_per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Horizontal distance between the origins of neighbouring slots
    pub fn column_pitch(&self) -> f32 {
        self.card_width_pt + self.spacing_pt
    }

    /// Vertical distance between the origins of neighbouring slots
    pub fn row_pitch(&self) -> f32 {
        self.card_height_pt + self.spacing_pt
    }
}

// =============================================================================
// Card Style
// =============================================================================

/// Resolved border settings, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub width: f32,
    pub inset: f32,
}

/// Resolved crop mark settings, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropMarkStyle {
    pub gap: f32,
    pub length: f32,
    pub line_width: f32,
}

/// Decorations drawn around every card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub border: Option<BorderStyle>,
    pub crop_marks: Option<CropMarkStyle>,
    /// Image inset from the card edge
    pub image_padding: f32,
}

impl CardStyle {
    pub fn new(card: &CardConfig) -> Self {
        let border = card.draw_border.then(|| BorderStyle {
            width: mm_to_pt(card.border_width_mm),
            inset: mm_to_pt(card.border_inset_mm),
        });
        let crop_marks = card.draw_crop_marks.then(|| CropMarkStyle {
            gap: mm_to_pt(card.crop_mark_gap_mm),
            length: mm_to_pt(card.crop_mark_length_mm),
            line_width: card.crop_line_width_pt,
        });

        Self {
            border,
            crop_marks,
            image_padding: mm_to_pt(card.image_padding_mm()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_CARD_HEIGHT_MM, DEFAULT_CARD_WIDTH_MM};

    fn poker_on_a4() -> (PageConfig, CardConfig) {
        (PageConfig::default(), CardConfig::default())
    }

    #[test]
    fn test_margins_center_grid() {
        let left = margin_left(600.0, 3, 180.0, 0.0);
        assert_eq!(left, 30.0);
        let right = 600.0 - (left + 3.0 * 180.0);
        assert_eq!(left, right);

        let bottom = margin_bottom(800.0, 2, 250.0, 20.0);
        assert_eq!(bottom, 140.0);
        let top = 800.0 - (bottom + 2.0 * 250.0 + 20.0);
        assert_eq!(bottom, top);
    }

    #[test]
    fn test_margin_negative_when_grid_too_large() {
        assert!(margin_left(100.0, 2, 60.0, 0.0) < 0.0);
        assert!(margin_bottom(100.0, 1, 120.0, 0.0) < 0.0);
    }

    #[test]
    fn test_single_column_has_no_spacing() {
        assert_eq!(margin_left(100.0, 1, 40.0, 500.0), 30.0);
    }

    #[test]
    fn test_sheet_grid_poker_on_a4() {
        let (page, card) = poker_on_a4();
        let grid = SheetGrid::new(&page, &card).unwrap();

        assert_eq!(grid.cards_per_page(), 9);
        assert!((grid.card_width_pt - 180.0).abs() < 0.01);
        assert!((grid.card_height_pt - 252.0).abs() < 0.01);
        assert!(grid.margin_left_pt > 0.0);
        assert!(grid.margin_bottom_pt > 0.0);

        let right_margin = grid.page_width_pt - (grid.margin_left_pt + 3.0 * grid.card_width_pt);
        let top_margin = grid.page_height_pt - (grid.margin_bottom_pt + 3.0 * grid.card_height_pt);
        assert!((right_margin - grid.margin_left_pt).abs() < 0.01);
        assert!((top_margin - grid.margin_bottom_pt).abs() < 0.01);
    }

    #[test]
    fn test_sheet_grid_rejects_overflow() {
        let (mut page, card) = poker_on_a4();
        page.columns = 4;

        let result = SheetGrid::new(&page, &card);
        assert!(matches!(result, Err(CardSheetError::Config(_))));
    }

    #[test]
    fn test_sheet_grid_clamps_overflow() {
        let (mut page, card) = poker_on_a4();
        page.columns = 4;
        page.margin_strategy = MarginStrategy::Clamp;

        let grid = SheetGrid::new(&page, &card).unwrap();
        assert_eq!(grid.margin_left_pt, 0.0);
        assert!(grid.margin_bottom_pt > 0.0);
    }

    #[test]
    fn test_sheet_grid_exact_fit_is_allowed() {
        let page = PageConfig {
            page_width_mm: 2.0 * DEFAULT_CARD_WIDTH_MM,
            page_height_mm: 2.0 * DEFAULT_CARD_HEIGHT_MM,
            columns: 2,
            rows: 2,
            ..PageConfig::default()
        };
        let grid = SheetGrid::new(&page, &CardConfig::default()).unwrap();
        assert_eq!(grid.margin_left_pt, 0.0);
        assert_eq!(grid.margin_bottom_pt, 0.0);
    }

    #[test]
    fn test_sheet_grid_rejects_empty_grid() {
        let (mut page, card) = poker_on_a4();
        page.rows = 0;

        let result = SheetGrid::new(&page, &card);
        assert!(matches!(result, Err(CardSheetError::Config(_))));
    }

    #[test]
    fn test_card_style_without_border_has_no_padding() {
        let card = CardConfig {
            draw_border: false,
            border_padding_mm: 10.0,
            ..CardConfig::default()
        };
        let style = CardStyle::new(&card);
        assert!(style.border.is_none());
        assert_eq!(style.image_padding, 0.0);
        assert!(style.crop_marks.is_some());
    }

    #[test]
    fn test_card_style_with_border_uses_padding() {
        let style = CardStyle::new(&CardConfig::default());
        let border = style.border.unwrap();
        assert!((style.image_padding - mm_to_pt(1.65)).abs() < 0.001);
        assert!((border.width - mm_to_pt(4.0)).abs() < 0.001);
        assert!((border.inset - mm_to_pt(1.0)).abs() < 0.001);
    }
}
