//! Shared constants for card sheet layout
//!
//! Unit conversions and the default card and mark dimensions.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = POINTS_PER_INCH / MM_PER_INCH; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

/// Convert inches to millimeters
#[inline]
pub fn in_to_mm(inches: f32) -> f32 {
    inches * MM_PER_INCH
}

// =============================================================================
// Grid
// =============================================================================

pub const DEFAULT_COLUMNS: usize = 3;

pub const DEFAULT_ROWS: usize = 3;

// =============================================================================
// Cards
// =============================================================================

/// Poker card width (2.5")
pub const DEFAULT_CARD_WIDTH_MM: f32 = 63.5;

/// Poker card height (3.5")
pub const DEFAULT_CARD_HEIGHT_MM: f32 = 88.9;

/// Stroke width of the black card border
pub const DEFAULT_BORDER_WIDTH_MM: f32 = 4.0;

/// Inset of the border path from the card edge
pub const DEFAULT_BORDER_INSET_MM: f32 = 1.0;

/// Inset of the image from the card edge when a border is drawn
pub const DEFAULT_BORDER_PADDING_MM: f32 = 1.65;

// =============================================================================
// Crop Marks
// =============================================================================

/// Length of crop marks
pub const DEFAULT_CROP_MARK_LENGTH_MM: f32 = 5.0;

/// Gap between the card edge and the start of a crop mark
pub const DEFAULT_CROP_MARK_GAP_MM: f32 = 1.0;

/// Line width for crop marks (points)
pub const DEFAULT_CROP_LINE_WIDTH_PT: f32 = 0.1;
