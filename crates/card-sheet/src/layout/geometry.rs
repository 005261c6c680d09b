//! Slot positions, border paths and crop marks
//!
//! Pages fill in raster order: left to right along a row, rows from the top
//! of the grid down, and a full grid starts a new page.

use super::{Placement, Point, Rect, Segment, SheetGrid, SlotCursor};

// =============================================================================
// Slot Origins
// =============================================================================

/// Origin of the top-left slot, where every page starts
pub fn page_start_origin(grid: &SheetGrid) -> Point {
    Point::new(
        grid.margin_left_pt,
        grid.margin_bottom_pt + (grid.rows - 1) as f32 * grid.row_pitch(),
    )
}

/// Compute where the card at `cursor` goes, given the origin of the card
/// placed before it.
///
/// A cursor on a page boundary always starts a new page, even though it is
/// also on a row boundary.
pub fn next_origin(cursor: SlotCursor, previous: Point, grid: &SheetGrid) -> Placement {
    if cursor.slot_index(grid.cards_per_page()) == 0 {
        return Placement {
            origin: page_start_origin(grid),
            starts_page: true,
        };
    }

    let origin = if cursor.placed % grid.columns == 0 {
        Point::new(grid.margin_left_pt, previous.y - grid.row_pitch())
    } else {
        Point::new(previous.x + grid.column_pitch(), previous.y)
    };

    Placement {
        origin,
        starts_page: false,
    }
}

/// Closed-form origin of a page-relative slot index
pub fn slot_origin(slot_index: usize, grid: &SheetGrid) -> Point {
    let slot = slot_index % grid.cards_per_page();
    let row = slot / grid.columns;
    let col = slot % grid.columns;
    let top = page_start_origin(grid);

    Point::new(
        grid.margin_left_pt + col as f32 * grid.column_pitch(),
        top.y - row as f32 * grid.row_pitch(),
    )
}

/// The card's own rectangle
pub fn card_rect(origin: Point, grid: &SheetGrid) -> Rect {
    Rect::new(origin.x, origin.y, grid.card_width_pt, grid.card_height_pt)
}

/// Rectangle the image is scaled into, `padding` inside the card edge
pub fn image_rect(origin: Point, grid: &SheetGrid, padding: f32) -> Rect {
    card_rect(origin, grid).inset(padding)
}

// =============================================================================
// Border
// =============================================================================

/// Closed border rectangle `inset` inside the card edges.
///
/// Starts at the bottom-left corner and runs clockwise. The last point stops
/// half a stroke short of the start so the joint isn't painted twice.
pub fn border_path(
    origin: Point,
    card_width: f32,
    card_height: f32,
    inset: f32,
    stroke_width: f32,
) -> [Point; 5] {
    let left = origin.x + inset;
    let right = origin.x + card_width - inset;
    let bottom = origin.y + inset;
    let top = origin.y + card_height - inset;

    [
        Point::new(left, bottom),
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left - stroke_width / 2.0, bottom),
    ]
}

// =============================================================================
// Crop Marks
// =============================================================================

/// Eight crop mark segments, two per corner.
///
/// Each mark lies on the extension of a card edge, starting `gap` outside
/// the card and running `length` further out. Extended, the two marks of a
/// corner meet at the corner itself, which stays blank.
pub fn crop_mark_segments(
    origin: Point,
    card_width: f32,
    card_height: f32,
    gap: f32,
    length: f32,
) -> [Segment; 8] {
    let Point { x, y } = origin;
    let near = gap;
    let far = gap + length;

    let mut segments = [Segment::new(Point::default(), Point::default()); 8];
    for (i, scale) in [0.0_f32, 1.0].into_iter().enumerate() {
        let across_x = x + card_width * scale;
        let across_y = y + card_height * scale;
        let marks = [
            // left
            Segment::new(
                Point::new(x - near, across_y),
                Point::new(x - far, across_y),
            ),
            // top
            Segment::new(
                Point::new(across_x, y + card_height + near),
                Point::new(across_x, y + card_height + far),
            ),
            // right
            Segment::new(
                Point::new(x + card_width + near, across_y),
                Point::new(x + card_width + far, across_y),
            ),
            // bottom
            Segment::new(
                Point::new(across_x, y - near),
                Point::new(across_x, y - far),
            ),
        ];
        segments[i * 4..i * 4 + 4].copy_from_slice(&marks);
    }
    segments
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CardConfig, PageConfig};

    const EPS: f32 = 0.001;

    fn grid(columns: usize, rows: usize, spacing_mm: f32) -> SheetGrid {
        let page = PageConfig {
            columns,
            rows,
            spacing_mm,
            page_width_mm: 420.0,
            page_height_mm: 594.0,
            ..PageConfig::default()
        };
        SheetGrid::new(&page, &CardConfig::default()).unwrap()
    }

    /// Whether `p` lies on `segment`
    fn touches(segment: &Segment, p: Point) -> bool {
        let (dx, dy) = (segment.to.x - segment.from.x, segment.to.y - segment.from.y);
        let cross = (p.x - segment.from.x) * dy - (p.y - segment.from.y) * dx;
        let within = |a: f32, b: f32, v: f32| v >= a.min(b) - EPS && v <= a.max(b) + EPS;
        cross.abs() <= EPS * (dx.abs() + dy.abs()).max(1.0)
            && within(segment.from.x, segment.to.x, p.x)
            && within(segment.from.y, segment.to.y, p.y)
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    /// Run the cursor from zero and collect every placement
    fn walk(grid: &SheetGrid, count: usize) -> Vec<Placement> {
        let mut cursor = SlotCursor::default();
        let mut previous = Point::default();
        let mut placements = Vec::new();
        for _ in 0..count {
            let placement = next_origin(cursor, previous, grid);
            previous = placement.origin;
            cursor = cursor.advance();
            placements.push(placement);
        }
        placements
    }

    #[test]
    fn test_first_slot_is_top_left() {
        let grid = grid(3, 3, 0.0);
        let placement = next_origin(SlotCursor::default(), Point::default(), &grid);

        assert!(placement.starts_page);
        assert_eq!(placement.origin.x, grid.margin_left_pt);
        let expected_y = grid.margin_bottom_pt + 2.0 * grid.card_height_pt;
        assert!((placement.origin.y - expected_y).abs() < EPS);
    }

    #[test]
    fn test_page_break_wins_over_row_break() {
        let grid = grid(3, 2, 2.0);
        // Slot 6 is both a multiple of columns and of cards per page
        let previous = slot_origin(5, &grid);
        let placement = next_origin(SlotCursor::new(6), previous, &grid);

        assert!(placement.starts_page);
        assert!(close(placement.origin, page_start_origin(&grid)));
    }

    #[test]
    fn test_next_origin_matches_closed_form() {
        for (columns, rows, spacing) in [(3, 3, 0.0), (2, 4, 3.0), (1, 1, 0.0), (5, 1, 1.5)] {
            let grid = grid(columns, rows, spacing);
            for (index, placement) in walk(&grid, 40).iter().enumerate() {
                assert!(
                    close(placement.origin, slot_origin(index, &grid)),
                    "slot {} of {}x{} grid",
                    index,
                    columns,
                    rows
                );
                assert_eq!(placement.starts_page, index % grid.cards_per_page() == 0);
            }
        }
    }

    #[test]
    fn test_origin_periodic_per_page() {
        let grid = grid(3, 3, 1.0);
        let placements = walk(&grid, 27);
        let per_page = grid.cards_per_page();
        for k in 0..per_page {
            assert!(close(placements[k].origin, placements[k + per_page].origin));
            assert!(close(placements[k].origin, placements[k + 2 * per_page].origin));
        }
    }

    #[test]
    fn test_raster_order_within_page() {
        let grid = grid(3, 3, 2.0);
        let placements = walk(&grid, 9);
        for pair in placements.windows(2) {
            let (a, b) = (pair[0].origin, pair[1].origin);
            if (a.y - b.y).abs() < EPS {
                assert!(b.x > a.x, "x must increase along a row");
            } else {
                assert!(b.y < a.y, "rows must stack downwards");
                assert_eq!(b.x, grid.margin_left_pt);
            }
        }
        // Last slot sits on the bottom margin
        assert!((placements[8].origin.y - grid.margin_bottom_pt).abs() < EPS);
    }

    #[test]
    fn test_image_rect_padding() {
        let grid = grid(3, 3, 0.0);
        let origin = Point::new(10.0, 20.0);

        let padded = image_rect(origin, &grid, 5.0);
        assert_eq!(padded.x, 15.0);
        assert_eq!(padded.y, 25.0);
        assert!((padded.right() - (10.0 + grid.card_width_pt - 5.0)).abs() < EPS);
        assert!((padded.top() - (20.0 + grid.card_height_pt - 5.0)).abs() < EPS);

        assert_eq!(image_rect(origin, &grid, 0.0), card_rect(origin, &grid));
    }

    #[test]
    fn test_border_path_shape() {
        let path = border_path(Point::new(100.0, 200.0), 180.0, 252.0, 3.0, 10.0);

        assert_eq!(path[0], Point::new(103.0, 203.0));
        assert_eq!(path[1], Point::new(103.0, 449.0));
        assert_eq!(path[2], Point::new(277.0, 449.0));
        assert_eq!(path[3], Point::new(277.0, 203.0));
        // Closing point overshoots the start by half the stroke
        assert_eq!(path[4], Point::new(98.0, 203.0));
    }

    #[test]
    fn test_crop_marks_count_and_gap() {
        let origin = Point::new(50.0, 60.0);
        let (w, h) = (180.0, 252.0);
        let corners = [
            origin,
            Point::new(origin.x, origin.y + h),
            Point::new(origin.x + w, origin.y + h),
            Point::new(origin.x + w, origin.y),
        ];
        let segments = crop_mark_segments(origin, w, h, 3.0, 14.0);

        assert_eq!(segments.len(), 8);
        // A mark drawn from the corner itself would fail this
        assert!(touches(&Segment::new(origin, Point::new(origin.x - 14.0, origin.y)), origin));
        for segment in &segments {
            for corner in corners {
                assert!(!touches(segment, corner), "{:?} touches {:?}", segment, corner);
            }
            let length = ((segment.to.x - segment.from.x).powi(2)
                + (segment.to.y - segment.from.y).powi(2))
            .sqrt();
            assert!((length - 14.0).abs() < EPS);
        }
    }

    #[test]
    fn test_crop_marks_stay_outside_card() {
        let origin = Point::new(50.0, 60.0);
        let (w, h) = (180.0, 252.0);
        let segments = crop_mark_segments(origin, w, h, 3.0, 14.0);

        let inside = |p: Point| p.x > 50.0 && p.x < 230.0 && p.y > 60.0 && p.y < 312.0;
        for segment in &segments {
            assert!(!inside(segment.from) && !inside(segment.to));
        }
    }

    #[test]
    fn test_crop_marks_point_at_corners() {
        let origin = Point::new(0.0, 0.0);
        let segments = crop_mark_segments(origin, 100.0, 200.0, 2.0, 10.0);

        // Scale 0: marks aligned with the bottom and left edges
        assert_eq!(segments[0], Segment::new(Point::new(-2.0, 0.0), Point::new(-12.0, 0.0)));
        assert_eq!(segments[1], Segment::new(Point::new(0.0, 202.0), Point::new(0.0, 212.0)));
        assert_eq!(segments[2], Segment::new(Point::new(102.0, 0.0), Point::new(112.0, 0.0)));
        assert_eq!(segments[3], Segment::new(Point::new(0.0, -2.0), Point::new(0.0, -12.0)));
        // Scale 1: marks aligned with the top and right edges
        assert_eq!(segments[4], Segment::new(Point::new(-2.0, 200.0), Point::new(-12.0, 200.0)));
        assert_eq!(segments[5], Segment::new(Point::new(100.0, 202.0), Point::new(100.0, 212.0)));
        assert_eq!(segments[6], Segment::new(Point::new(102.0, 200.0), Point::new(112.0, 200.0)));
        assert_eq!(segments[7], Segment::new(Point::new(100.0, -2.0), Point::new(100.0, -12.0)));
    }
}
