use crate::layout::SheetGrid;
use crate::options::SheetOptions;
use crate::types::*;

/// Calculate statistics for a card sheet without rendering it
pub fn calculate_statistics(
    cards: &[CardImage],
    options: &SheetOptions,
) -> Result<SheetStatistics> {
    options.validate()?;
    let grid = SheetGrid::from_options(options)?;
    let cards_per_page = grid.cards_per_page();

    let total_cards: usize = cards.iter().map(|card| card.repeat_count).sum();

    // An empty document still has one blank page
    let pages = total_cards.div_ceil(cards_per_page).max(1);
    let empty_slots = pages * cards_per_page - total_cards;

    Ok(SheetStatistics {
        source_images: cards.len(),
        total_cards,
        cards_per_page,
        pages,
        empty_slots,
    })
}
