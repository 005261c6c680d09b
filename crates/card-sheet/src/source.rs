//! Card image discovery
//!
//! Scans one directory (not recursively) for JPEG files. A leading digit in
//! the file name sets how many copies of the card are printed.

use crate::types::*;
use std::path::Path;

const CARD_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// Whether `path` names a card image by its extension
pub fn is_card_image(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            CARD_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Number of copies encoded in a file name: its first character if that is
/// a digit, otherwise 1.
///
/// `3_goblin.jpg` gives 3, `goblin.jpg` gives 1, `0_goblin.jpg` gives 0.
pub fn repeat_count_from_file_name(name: &str) -> usize {
    name.chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map_or(1, |digit| digit as usize)
}

/// Load every card image in `dir`, sorted by file name.
///
/// Images whose repeat count is zero are skipped.
pub async fn load_card_images(dir: impl AsRef<Path>) -> Result<Vec<CardImage>> {
    let dir = dir.as_ref();
    let source_read = |source| CardSheetError::SourceRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(source_read)?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(source_read)? {
        let path = entry.path();
        let file_type = entry.file_type().await.map_err(source_read)?;
        if !file_type.is_dir() && is_card_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut cards = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let repeat_count = repeat_count_from_file_name(&name);
        if repeat_count == 0 {
            log::warn!("Skipping {}: repeat count is 0", name);
            continue;
        }

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| CardSheetError::SourceRead {
                path: path.clone(),
                source,
            })?;
        log::debug!("Loaded {} ({} bytes, ×{})", name, bytes.len(), repeat_count);
        cards.push(CardImage::new(name, bytes, repeat_count));
    }

    Ok(cards)
}
