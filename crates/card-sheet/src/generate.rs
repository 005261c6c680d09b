use crate::options::SheetOptions;
use crate::render::PdfCanvas;
use crate::sequencer::Sequencer;
use crate::types::*;
use std::path::Path;

/// Lay out `cards` and write the PDF to `output_path`.
///
/// The file is only written once the whole document has been encoded, so a
/// failing card leaves no partial output behind.
pub async fn generate_pdf(
    cards: Vec<CardImage>,
    options: &SheetOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let options = *options;
    let output_path = output_path.as_ref().to_owned();

    // Layout and encoding are CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || generate_pdf_bytes(&cards, &options)).await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Wrote {}", output_path.display());

    Ok(())
}

/// Lay out `cards` into an in-memory PDF
pub fn generate_pdf_bytes(cards: &[CardImage], options: &SheetOptions) -> Result<Vec<u8>> {
    let mut sequencer = Sequencer::new(PdfCanvas::default(), Vec::new(), options)?;
    for card in cards {
        sequencer.write_card(card)?;
    }
    sequencer.finalize()?;
    Ok(sequencer.into_sink())
}
