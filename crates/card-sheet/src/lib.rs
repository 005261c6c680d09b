pub mod canvas;
pub mod constants;
mod generate;
pub mod layout;
mod options;
pub mod render;
mod sequencer;
mod source;
mod stats;
mod types;

pub use canvas::Canvas;
pub use generate::{generate_pdf, generate_pdf_bytes};
pub use options::*;
pub use render::{PdfCanvas, PdfImage};
pub use sequencer::{Sequencer, SequencerState};
pub use source::{is_card_image, load_card_images, repeat_count_from_file_name};
pub use stats::calculate_statistics;
pub use types::*;
