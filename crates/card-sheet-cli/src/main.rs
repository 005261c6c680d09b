use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Lay out card images on printable pages with borders and crop marks.
///
/// Every .jpg/.jpeg file in the input directory becomes a card. A leading
/// digit in the file name sets the number of copies.
#[derive(Parser)]
#[command(name = "cardsheet", version)]
struct Cli {
    /// Input directory with card images
    #[arg(long = "in", default_value = "./")]
    input: PathBuf,

    /// Output PDF file
    #[arg(long = "out", default_value = "./output.pdf")]
    output: PathBuf,

    /// JSON file with layout options; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Cards per row
    #[arg(long)]
    columns: Option<usize>,

    /// Rows per page
    #[arg(long)]
    rows: Option<usize>,

    /// Gap between cards in mm
    #[arg(long)]
    spacing_mm: Option<f32>,

    /// Card width in inches
    #[arg(long)]
    card_width_in: Option<f32>,

    /// Card height in inches
    #[arg(long)]
    card_height_in: Option<f32>,

    /// Don't draw the black border around cards
    #[arg(long)]
    no_border: bool,

    /// Don't draw crop marks
    #[arg(long)]
    no_crop_marks: bool,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for card_sheet::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for card_sheet::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl Cli {
    async fn sheet_options(&self) -> Result<card_sheet::SheetOptions> {
        let mut options = match &self.config {
            Some(path) => card_sheet::SheetOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => card_sheet::SheetOptions::default(),
        };

        if self.paper.is_some() || self.orientation.is_some() {
            let paper = self.paper.map_or(card_sheet::PaperSize::A4, Into::into);
            let orientation: card_sheet::Orientation =
                self.orientation.map(Into::into).unwrap_or_default();
            let (width_mm, height_mm) = paper.dimensions_with_orientation(orientation);
            options.page.page_width_mm = width_mm;
            options.page.page_height_mm = height_mm;
        }
        if let Some(columns) = self.columns {
            options.page.columns = columns;
        }
        if let Some(rows) = self.rows {
            options.page.rows = rows;
        }
        if let Some(spacing) = self.spacing_mm {
            options.page.spacing_mm = spacing;
        }
        if let Some(width) = self.card_width_in {
            options.card.card_width_mm = card_sheet::constants::in_to_mm(width);
        }
        if let Some(height) = self.card_height_in {
            options.card.card_height_mm = card_sheet::constants::in_to_mm(height);
        }
        if self.no_border {
            options.card.draw_border = false;
        }
        if self.no_crop_marks {
            options.card.draw_crop_marks = false;
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    println!("read files in directory: {}", cli.input.display());
    println!("writing output to: {}", cli.output.display());

    let options = cli.sheet_options().await?;
    options.validate()?;

    let cards = card_sheet::load_card_images(&cli.input)
        .await
        .with_context(|| format!("Failed to read input directory: {}", cli.input.display()))?;

    if cards.is_empty() {
        println!(
            "there is no jpg in {} so no pdf has been generated",
            cli.input.display()
        );
        return Ok(());
    }

    let stats = card_sheet::calculate_statistics(&cards, &options)?;
    println!("Card Sheet Statistics:");
    println!("  Source images: {}", stats.source_images);
    println!("  Cards: {}", stats.total_cards);
    println!("  Cards per page: {}", stats.cards_per_page);
    println!("  Pages: {}", stats.pages);
    println!("  Empty slots: {}", stats.empty_slots);

    if cli.stats_only {
        return Ok(());
    }

    card_sheet::generate_pdf(cards, &options, &cli.output)
        .await
        .with_context(|| format!("Failed to generate {}", cli.output.display()))?;
    println!(
        "Generated {} cards on {} pages → {}",
        stats.total_cards,
        stats.pages,
        cli.output.display()
    );

    Ok(())
}
