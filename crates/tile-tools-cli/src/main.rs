use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tile_visual::{BatchReport, FloorConfig, FloorPage, ItemOutcome, WallConfig};

#[derive(Parser)]
#[command(name = "tilev", about = "Tile visualization tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate floor visualizations (flat top view + angled view)
    Floor {
        /// JSON batch config; replaces the direct arguments below
        #[arg(long)]
        json: Option<PathBuf>,

        /// Input tile image
        #[arg(long)]
        in_file: Option<PathBuf>,

        /// Number of tile rows
        #[arg(long, default_value = "20")]
        rows: u32,

        /// Number of tile columns
        #[arg(long, default_value = "20")]
        cols: u32,

        /// Rotate alternate tiles in the brick pattern
        #[arg(long)]
        rotate: bool,

        /// Padding between tiles in pixels
        #[arg(long, default_value = "2")]
        padding: u32,

        /// Perspective intensity (clamped to 1.0-3.0)
        #[arg(long, default_value = "2.5")]
        depth: f32,

        /// Output directory
        #[arg(long, default_value = "./out/visual")]
        out_dir: PathBuf,
    },

    /// Compose wall mockups from a JSON config
    Wall {
        /// JSON config describing the wall pages
        config: PathBuf,

        /// Bundle the generated mockups into a PDF album
        #[arg(long)]
        pdf: bool,

        /// Compress album images to minimize the PDF size
        #[arg(long)]
        mini: bool,

        /// Output directory for the mockup JPEGs
        #[arg(long, default_value = "./out/visual-wall")]
        out_dir: PathBuf,
    },

    /// Generate a PDF catalog of product images
    Catalog {
        /// Catalog JSON config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory of images (alternative to --config)
        #[arg(long)]
        img_dir: Option<PathBuf>,

        /// Output PDF path (used with --img-dir)
        #[arg(long, default_value = "./out/product_catalog.pdf")]
        output: PathBuf,

        /// Catalog title (used with --img-dir)
        #[arg(long, default_value = "Product Catalog")]
        title: String,

        /// Paper size
        #[arg(long, default_value = "a4", value_enum)]
        paper: PaperArg,

        /// Page orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    Letter,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for tile_catalog::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::Letter => Self::Letter,
        }
    }
}

impl From<OrientationArg> for tile_catalog::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Floor {
            json,
            in_file,
            rows,
            cols,
            rotate,
            padding,
            depth,
            out_dir,
        } => {
            let config = match (json, in_file) {
                (Some(json), _) => FloorConfig::load(&json).await?,
                (None, Some(in_file)) => single_floor_config(&in_file, rows, cols, rotate, padding, depth)?,
                (None, None) => anyhow::bail!("either --json or --in-file is required"),
            };

            let report = tile_visual::floor::run_batch(&config, &out_dir).await?;
            print_report("Floor", &report);
        }

        Commands::Wall {
            config,
            pdf,
            mini,
            out_dir,
        } => {
            let config = WallConfig::load(&config).await?;
            let report = tile_visual::wall::run_batch(&config, &out_dir).await?;
            print_report("Wall", &report);

            if pdf {
                let images = report.rendered_paths();
                let pdf_path = if mini {
                    with_suffix(&config.output_pdf, "_mini")
                } else {
                    config.output_pdf.clone()
                };

                let options = tile_catalog::AlbumOptions {
                    compress: mini,
                    ..Default::default()
                };
                let stats = tile_catalog::generate_album(&images, &options, &pdf_path).await?;
                println!(
                    "Album: {} pages ({} skipped) -> {}",
                    stats.pages,
                    stats.skipped.len(),
                    pdf_path.display()
                );
            }
        }

        Commands::Catalog {
            config,
            img_dir,
            output,
            title,
            paper,
            orientation,
        } => {
            let layout = tile_catalog::CatalogLayout {
                paper_size: paper.into(),
                orientation: orientation.into(),
                ..Default::default()
            };

            let config = match (config, img_dir) {
                (Some(path), _) => tile_catalog::CatalogConfig::load(&path).await?,
                (None, Some(dir)) => {
                    tile_catalog::CatalogConfig::from_image_dir(
                        &dir,
                        title,
                        output,
                        layout.images_per_page,
                    )
                    .await?
                }
                (None, None) => anyhow::bail!("either --config or --img-dir is required"),
            };

            let stats =
                tile_catalog::generate_catalog(&config, &layout, &config.output_pdf).await?;

            println!("Catalog Statistics:");
            println!("  Pages: {}", stats.pages);
            println!("  Images placed: {}", stats.placed);
            println!("  Images skipped: {}", stats.skipped.len());
            for (file, reason) in &stats.skipped {
                println!("    {}: {}", file, reason);
            }
            println!("Catalog -> {}", config.output_pdf.display());
        }
    }

    Ok(())
}

fn single_floor_config(
    in_file: &Path,
    rows: u32,
    cols: u32,
    rotate: bool,
    padding: u32,
    depth: f32,
) -> Result<FloorConfig> {
    let file = in_file
        .file_name()
        .context("input path has no filename")?
        .to_string_lossy()
        .into_owned();
    let title = in_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.clone());
    let image_path = in_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_owned();

    Ok(FloorConfig {
        image_path,
        rows,
        cols,
        depth_factor: depth,
        pages: vec![FloorPage {
            file,
            title,
            rotate,
            padding,
        }],
    })
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    path.with_file_name(format!("{stem}{suffix}{ext}"))
}

fn print_report(kind: &str, report: &BatchReport) {
    println!(
        "{} batch: {} rendered, {} skipped",
        kind,
        report.rendered_count(),
        report.skipped_count()
    );
    for (item, outcome) in &report.items {
        match outcome {
            ItemOutcome::Rendered(path) => println!("  {} -> {}", item, path.display()),
            ItemOutcome::Skipped(reason) => println!("  {} skipped: {}", item, reason),
        }
    }
}
