//! Asset maintenance CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textile_showroom::tools::{
    OptimizeOptions, OrganizeOptions, format_bytes,
    optimize::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_DIMENSION, DEFAULT_MIN_SIZE},
    optimize_dir, organize,
    organize::DEFAULT_SOURCE,
};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "asset-tools")]
#[command(about = "Image compression and asset layout maintenance for the showroom")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompress large JPEG/PNG images in place
    Optimize {
        /// Directory to scan recursively
        #[arg(short, long, default_value = "public/images")]
        dir: PathBuf,

        /// Skip files smaller than this many bytes
        #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
        min_size: u64,

        /// Longest allowed edge in pixels
        #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
        max_dimension: u32,

        /// JPEG quality (1-100)
        #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: u8,
    },

    /// Copy images and slide metadata out of a raw asset drop
    Organize {
        /// Project root
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Source directory, relative to the root
        #[arg(short, long, default_value = DEFAULT_SOURCE)]
        source: PathBuf,

        /// Legacy folder under src/assets to clean up (repeatable; replaces the defaults)
        #[arg(long = "legacy")]
        legacy: Vec<String>,

        /// Show what would happen without changing anything
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    match cli.command {
        Commands::Optimize {
            dir,
            min_size,
            max_dimension,
            quality,
        } => {
            let options = OptimizeOptions {
                min_size,
                max_dimension,
                jpeg_quality: quality,
            };
            cmd_optimize(dir, options);
        }
        Commands::Organize {
            root,
            source,
            legacy,
            dry_run,
        } => {
            let mut options = OrganizeOptions::new(root);
            options.source = source;
            options.dry_run = dry_run;
            if !legacy.is_empty() {
                options.legacy_dirs = legacy;
            }
            cmd_organize(options);
        }
    }
}

fn cmd_optimize(dir: PathBuf, options: OptimizeOptions) {
    info!("Scanning: {}", dir.display());

    let summary = match optimize_dir(&dir, &options) {
        Ok(summary) => summary,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    println!("\n{}", "=".repeat(50));
    println!("SUMMARY");
    println!("{}", "=".repeat(50));
    println!("Found:          {} images", summary.found);
    println!("Optimized:      {} images", summary.optimized);
    println!("Skipped:        {} images", summary.skipped);
    println!("Failed:         {} images", summary.failed);
    println!("Original size:  {}", format_bytes(summary.original_bytes));
    println!("Optimized size: {}", format_bytes(summary.optimized_bytes));
    println!(
        "Total saved:    {} ({:.1}%)",
        format_bytes(summary.saved_bytes()),
        summary.saved_percent()
    );
}

fn cmd_organize(options: OrganizeOptions) {
    let dry_run = options.dry_run;
    let report = match organize(&options) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let verb = if dry_run { "Would copy" } else { "Copied" };
    println!(
        "{} {} images and {} data.json files from {} slides in {} categories",
        verb,
        report.images_copied,
        report.data_files_copied,
        report.slides,
        report.categories
    );
    for dir in &report.removed_dirs {
        let verb = if dry_run { "Would remove" } else { "Removed" };
        println!("{}: {}", verb, dir.display());
    }
    if report.source_missing {
        println!("Source directory was not found; only legacy cleanup ran");
    }
    if report.unreadable > 0 {
        println!("Skipped {} unreadable entries (see warnings)", report.unreadable);
    }
}
