//! spellindex Extract Binary
//!
//! Builds the spell lookup document from a spell database dump.

use clap::Parser;
use spellindex::{Config, ExtractError, Extractor};
use tracing_subscriber::{fmt, EnvFilter};

/// spellindex extractor
#[derive(Parser, Debug)]
#[command(name = "spellindex-extract")]
#[command(about = "Extract damage and focus spells into a per-class JSON index")]
#[command(version)]
struct Args {
    /// Spell database dump
    #[arg(short, long, default_value = "eqfiles/spells_us.txt")]
    spells: String,

    /// Spell string table (optional, skipped when absent)
    #[arg(short = 't', long, default_value = "eqfiles/spells_us_str.txt")]
    strings: String,

    /// Output JSON document
    #[arg(short, long, default_value = "spells.json")]
    output: String,

    /// Lowest concrete spell level to keep
    #[arg(short = 'l', long, default_value = "85")]
    min_level: i32,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spellindex=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("spellindex extract v{}", spellindex::VERSION);

    let config = Config::builder()
        .spells_path(&args.spells)
        .strings_path(&args.strings)
        .output_path(&args.output)
        .min_level(args.min_level)
        .pretty(args.pretty)
        .build();

    let extractor = Extractor::new(config);
    match extractor.run() {
        Ok(report) => {
            tracing::info!(
                "Done: {} spells ({} indexed, {} global), {} strings loaded",
                report.summary.accepted(),
                report.summary.indexed,
                report.summary.global,
                report.strings_loaded
            );
        }
        Err(ExtractError::MissingInput(path)) => {
            tracing::error!("{} is missing. No spells will be loaded.", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Extraction failed: {}", e);
            std::process::exit(1);
        }
    }
}
