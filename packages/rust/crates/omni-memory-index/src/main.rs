//! main.rs - Binary entry point for omni-memory-index
//!
//! Regenerates `docs/memory-bank/index.md` from the notes next to it.
//!
//! Usage:
//!   omni-memory-index                          # run from the project root
//!   omni-memory-index --base-dir path/to/bank  # other memory bank
//!   omni-memory-index --dry-run                # print the index instead
//!
//! Logging: set `RUST_LOG=omni_memory_index=debug` to trace per-note parsing.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use omni_memory_index::{DEFAULT_BASE_DIR, IndexConfig, build_index, generate_index, records_json};

/// Omni Memory Index - Regenerate the memory bank index
#[derive(clap::Parser, Debug)]
#[command(name = "omni-memory-index")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Memory bank directory containing the category subdirectories
    #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// Index destination (defaults to <BASE_DIR>/index.md)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the rendered index to stdout instead of writing it
    #[arg(long, conflicts_with = "json")]
    dry_run: bool,

    /// Print the scanned records as JSON instead of writing the index
    #[arg(long)]
    json: bool,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let mut config = IndexConfig::new(args.base_dir);
    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    if args.json {
        let json = records_json(&config)
            .with_context(|| format!("Failed to scan {}", config.base_dir.display()))?;
        println!("{json}");
        return Ok(());
    }

    if args.dry_run {
        let (index, _) = build_index(&config, &mut io::stderr())
            .with_context(|| format!("Failed to scan {}", config.base_dir.display()))?;
        println!("{index}");
        return Ok(());
    }

    generate_index(&config, &mut io::stdout()).context("Failed to regenerate memory index")?;
    Ok(())
}
