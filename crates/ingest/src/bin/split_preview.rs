//! split-preview — preview how a document file would be split.
//!
//! Reads a txt/md/pdf file, runs the same splitting path the upload
//! pipeline uses, and prints the preview response JSON. Handy for
//! checking separator/size parameters before ingesting anything.
//!
//! Defaults come from the environment (PARENT_CHUNK_SIZE and friends,
//! `.env` honored); flags override per run.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ragline_core::config::load_dotenv;
use ragline_core::Config;
use ragline_ingest::document::extract_text;
use ragline_ingest::pipeline::preview_split;
use ragline_splitter::SplitConfiguration;

/// Preview the parent/child split of a document without storing anything.
#[derive(Parser, Debug)]
#[command(name = "split-preview", version, about)]
struct Cli {
    /// Document to split (txt, md, or pdf).
    file: PathBuf,

    /// Parent segment separator.
    #[arg(long)]
    parent_separator: Option<String>,

    /// Maximum parent segment size in characters.
    #[arg(long)]
    parent_chunk_size: Option<usize>,

    /// Overlap between size-constrained parent segments.
    #[arg(long)]
    parent_chunk_overlap: Option<usize>,

    /// Child chunk separator.
    #[arg(long)]
    child_separator: Option<String>,

    /// Maximum child chunk size in characters.
    #[arg(long)]
    child_chunk_size: Option<usize>,

    /// Overlap between size-constrained child chunks.
    #[arg(long)]
    child_chunk_overlap: Option<usize>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn split_configuration(&self, app_config: &Config) -> SplitConfiguration {
        let mut config = SplitConfiguration::from(&app_config.split);
        if let Some(sep) = &self.parent_separator {
            config.parent_separator = sep.clone();
        }
        if let Some(size) = self.parent_chunk_size {
            config.parent_chunk_size = size;
        }
        if let Some(overlap) = self.parent_chunk_overlap {
            config.parent_chunk_overlap = overlap;
        }
        if let Some(sep) = &self.child_separator {
            config.child_separator = sep.clone();
        }
        if let Some(size) = self.child_chunk_size {
            config.child_chunk_size = size;
        }
        if let Some(overlap) = self.child_chunk_overlap {
            config.child_chunk_overlap = overlap;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    load_dotenv();
    let app_config = Config::from_env();
    app_config.log_summary();

    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("reading {}", cli.file.display()))?;
    let filename = cli
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.txt");

    let document = extract_text(&bytes, filename).context("extracting document text")?;
    let config = cli.split_configuration(&app_config);

    let preview = preview_split(&document, &config).context("splitting document")?;

    let json = if cli.compact {
        serde_json::to_string(&preview)?
    } else {
        serde_json::to_string_pretty(&preview)?
    };
    println!("{json}");

    Ok(())
}
