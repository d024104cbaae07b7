use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use engine::persist::{save_index, save_meta, IndexPaths, MetaFile, INDEX_VERSION};
use engine::{build_index, DirCorpus, FsCorpus, FsNoiseWords, KeywordIndex, NoiseWords};
use tracing_subscriber::{fmt, EnvFilter};

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a frequency-ranked keyword index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from a corpus manifest or a document directory
    Build {
        /// Manifest file naming one document per line
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Directory of .txt documents, indexed in sorted order
        #[arg(long)]
        docs_dir: Option<PathBuf>,
        /// Noise-word file; defaults to a built-in English list
        #[arg(long)]
        noise_words: Option<PathBuf>,
        /// Output index directory
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            manifest,
            docs_dir,
            noise_words,
            output,
        } => build(manifest, docs_dir, noise_words, &output),
    }
}

fn build(
    manifest: Option<PathBuf>,
    docs_dir: Option<PathBuf>,
    noise_words: Option<PathBuf>,
    output: &Path,
) -> Result<()> {
    let noise = match noise_words {
        Some(path) => NoiseWords::load(&FsNoiseWords::new(path))?,
        None => NoiseWords::english(),
    };
    tracing::debug!(noise_words = noise.len(), "noise words loaded");

    let index = match (manifest, docs_dir) {
        (Some(manifest), None) => build_index(&FsCorpus::from_manifest(manifest), &noise)?,
        (None, Some(dir)) => build_index(&DirCorpus::new(dir), &noise)?,
        _ => return Err(anyhow!("exactly one of --manifest or --docs-dir is required")),
    };

    save(&index, output)?;
    tracing::info!(
        num_docs = index.doc_count(),
        num_keywords = index.keyword_count(),
        output = %output.display(),
        "index build complete"
    );
    Ok(())
}

fn save(index: &KeywordIndex, output: &Path) -> Result<()> {
    let paths = IndexPaths::new(output);
    save_index(&paths, index)?;
    let meta = MetaFile {
        num_docs: index.doc_count(),
        num_keywords: index.keyword_count() as u32,
        created_at: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "".into()),
        version: INDEX_VERSION,
    };
    save_meta(&paths, &meta)
}
