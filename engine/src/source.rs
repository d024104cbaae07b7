use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use walkdir::WalkDir;

use crate::keyword::NoiseWords;

/// Ordered document corpus: a listing of identifiers plus per-document
/// token streams.
pub trait Corpus {
    /// Document identifiers in indexing order.
    fn documents(&self) -> Result<Vec<String>>;

    /// Whitespace-delimited tokens of one document. Fails when the
    /// document cannot be read.
    fn tokens(&self, doc: &str) -> Result<Vec<String>>;
}

/// One-shot supplier of raw noise words.
pub trait NoiseWordSource {
    fn noise_words(&self) -> Result<Vec<String>>;
}

/// An already-built set is its own source.
impl NoiseWordSource for NoiseWords {
    fn noise_words(&self) -> Result<Vec<String>> {
        Ok(self.iter().map(str::to_string).collect())
    }
}

/// Manifest-driven corpus: a text file naming one document path per line,
/// resolved relative to the manifest's directory. Blank lines and `#`
/// comments are skipped. The listed string is the document identifier.
pub struct FsCorpus {
    manifest: PathBuf,
    root: PathBuf,
}

impl FsCorpus {
    pub fn from_manifest<P: AsRef<Path>>(manifest: P) -> Self {
        let manifest = manifest.as_ref().to_path_buf();
        let root = manifest
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        FsCorpus { manifest, root }
    }
}

impl Corpus for FsCorpus {
    fn documents(&self) -> Result<Vec<String>> {
        let listing = fs::read_to_string(&self.manifest)
            .with_context(|| format!("reading corpus manifest {}", self.manifest.display()))?;
        Ok(listing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }

    fn tokens(&self, doc: &str) -> Result<Vec<String>> {
        read_tokens(&self.root.join(doc))
    }
}

/// Directory corpus: every `.txt` file under a root, identified by its
/// root-relative path. Paths are sorted so rebuilds see the same order.
pub struct DirCorpus {
    root: PathBuf,
}

impl DirCorpus {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        DirCorpus {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl Corpus for DirCorpus {
    fn documents(&self) -> Result<Vec<String>> {
        let mut docs = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry =
                entry.with_context(|| format!("walking corpus dir {}", self.root.display()))?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
                let rel = path.strip_prefix(&self.root).unwrap_or(path);
                docs.push(rel.to_string_lossy().into_owned());
            }
        }
        docs.sort();
        Ok(docs)
    }

    fn tokens(&self, doc: &str) -> Result<Vec<String>> {
        read_tokens(&self.root.join(doc))
    }
}

/// Noise words from a whitespace-delimited file.
pub struct FsNoiseWords {
    path: PathBuf,
}

impl FsNoiseWords {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FsNoiseWords {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NoiseWordSource for FsNoiseWords {
    fn noise_words(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading noise words {}", self.path.display()))?;
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}

/// In-memory corpus for tests and embedders that already hold their
/// documents.
#[derive(Debug, Default)]
pub struct MemCorpus {
    docs: Vec<(String, String)>,
}

impl MemCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.docs.push((name.into(), text.into()));
        self
    }
}

impl Corpus for MemCorpus {
    fn documents(&self) -> Result<Vec<String>> {
        Ok(self.docs.iter().map(|(name, _)| name.clone()).collect())
    }

    fn tokens(&self, doc: &str) -> Result<Vec<String>> {
        let (_, text) = self
            .docs
            .iter()
            .find(|(name, _)| name == doc)
            .ok_or_else(|| anyhow!("unknown document {doc}"))?;
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}

fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}
