use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::keyword::{count_keywords, NoiseWords};
use crate::postings::{Occurrence, PostingList};
use crate::source::{Corpus, NoiseWordSource};

/// Master mapping from keyword to its frequency-ordered posting list.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct KeywordIndex {
    postings: HashMap<String, PostingList>,
    doc_count: u32,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one document's keyword counts into the index. Every keyword
    /// contributes exactly one occurrence, placed by sorted insertion.
    pub fn merge_document(&mut self, doc: &str, counts: HashMap<String, u32>) {
        for (keyword, freq) in counts {
            self.postings
                .entry(keyword)
                .or_default()
                .insert(Occurrence::new(doc, freq));
        }
        self.doc_count += 1;
    }

    /// Postings for a keyword, best first. Unknown keywords yield an empty
    /// slice rather than an error.
    pub fn postings(&self, keyword: &str) -> &[Occurrence] {
        self.postings
            .get(keyword)
            .map(PostingList::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.postings.contains_key(keyword)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }

    pub fn doc_count(&self) -> u32 {
        self.doc_count
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// Build an index over a corpus.
///
/// Loads the noise words once, then counts and merges every document in
/// manifest order. An unreadable document or noise source aborts the whole
/// build; no partial index is returned.
pub fn build_index(corpus: &impl Corpus, noise: &impl NoiseWordSource) -> Result<KeywordIndex> {
    let noise = NoiseWords::load(noise)?;
    let mut index = KeywordIndex::new();
    for doc in corpus.documents()? {
        let tokens = corpus.tokens(&doc)?;
        let counts = count_keywords(&tokens, &noise);
        tracing::debug!(
            doc = %doc,
            tokens = tokens.len(),
            keywords = counts.len(),
            "indexed document"
        );
        index.merge_document(&doc, counts);
    }
    Ok(index)
}
