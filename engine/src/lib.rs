//! Frequency-ranked keyword index over a document corpus, plus the
//! two-keyword disjunctive search that answers against it.

pub mod index;
pub mod keyword;
pub mod persist;
pub mod postings;
pub mod query;
pub mod source;

pub use index::{build_index, KeywordIndex};
pub use keyword::{count_keywords, normalize, NoiseWords};
pub use postings::{Occurrence, PostingList};
pub use query::{top_docs, RESULT_LIMIT};
pub use source::{Corpus, DirCorpus, FsCorpus, FsNoiseWords, MemCorpus, NoiseWordSource};
