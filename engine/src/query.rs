use std::collections::HashSet;

use crate::index::KeywordIndex;
use crate::postings::Occurrence;

/// Default result-size cap for two-keyword searches.
pub const RESULT_LIMIT: usize = 5;

/// Documents matching either keyword, best first.
///
/// The two posting lists are concatenated with `kw1` ahead, stable-sorted
/// by descending frequency so ties favor `kw1`, deduplicated keeping each
/// document's highest-ranked entry, and truncated to `limit`. A keyword
/// with no postings contributes nothing; an empty result is a valid answer.
pub fn top_docs(index: &KeywordIndex, kw1: &str, kw2: &str, limit: usize) -> Vec<String> {
    let mut combined: Vec<&Occurrence> = Vec::new();
    combined.extend(index.postings(kw1));
    combined.extend(index.postings(kw2));
    combined.sort_by(|a, b| b.freq.cmp(&a.freq));

    let mut seen = HashSet::new();
    combined
        .into_iter()
        .filter(|occ| seen.insert(occ.doc.as_str()))
        .take(limit)
        .map(|occ| occ.doc.clone())
        .collect()
}
