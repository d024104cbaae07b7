use serde::{Deserialize, Serialize};

/// One keyword's presence in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub doc: String,
    pub freq: u32,
}

impl Occurrence {
    pub fn new(doc: impl Into<String>, freq: u32) -> Self {
        Occurrence {
            doc: doc.into(),
            freq,
        }
    }
}

/// Per-keyword occurrence list, kept in non-strict descending frequency
/// order. Entries with equal frequency stay in first-inserted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    entries: Vec<Occurrence>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one occurrence at its sorted position.
    ///
    /// Binary-searches for the first index whose frequency is strictly
    /// below the new one, so existing entries with the same frequency keep
    /// their place ahead of it. The net effect is the same as appending and
    /// stable-sorting by descending frequency, with one element shift.
    ///
    /// Returns the midpoint indices the search visited, in order, or `None`
    /// when the list held no prior entry to search.
    pub fn insert(&mut self, occ: Occurrence) -> Option<Vec<usize>> {
        if self.entries.is_empty() {
            self.entries.push(occ);
            return None;
        }
        let mut low = 0;
        let mut high = self.entries.len();
        let mut midpoints = Vec::new();
        while low < high {
            let mid = (low + high) / 2;
            midpoints.push(mid);
            if self.entries[mid].freq >= occ.freq {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        self.entries.insert(low, occ);
        Some(midpoints)
    }

    pub fn as_slice(&self) -> &[Occurrence] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
