use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::source::NoiseWordSource;

/// Punctuation a keyword may trail off with. Anything else embedded in a
/// token disqualifies it.
const TRAILING_PUNCTUATION: &[char] = &['!', '?', ',', '.', ':', ';'];

lazy_static! {
    static ref ALPHABETIC: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();
}

/// Words excluded from indexing. Members are stored lowercased, so lookups
/// with a lowercased keyword are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        NoiseWords { words }
    }

    /// Read a source once and build the set.
    pub fn load(source: &impl NoiseWordSource) -> Result<Self> {
        Ok(Self::from_words(source.noise_words()?))
    }

    /// Small built-in English list for callers without a word file.
    pub fn english() -> Self {
        Self::from_words([
            "a", "an", "and", "are", "as", "at", "be", "by", "for", "from",
            "has", "he", "in", "is", "it", "its", "of", "on", "that", "the",
            "to", "was", "will", "with",
        ])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Normalize a raw token into a keyword.
///
/// Trailing punctuation (`! ? , . : ;`) is stripped repeatedly, the rest
/// must be ASCII letters only, and the lowercased result must not be a
/// noise word. Returns `None` for tokens that fail any step.
pub fn normalize(raw: &str, noise: &NoiseWords) -> Option<String> {
    let stripped = raw.trim_end_matches(TRAILING_PUNCTUATION);
    if stripped.is_empty() || !ALPHABETIC.is_match(stripped) {
        return None;
    }
    let keyword = stripped.to_lowercase();
    if noise.contains(&keyword) {
        return None;
    }
    Some(keyword)
}

/// Count keyword frequencies over one document's token stream. Tokens that
/// do not normalize are skipped.
pub fn count_keywords<I, S>(tokens: I, noise: &NoiseWords) -> HashMap<String, u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokens {
        if let Some(keyword) = normalize(token.as_ref(), noise) {
            *counts.entry(keyword).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_noise() -> NoiseWords {
        NoiseWords::default()
    }

    #[test]
    fn lowercases_and_strips_trailing_punctuation() {
        assert_eq!(normalize("Question?", &no_noise()), Some("question".into()));
        assert_eq!(normalize("mixed!?,.:;", &no_noise()), Some("mixed".into()));
        assert_eq!(normalize("plain", &no_noise()), Some("plain".into()));
    }

    #[test]
    fn rejects_interior_punctuation_and_digits() {
        assert_eq!(normalize("equi-distant", &no_noise()), None);
        assert_eq!(normalize("what's", &no_noise()), None);
        assert_eq!(normalize("mid.dle", &no_noise()), None);
        assert_eq!(normalize("route66", &no_noise()), None);
        assert_eq!(normalize("(paren)", &no_noise()), None);
    }

    #[test]
    fn rejects_empty_and_all_punctuation_tokens() {
        assert_eq!(normalize("", &no_noise()), None);
        assert_eq!(normalize("!!!", &no_noise()), None);
        assert_eq!(normalize("?.,", &no_noise()), None);
    }

    #[test]
    fn rejects_noise_words_after_lowercasing() {
        let noise = NoiseWords::from_words(["the", "IS"]);
        assert_eq!(normalize("The", &noise), None);
        assert_eq!(normalize("THE!", &noise), None);
        assert_eq!(normalize("is", &noise), None);
        assert_eq!(normalize("these", &noise), Some("these".into()));
    }

    #[test]
    fn counts_merge_case_and_punctuation_variants() {
        let counts = count_keywords(
            ["Apple", "apple!", "APPLE?,", "pear", "3apples"],
            &no_noise(),
        );
        assert_eq!(counts.get("apple"), Some(&3));
        assert_eq!(counts.get("pear"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn no_tokens_means_no_counts() {
        let counts = count_keywords(std::iter::empty::<&str>(), &no_noise());
        assert!(counts.is_empty());
    }

    #[test]
    fn english_list_is_lowercased_and_nonempty() {
        let noise = NoiseWords::english();
        assert!(noise.contains("the"));
        assert!(!noise.is_empty());
        assert!(noise.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }
}
