use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, WayfindError};

/// A deduplicated set of lowercase words
///
/// Loading normalizes every token to lowercase, so membership checks can
/// assume pre-normalized input.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load whitespace-separated words from a file, lowercasing each one
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|source| WayfindError::DictionaryUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let dictionary = Self::from_words(contents.split_whitespace());
        tracing::debug!(words = dictionary.len(), "dictionary_loaded");
        Ok(dictionary)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
