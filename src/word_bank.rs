use std::path::Path;

use rand::seq::SliceRandom;

use crate::error::GameError;

/// Minimum number of candidate words required before a session may start.
pub const MIN_WORDS: usize = 30;

/// The loaded collection of candidate target words. Read-only after `load`.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Loads words from a single-column CSV source with no header row.
    ///
    /// Entries are trimmed and lowercased; blank rows are skipped. A missing
    /// or unreadable source is fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        let as_data_source = |source: csv::Error| GameError::DataSource {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(as_data_source)?;

        let mut words = Vec::new();
        for record in reader.records() {
            let record = record.map_err(as_data_source)?;
            if let Some(word) = record.get(0) {
                let word = word.trim();
                if !word.is_empty() {
                    words.push(word.to_lowercase());
                }
            }
        }

        log::debug!("loaded {} words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Reports whether enough words are loaded for a session, printing the
    /// status line either way. The session must not start when this is false.
    pub fn validate_minimum(&self) -> bool {
        if self.count() < MIN_WORDS {
            log::warn!("only {} words loaded, {} required", self.count(), MIN_WORDS);
            println!("Not enough words. Game failed to start.");
            false
        } else {
            log::info!("{} words loaded", self.count());
            println!("Words loaded. Ready!");
            true
        }
    }

    /// Uniform random selection over the full bank, with replacement across
    /// rounds. `None` only when the bank is empty.
    pub fn pick_random(&self) -> Option<&str> {
        self.words
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }
}
