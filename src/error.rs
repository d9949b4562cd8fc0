use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the game core and the log writers.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("word source '{path}' is missing or unreadable: {source}")]
    DataSource {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("word bank holds {loaded} words, at least 30 required")]
    InsufficientWords { loaded: usize },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode log record: {0}")]
    Record(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_words_names_the_threshold() {
        let err = GameError::InsufficientWords { loaded: 12 };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn data_source_carries_the_path() {
        let csv_err = match csv::ReaderBuilder::new().from_path("/definitely/not/here.csv") {
            Err(e) => e,
            Ok(_) => panic!("expected a missing-file error"),
        };
        let err = GameError::DataSource {
            path: PathBuf::from("/definitely/not/here.csv"),
            source: csv_err,
        };
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
