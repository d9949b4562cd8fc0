use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Directory holding the round and session logs.
    pub fn log_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("hangman");
            Some(state_dir)
        } else {
            ProjectDirs::from("", "", "hangman")
                .map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf())
        }
    }
}
