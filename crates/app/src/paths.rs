//! Where the quiz keeps its files.

use std::path::PathBuf;

const APP_DIR: &str = "quiz-trainer";

/// Pick the data directory: an explicit override wins, then the platform
/// data directory, then the system temp directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(default_data_dir)
        .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR))
}

/// Linux: ~/.local/share/quiz-trainer
/// macOS: ~/Library/Application Support/quiz-trainer
/// Windows: %APPDATA%\quiz-trainer
fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}
