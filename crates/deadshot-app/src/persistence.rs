//! High-score persistence — a single integer stored as a small JSON file
//! in the platform data directory.
//!
//! Load failures fall back to 0 (first run or unreadable file); save
//! failures are reported to the caller, who logs and moves on.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

const APP_DIR: &str = "deadshot";
const HIGH_SCORE_FILE: &str = "high_score.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load the persisted high score, 0 when absent or unreadable.
pub fn load_high_score() -> u32 {
    load_high_score_from(&data_dir())
}

/// Persist the high score.
pub fn save_high_score(value: u32) -> io::Result<()> {
    save_high_score_to(&data_dir(), value)
}

pub fn load_high_score_from(dir: &Path) -> u32 {
    let path = dir.join(HIGH_SCORE_FILE);
    match fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str::<HighScoreFile>(&contents) {
            Ok(file) => file.high_score,
            Err(e) => {
                debug!("unreadable high score file, starting from 0: {e}");
                0
            }
        },
        // First run: no file yet.
        Err(_) => 0,
    }
}

pub fn save_high_score_to(dir: &Path, value: u32) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string(&HighScoreFile { high_score: value })?;
    fs::write(dir.join(HIGH_SCORE_FILE), json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_high_score_from(dir.path()), 0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        save_high_score_to(dir.path(), 1234).unwrap();
        assert_eq!(load_high_score_from(dir.path()), 1234);

        // Overwrites stick.
        save_high_score_to(dir.path(), 5000).unwrap();
        assert_eq!(load_high_score_from(dir.path()), 5000);
    }

    #[test]
    fn test_garbage_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(HIGH_SCORE_FILE), "not json").unwrap();
        assert_eq!(load_high_score_from(dir.path()), 0);
    }
}
