use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// How many scores survive across sessions.
pub const TOP_SCORES: usize = 5;

/// The persisted top-5 list: a JSON array of integers, descending, in one
/// flat file. Reading never fails — an absent or unreadable file is the
/// same as a board of five zeros.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> ScoreStore {
        ScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Vec<u32> {
        let mut scores = fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str::<Vec<u32>>(&text).ok())
            .unwrap_or_default();
        scores.resize(TOP_SCORES, 0);
        scores
    }

    pub fn save(&self, scores: &[u32]) -> io::Result<()> {
        let json = serde_json::to_string(scores)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, json)
    }

    /// Folds one finished session into the board and persists it. A failed
    /// write is reported but the merged list is returned either way, so the
    /// session keeps a valid board even without a disk.
    ///
    /// The sort is stable: a new score ranks below older entries of the
    /// same value.
    pub fn update(&self, score: u32) -> Vec<u32> {
        let mut scores = self.load();
        scores.push(score);
        scores.sort_by(|a, b| b.cmp(a));
        scores.truncate(TOP_SCORES);
        if let Err(err) = self.save(&scores) {
            eprintln!(
                "failed to write high scores to {}: {}",
                self.path.display(),
                err
            );
        }
        scores
    }
}
