use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use pcrhelper_core::{History, HistoryStore};

pub const HISTORY_ENV: &str = "PCRHELPER_HISTORY";
const HISTORY_FILE_NAME: &str = ".pcrhelper_history.json";

/// History persisted as a JSON array of strings, most recent first.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Explicit path, then `$PCRHELPER_HISTORY`, then the home directory,
    /// then the working directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let path = explicit
            .or_else(|| std::env::var_os(HISTORY_ENV).map(PathBuf::from))
            .or_else(|| std::env::var_os("HOME").map(|h| Path::new(&h).join(HISTORY_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(HISTORY_FILE_NAME));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    type Error = anyhow::Error;

    fn load(&self) -> Result<History> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return Ok(History::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("reading history from {}", self.path.display()))
            }
        };

        match serde_json::from_str::<History>(&text) {
            Ok(history) => Ok(history),
            Err(e) => {
                // a corrupt file should not block analysis; it is overwritten on next save
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable history file");
                Ok(History::new())
            }
        }
    }

    fn save(&mut self, history: &History) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing history to {}", self.path.display()))?;
        debug!(path = %self.path.display(), entries = history.len(), "saved history");
        Ok(())
    }
}
