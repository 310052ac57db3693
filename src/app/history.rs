use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing::debug;

/// Persistence for past city searches, oldest first.
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Result<Vec<String>>;
    fn save(&self, entries: &[String]) -> Result<()>;
}

/// Trimmed, lowercased form a query is stored under. Blank queries have none.
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    let normalized = query.trim().to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn load_from(store: &dyn HistoryStore) -> Result<Self> {
        store.load().map(Self::from_entries)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, query: &str) -> bool {
        normalize_query(query).is_some_and(|q| self.entries.contains(&q))
    }

    /// Appends the normalized query unless it is blank or already present.
    pub fn record(&mut self, query: &str) -> bool {
        let Some(normalized) = normalize_query(query) else {
            return false;
        };
        if self.entries.contains(&normalized) {
            return false;
        }
        self.entries.push(normalized);
        true
    }

    pub fn remove(&mut self, query: &str) -> bool {
        let Some(normalized) = normalize_query(query) else {
            return false;
        };
        let before = self.entries.len();
        self.entries.retain(|entry| *entry != normalized);
        self.entries.len() != before
    }
}

/// History kept as a JSON array of strings.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err).context("reading history file failed"),
        };
        serde_json::from_str(&content).context("parsing history file failed")
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("creating history directory failed")?;
        }
        let payload = serde_json::to_string(entries).context("serializing history failed")?;
        fs::write(&self.path, payload).context("writing history file failed")?;
        debug!(path = %self.path.display(), count = entries.len(), "history saved");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistoryStore {
    pub fn with_entries(entries: Vec<String>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<Vec<String>> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|_| anyhow::anyhow!("history lock poisoned"))
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("history lock poisoned"))?;
        *guard = entries.to_vec();
        Ok(())
    }
}
