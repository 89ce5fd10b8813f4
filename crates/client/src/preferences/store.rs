use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::Result;

/// Durable string key/value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store, forgotten on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk. A missing file reads as an empty store, and every
/// `set` replaces the whole file before returning. The new content is written
/// to a sibling temporary file first and renamed over the old one, so the file
/// on disk is always either the previous or the new version.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            "Loaded {} preference(s) from {}",
            entries.len(),
            path.display()
        );

        Ok(Self { path, entries })
    }

    /// Like [`FileStore::open`], but an unreadable or corrupted file yields an
    /// empty store at the same path. The file is replaced on the next `set`.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(
                    "Ignoring preferences at {}, using defaults: {}",
                    path.display(),
                    e
                );
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let json = serde_json::to_string_pretty(&self.entries)?;

        let mut file = NamedTempFile::new_in(parent)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    /// On failure the in-memory entries are left as they were.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.flush() {
            match previous {
                Some(previous) => self.entries.insert(key.to_string(), previous),
                None => self.entries.remove(key),
            };
            return Err(e);
        }

        Ok(())
    }
}
