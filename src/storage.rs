use std::path::PathBuf;

// ── contract ──────────────────────────────────────────────────────────────────

/// Persistent key-value storage consumed by the template cache and the
/// session store. Values survive process restart; there is no expiry.
pub trait KvStore {
    /// Returns the stored value, or `None` when the key has never been set.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

// ── file-backed implementation ────────────────────────────────────────────────

/// One file per key under a single directory. Writes are last-writer-wins;
/// access is single-threaded so no locking is needed.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Opens the store in the platform data directory (e.g.
    /// `~/.local/share/kubepanel` on Linux), creating it if needed.
    pub fn open_default() -> Result<Self, String> {
        let dir = dirs::data_dir()
            .ok_or_else(|| "Cannot determine data directory".to_string())?
            .join("kubepanel");
        std::fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
        Ok(FileStore { dir })
    }

    /// Maps a key to a file path. Anything outside `[A-Za-z0-9._-]` is
    /// replaced so a key can never escape the store directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(name)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("storage: cannot read {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create {}: {e}", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }
}
