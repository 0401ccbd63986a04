//! Isolated test environment with temp directory.

use super::{MemoCommand, TestNote};
use memo::domain::Note;
use memo::store::{self, FileStore, STORAGE_KEY};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary storage directory.
///
/// The directory is removed when the TestEnv is dropped. A separate
/// config directory keeps the user's own config file out of the way.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the storage directory
    dir: PathBuf,
    /// Path used as XDG_CONFIG_HOME / HOME for spawned commands
    home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty store.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().join("store");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&dir).expect("Failed to create store directory");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        Self {
            _temp_dir: temp_dir,
            dir,
            home,
        }
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the document path for the default key.
    pub fn document_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", STORAGE_KEY))
    }

    /// Writes `notes` as the document under the default key.
    pub fn seed(&self, notes: &[TestNote]) -> Vec<Note> {
        let notes: Vec<Note> = notes.iter().map(TestNote::to_note).collect();
        let mut store = FileStore::open(&self.dir).expect("Failed to open store");
        store::save(&mut store, STORAGE_KEY, &notes).expect("Failed to seed notes");
        notes
    }

    /// Writes raw text as the document under the default key.
    pub fn write_document(&self, raw: &str) {
        std::fs::write(self.document_path(), raw).expect("Failed to write document");
    }

    /// Loads the notes stored under `key`.
    pub fn load_key(&self, key: &str) -> Vec<Note> {
        let store = FileStore::open(&self.dir).expect("Failed to open store");
        store::load(&store, key).expect("Failed to load notes")
    }

    /// Loads the notes stored under the default key.
    pub fn load(&self) -> Vec<Note> {
        self.load_key(STORAGE_KEY)
    }

    /// Creates a MemoCommand configured for this test environment.
    pub fn cmd(&self) -> MemoCommand {
        MemoCommand::new().home(&self.home).dir(&self.dir)
    }

    /// Returns a path inside the environment (not created).
    pub fn path(&self, name: &str) -> PathBuf {
        self._temp_dir.path().join(name)
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
