//! In-memory document repository for unit testing.
//!
//! Stores the encoded JSON text rather than the document itself, so decode
//! errors and partial documents behave exactly as they would on disk.
//! Clones share state: keep a clone in the test after moving the original
//! into a [`ConfigStore`](crate::application::config_store::ConfigStore).

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use deskshell_core::{decode_document, encode_document, ConfigDocument, ConfigError};

use crate::application::ports::DocumentRepository;

/// A [`DocumentRepository`] that keeps the file content in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    contents: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl MemoryRepository {
    /// A repository with nothing stored yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose stored text is `text`.
    pub fn with_contents(text: &str) -> Self {
        let repo = Self::new();
        repo.set_contents(text);
        repo
    }

    /// Replaces the stored text without counting as a write.
    pub fn set_contents(&self, text: &str) {
        *self.contents.lock().expect("lock poisoned") = Some(text.to_string());
    }

    /// Makes subsequent writes fail with [`ConfigError::Write`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().expect("lock poisoned").clone()
    }

    /// Decodes the stored text, if any.
    pub fn stored_document(&self) -> Option<ConfigDocument> {
        self.contents()
            .map(|text| decode_document(&text).expect("stored text must decode"))
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl DocumentRepository for MemoryRepository {
    fn location(&self) -> &Path {
        Path::new("memory://config.json")
    }

    fn exists(&self) -> bool {
        self.contents.lock().expect("lock poisoned").is_some()
    }

    fn read(&self) -> Result<ConfigDocument, ConfigError> {
        match self.contents() {
            Some(text) => decode_document(&text),
            None => Err(ConfigError::Read {
                path: self.location().to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no stored document"),
            }),
        }
    }

    fn write(&self, doc: &ConfigDocument) -> Result<(), ConfigError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ConfigError::Write {
                path: self.location().to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        let text = encode_document(doc)?;
        self.set_contents(&text);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
