//! Use case: own the preferences document and keep it durable.
//!
//! # Overview
//!
//! [`ConfigStore`] is the single source of truth for user preferences.  It
//! holds the in-memory [`ConfigDocument`] and a [`DocumentRepository`] that
//! knows where the document lives on disk.
//!
//! ## Startup
//!
//! [`ConfigStore::initialize`] runs three steps in order:
//!
//! 1. `create_if_absent` – write an all-defaults file if none exists.
//! 2. `load` – read the file, replacing the in-memory document.
//! 3. `merge_defaults` – fill absent fields from the default table and
//!    persist if anything was filled.
//!
//! ## Updates
//!
//! Every setter mutates memory first and then saves the whole document.  A
//! failed save is logged and returned but the new value stays live: memory is
//! authoritative, persistence is best effort.
//!
//! ## Shutdown
//!
//! Once [`ConfigStore::close`] has run, every write is skipped and logged.
//! The close hook's geometry snapshot is the last thing written.
//!
//! # Concurrency
//!
//! The store has no internal locking.  The UI bridge keeps it behind a
//! `tokio::sync::Mutex`.

use std::path::Path;

use deskshell_core::domain::defaults;
use deskshell_core::{
    fill_absent, ConfigDocument, ConfigError, ConfigField, FieldError, FieldValue, WindowGeometry,
    WindowState,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::application::ports::DocumentRepository;

/// Error returned by name-keyed updates.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Persist(#[from] ConfigError),
}

/// What [`ConfigStore::initialize`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Initialization {
    /// A fresh all-defaults file was written.
    pub created: bool,
    /// At least one absent field was filled from defaults.
    pub merged: bool,
}

/// Owns the preferences document and its backing repository.
pub struct ConfigStore<R> {
    repo: R,
    document: ConfigDocument,
    defaults: ConfigDocument,
    closed: bool,
}

impl<R: DocumentRepository> ConfigStore<R> {
    /// Creates a store whose in-memory document starts as the defaults.
    ///
    /// Nothing is read or written until [`ConfigStore::initialize`] runs.
    pub fn new(repo: R) -> Self {
        let defaults = ConfigDocument::defaults();
        Self {
            repo,
            document: defaults.clone(),
            defaults,
            closed: false,
        }
    }

    pub fn path(&self) -> &Path {
        self.repo.location()
    }

    /// Returns `true` if a stored document exists.
    pub fn file_exists(&self) -> bool {
        self.repo.exists()
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Stops all further writes.  In-memory updates still apply.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn persist(&self, doc: &ConfigDocument) -> Result<(), ConfigError> {
        if self.closed {
            warn!(path = %self.path().display(), "Config store closed; skipping write");
            return Ok(());
        }
        self.repo.write(doc)
    }

    // ── Bulk operations ───────────────────────────────────────────────────────

    /// Writes an all-defaults document if nothing is stored yet.
    ///
    /// Returns `true` if a file was created.  An existing file is never
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Write`] if the file cannot be created.
    pub fn create_if_absent(&self) -> Result<bool, ConfigError> {
        if self.repo.exists() {
            return Ok(false);
        }
        info!(path = %self.path().display(), "Creating default config");
        self.persist(&self.defaults)?;
        Ok(true)
    }

    /// Replaces the in-memory document with the stored one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Decode`]; the in-memory
    /// document is untouched in either case.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        info!("Loading config");
        let doc = self.repo.read()?;
        if let (Some(theme), None) = (doc.theme.as_deref(), doc.theme_kind()) {
            warn!("Unrecognised theme {theme:?}; keeping it");
        }
        self.document = doc;
        Ok(())
    }

    /// Fills every absent field from the default table.
    ///
    /// Present values are never overwritten, even unrecognised ones.  If
    /// anything was filled, the document is saved; a save failure is logged.
    /// Returns `true` if any field was filled.
    pub fn merge_defaults(&mut self) -> bool {
        info!("Merging default config");
        let dirty = fill_absent(&mut self.document, &self.defaults);
        if dirty {
            if let Err(e) = self.save() {
                error!(error = %e, "Failed to save merged config");
            }
        }
        dirty
    }

    /// Runs `create_if_absent`, `load` and `merge_defaults` in that order.
    ///
    /// # Errors
    ///
    /// Returns the first create or load error.  The in-memory document then
    /// keeps whatever it held before (the defaults on a fresh store).
    pub fn initialize(&mut self) -> Result<Initialization, ConfigError> {
        let created = self.create_if_absent()?;
        self.load()?;
        let merged = self.merge_defaults();
        Ok(Initialization { created, merged })
    }

    /// Writes the whole document, replacing the stored one.  A closed store
    /// skips the write and returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Write`] or [`ConfigError::Encode`].
    pub fn save(&self) -> Result<(), ConfigError> {
        self.persist(&self.document)
    }

    /// Replaces the whole document with the defaults and saves it.
    ///
    /// # Errors
    ///
    /// Returns the save error; the in-memory reset is kept.
    pub fn reset_to_defaults(&mut self) -> Result<(), ConfigError> {
        info!("Resetting config to defaults");
        self.document = self.defaults.clone();
        self.save().map_err(|e| {
            error!(error = %e, "Failed to save config after reset");
            e
        })
    }

    /// Adopts `doc` as the current document, fills absent fields and saves.
    ///
    /// # Errors
    ///
    /// Returns the save error; the imported document stays live.
    pub fn import_document(&mut self, mut doc: ConfigDocument) -> Result<(), ConfigError> {
        fill_absent(&mut doc, &self.defaults);
        self.document = doc;
        info!("Imported config");
        self.save().map_err(|e| {
            error!(error = %e, "Failed to save imported config");
            e
        })
    }

    /// Records the window geometry captured at close time and saves.
    ///
    /// # Errors
    ///
    /// Returns the save error; the snapshot stays in memory.
    pub fn snapshot_window(&mut self, geometry: WindowGeometry) -> Result<(), ConfigError> {
        self.document.apply_geometry(geometry);
        debug!(
            x = geometry.x,
            y = geometry.y,
            width = geometry.width,
            height = geometry.height,
            state = geometry.state.code(),
            "Captured window geometry"
        );
        self.save()
    }

    // ── Name-keyed access ─────────────────────────────────────────────────────

    /// Current value of `field`, falling back to its default when absent.
    pub fn field(&self, field: ConfigField) -> FieldValue {
        self.document
            .get(field)
            .or_else(|| self.defaults.get(field))
            .unwrap_or_else(|| FieldValue::Text(String::new()))
    }

    /// Looks `name` up case-insensitively and renders its value as text.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::UnknownField`] for an unrecognised name.
    pub fn field_by_name(&self, name: &str) -> Result<String, FieldError> {
        let field: ConfigField = name.parse()?;
        Ok(self.field(field).to_string())
    }

    /// Parses `raw` for the field named `name`, then behaves like the typed
    /// setter.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Field`] before touching the document if the name
    /// or value is invalid, or [`UpdateError::Persist`] if the save fails.
    pub fn set_field_by_name(&mut self, name: &str, raw: &str) -> Result<ConfigField, UpdateError> {
        let field: ConfigField = name.parse()?;
        let value = FieldValue::parse(field, raw)?;
        self.document.set(field, value)?;
        self.commit(field)?;
        Ok(field)
    }

    /// Persists after a single-field mutation and logs the new value.
    fn commit(&mut self, field: ConfigField) -> Result<(), ConfigError> {
        let result = self.save();
        let shown = self.field(field);
        debug!("Setting {field} to {shown}");
        if let Err(e) = &result {
            error!(error = %e, "Failed to save config after setting {field}");
        }
        info!("Set {field} to {shown}");
        result
    }

    // ── Typed accessors ───────────────────────────────────────────────────────

    pub fn theme(&self) -> String {
        self.document
            .theme
            .clone()
            .unwrap_or_else(|| defaults::THEME.as_str().to_string())
    }

    pub fn set_theme(&mut self, theme: &str) -> Result<(), ConfigError> {
        self.document.theme = Some(theme.to_string());
        self.commit(ConfigField::Theme)
    }

    pub fn use_system_title_bar(&self) -> bool {
        self.document
            .use_system_title_bar
            .unwrap_or(defaults::USE_SYSTEM_TITLE_BAR)
    }

    pub fn set_use_system_title_bar(&mut self, value: bool) -> Result<(), ConfigError> {
        self.document.use_system_title_bar = Some(value);
        self.commit(ConfigField::UseSystemTitleBar)
    }

    pub fn enable_logging(&self) -> bool {
        self.document.enable_logging.unwrap_or(defaults::ENABLE_LOGGING)
    }

    pub fn set_enable_logging(&mut self, value: bool) -> Result<(), ConfigError> {
        self.document.enable_logging = Some(value);
        self.commit(ConfigField::EnableLogging)
    }

    pub fn enable_trace(&self) -> bool {
        self.document.enable_trace.unwrap_or(defaults::ENABLE_TRACE)
    }

    pub fn set_enable_trace(&mut self, value: bool) -> Result<(), ConfigError> {
        self.document.enable_trace = Some(value);
        self.commit(ConfigField::EnableTrace)
    }

    pub fn enable_debug(&self) -> bool {
        self.document.enable_debug.unwrap_or(defaults::ENABLE_DEBUG)
    }

    pub fn set_enable_debug(&mut self, value: bool) -> Result<(), ConfigError> {
        self.document.enable_debug = Some(value);
        self.commit(ConfigField::EnableDebug)
    }

    pub fn enable_info(&self) -> bool {
        self.document.enable_info.unwrap_or(defaults::ENABLE_INFO)
    }

    pub fn set_enable_info(&mut self, value: bool) -> Result<(), ConfigError> {
        self.document.enable_info = Some(value);
        self.commit(ConfigField::EnableInfo)
    }

    pub fn enable_warn(&self) -> bool {
        self.document.enable_warn.unwrap_or(defaults::ENABLE_WARN)
    }

    pub fn set_enable_warn(&mut self, value: bool) -> Result<(), ConfigError> {
        self.document.enable_warn = Some(value);
        self.commit(ConfigField::EnableWarn)
    }

    pub fn enable_error(&self) -> bool {
        self.document.enable_error.unwrap_or(defaults::ENABLE_ERROR)
    }

    pub fn set_enable_error(&mut self, value: bool) -> Result<(), ConfigError> {
        self.document.enable_error = Some(value);
        self.commit(ConfigField::EnableError)
    }

    pub fn enable_fatal(&self) -> bool {
        self.document.enable_fatal.unwrap_or(defaults::ENABLE_FATAL)
    }

    pub fn set_enable_fatal(&mut self, value: bool) -> Result<(), ConfigError> {
        self.document.enable_fatal = Some(value);
        self.commit(ConfigField::EnableFatal)
    }

    pub fn window_start_position_x(&self) -> i32 {
        self.document
            .window_start_position_x
            .unwrap_or(defaults::WINDOW_POSITION)
    }

    pub fn set_window_start_position_x(&mut self, value: i32) -> Result<(), ConfigError> {
        self.document.window_start_position_x = Some(value);
        self.commit(ConfigField::WindowStartPositionX)
    }

    pub fn window_start_position_y(&self) -> i32 {
        self.document
            .window_start_position_y
            .unwrap_or(defaults::WINDOW_POSITION)
    }

    pub fn set_window_start_position_y(&mut self, value: i32) -> Result<(), ConfigError> {
        self.document.window_start_position_y = Some(value);
        self.commit(ConfigField::WindowStartPositionY)
    }

    pub fn window_start_size_x(&self) -> i32 {
        self.document
            .window_start_size_x
            .unwrap_or(defaults::WINDOW_SIZE)
    }

    pub fn set_window_start_size_x(&mut self, value: i32) -> Result<(), ConfigError> {
        self.document.window_start_size_x = Some(value);
        self.commit(ConfigField::WindowStartSizeX)
    }

    pub fn window_start_size_y(&self) -> i32 {
        self.document
            .window_start_size_y
            .unwrap_or(defaults::WINDOW_SIZE)
    }

    pub fn set_window_start_size_y(&mut self, value: i32) -> Result<(), ConfigError> {
        self.document.window_start_size_y = Some(value);
        self.commit(ConfigField::WindowStartSizeY)
    }

    /// Raw `windowStartState` code (`0` normal, `2` maximised).
    pub fn window_start_state(&self) -> i32 {
        self.document
            .window_start_state
            .unwrap_or(defaults::WINDOW_STATE.code())
    }

    pub fn set_window_start_state(&mut self, value: i32) -> Result<(), ConfigError> {
        self.document.window_start_state = Some(value);
        self.commit(ConfigField::WindowStartState)
    }

    /// Typed window state; unknown codes read as [`WindowState::Normal`].
    pub fn window_state(&self) -> WindowState {
        self.document.window_state().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::mock::MemoryRepository;

    fn store_with(contents: Option<&str>) -> (ConfigStore<MemoryRepository>, MemoryRepository) {
        let repo = match contents {
            Some(text) => MemoryRepository::with_contents(text),
            None => MemoryRepository::new(),
        };
        (ConfigStore::new(repo.clone()), repo)
    }

    #[test]
    fn test_new_store_starts_on_defaults() {
        let (store, repo) = store_with(None);
        assert_eq!(store.document(), &ConfigDocument::defaults());
        assert_eq!(repo.write_count(), 0);
    }

    #[test]
    fn test_create_if_absent_writes_defaults_once() {
        // Arrange
        let (store, repo) = store_with(None);

        // Act
        let first = store.create_if_absent().expect("create");
        let second = store.create_if_absent().expect("create");

        // Assert
        assert!(first);
        assert!(!second);
        assert_eq!(repo.write_count(), 1);
        assert_eq!(repo.stored_document(), Some(ConfigDocument::defaults()));
    }

    #[test]
    fn test_create_if_absent_keeps_existing_file() {
        let (store, repo) = store_with(Some(r#"{"theme":"dark"}"#));
        assert!(!store.create_if_absent().expect("create"));
        assert_eq!(repo.contents().as_deref(), Some(r#"{"theme":"dark"}"#));
    }

    #[test]
    fn test_initialize_theme_only_file_fills_and_persists() {
        // Arrange
        let (mut store, repo) = store_with(Some(r#"{"theme":"dark"}"#));

        // Act
        let outcome = store.initialize().expect("initialize");

        // Assert
        assert_eq!(
            outcome,
            Initialization {
                created: false,
                merged: true
            }
        );
        assert_eq!(store.theme(), "dark");
        assert!(!store.use_system_title_bar());
        assert!(store.enable_logging());
        assert!(!store.enable_trace());
        assert!(!store.enable_debug());
        assert!(store.enable_info());
        assert!(store.enable_warn());
        assert!(store.enable_error());
        assert!(store.enable_fatal());
        let stored = repo.stored_document().expect("stored");
        assert!(stored.is_complete());
        assert_eq!(stored.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_initialize_complete_file_does_not_save() {
        let text = deskshell_core::encode_document(&ConfigDocument::defaults()).expect("encode");
        let (mut store, repo) = store_with(Some(&text));

        let outcome = store.initialize().expect("initialize");

        assert!(!outcome.created);
        assert!(!outcome.merged);
        assert_eq!(repo.write_count(), 0);
    }

    #[test]
    fn test_load_decode_error_keeps_previous_document() {
        // Arrange
        let (mut store, repo) = store_with(None);
        store.set_theme("light").expect("save");
        repo.set_contents("{ not json");

        // Act
        let result = store.load();

        // Assert
        assert!(matches!(result, Err(ConfigError::Decode(_))));
        assert_eq!(store.theme(), "light");
    }

    #[test]
    fn test_initialize_failure_leaves_defaults_live() {
        let (mut store, _repo) = store_with(Some("[1, 2"));
        assert!(store.initialize().is_err());
        assert_eq!(store.document(), &ConfigDocument::defaults());
    }

    #[test]
    fn test_merge_keeps_unrecognised_theme() {
        let (mut store, _repo) = store_with(Some(r#"{"theme":"solarized"}"#));
        store.initialize().expect("initialize");
        assert_eq!(store.theme(), "solarized");
    }

    #[test]
    fn test_setter_persists_whole_document() {
        // Arrange
        let (mut store, repo) = store_with(None);
        store.initialize().expect("initialize");

        // Act
        store.set_use_system_title_bar(true).expect("save");

        // Assert
        let stored = repo.stored_document().expect("stored");
        assert_eq!(stored.use_system_title_bar, Some(true));
        assert!(stored.is_complete());
    }

    #[test]
    fn test_setter_keeps_value_when_save_fails() {
        // Arrange
        let (mut store, repo) = store_with(None);
        store.initialize().expect("initialize");
        repo.set_fail_writes(true);

        // Act
        let result = store.set_theme("dark");

        // Assert
        assert!(matches!(result, Err(ConfigError::Write { .. })));
        assert_eq!(store.theme(), "dark");
        assert_eq!(
            repo.stored_document().and_then(|d| d.theme),
            Some("system".to_string())
        );
    }

    #[test]
    fn test_closed_store_skips_writes_but_keeps_memory() {
        // Arrange
        let (mut store, repo) = store_with(None);
        store.initialize().expect("initialize");
        store.set_window_start_state(2).expect("save");
        let writes = repo.write_count();

        // Act
        store.close();
        store.set_theme("dark").expect("skipped save is not an error");
        store.reset_to_defaults().expect("reset");
        store.import_document(ConfigDocument::empty()).expect("import");
        store.set_field_by_name("theme", "light").expect("set");

        // Assert
        assert!(store.is_closed());
        assert_eq!(repo.write_count(), writes);
        let stored = repo.stored_document().expect("stored");
        assert_eq!(stored.window_start_state, Some(2));
        assert_eq!(stored.theme.as_deref(), Some("system"));
        assert_eq!(store.theme(), "light");
    }

    #[test]
    fn test_failed_setter_still_logs_completion() {
        use std::sync::Arc;

        use deskshell_core::{LogLevel, MemoryLogger};
        use tracing_subscriber::layer::SubscriberExt;

        use crate::infrastructure::logging::LoggerLayer;

        // Arrange
        let (mut store, repo) = store_with(None);
        repo.set_fail_writes(true);
        let sink = Arc::new(MemoryLogger::new());
        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(sink.clone()));

        // Act
        let result =
            tracing::subscriber::with_default(subscriber, || store.set_theme("dark"));

        // Assert
        assert!(result.is_err());
        let levels: Vec<LogLevel> = sink.entries().into_iter().map(|(level, _)| level).collect();
        assert_eq!(levels, vec![LogLevel::Debug, LogLevel::Error, LogLevel::Info]);
        assert!(sink.contains(LogLevel::Info, "Set theme to dark"));
    }

    #[test]
    fn test_set_field_by_name_is_case_insensitive() {
        let (mut store, _repo) = store_with(None);

        let field = store.set_field_by_name("EnableDebug", "true").expect("set");

        assert_eq!(field, ConfigField::EnableDebug);
        assert!(store.enable_debug());
        assert_eq!(store.field_by_name("enabledebug").expect("get"), "true");
    }

    #[test]
    fn test_set_field_by_name_rejects_bad_value_without_mutation() {
        // Arrange
        let (mut store, repo) = store_with(None);

        // Act
        let result = store.set_field_by_name("windowStartSizeX", "wide");

        // Assert
        assert!(matches!(
            result,
            Err(UpdateError::Field(FieldError::InvalidValue { .. }))
        ));
        assert_eq!(store.window_start_size_x(), defaults::WINDOW_SIZE);
        assert_eq!(repo.write_count(), 0);
    }

    #[test]
    fn test_field_by_name_unknown_field() {
        let (store, _repo) = store_with(None);
        assert!(matches!(
            store.field_by_name("language"),
            Err(FieldError::UnknownField(_))
        ));
    }

    #[test]
    fn test_reset_to_defaults_discards_customisation() {
        let (mut store, repo) = store_with(None);
        store.set_theme("dark").expect("save");
        store.set_window_start_size_x(800).expect("save");

        store.reset_to_defaults().expect("reset");

        assert_eq!(store.document(), &ConfigDocument::defaults());
        assert_eq!(repo.stored_document(), Some(ConfigDocument::defaults()));
    }

    #[test]
    fn test_import_document_fills_absent_and_saves() {
        // Arrange
        let (mut store, repo) = store_with(None);
        let imported = ConfigDocument {
            enable_trace: Some(true),
            ..ConfigDocument::empty()
        };

        // Act
        store.import_document(imported).expect("import");

        // Assert
        assert!(store.enable_trace());
        assert_eq!(store.theme(), "system");
        assert!(repo.stored_document().expect("stored").is_complete());
    }

    #[test]
    fn test_snapshot_window_writes_all_geometry_fields() {
        let (mut store, repo) = store_with(None);

        store
            .snapshot_window(WindowGeometry {
                x: 10,
                y: 20,
                width: 1280,
                height: 720,
                state: WindowState::Maximised,
            })
            .expect("save");

        let stored = repo.stored_document().expect("stored");
        assert_eq!(stored.window_start_position_x, Some(10));
        assert_eq!(stored.window_start_position_y, Some(20));
        assert_eq!(stored.window_start_size_x, Some(1280));
        assert_eq!(stored.window_start_size_y, Some(720));
        assert_eq!(stored.window_start_state, Some(2));
        assert_eq!(store.window_state(), WindowState::Maximised);
    }
}
