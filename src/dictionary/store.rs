// Dictionary store - loads, persists and serves word pairs (source term -> target term)
// Backed by a single pretty-printed JSON object on disk, rewritten after every insert

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::confirm::DuplicateConfirmer;
use crate::events::{
    DictionaryEventEmitter, EntryAddedPayload, NoopEventEmitter, StatusKind, StatusPayload,
};

/// Default dictionary file, relative to the working directory
pub const DEFAULT_DICTIONARY_FILE: &str = "dic.json";

/// Byte-order mark some editors put in front of UTF-8 files
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Error types for dictionary operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// Dictionary file exists but could not be read
    #[error("Failed to load dictionary: {0}")]
    LoadError(String),
    /// Dictionary file is not a flat object of string pairs
    #[error("Failed to parse dictionary: {0}")]
    ParseError(String),
    /// Dictionary file could not be written
    #[error("Failed to save dictionary: {0}")]
    WriteError(String),
    /// Source or target term was blank
    #[error("Both the source and the target term are required")]
    EmptyInput,
    /// Caller declined to add a duplicate target term
    #[error("Adding a duplicate of \"{0}\" was cancelled")]
    Cancelled(String),
}

/// Result of a non-blank lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The term is a source term in the dictionary
    Found { term: String, translation: String },
    /// The term is unknown; handed back so it can pre-fill the next insert
    NotFound { term: String },
}

/// Result of a completed insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub source: String,
    pub target: String,
    /// Previous target when the source already existed
    pub replaced: Option<String>,
    /// False when the in-memory insert stands but writing the file failed
    pub persisted: bool,
}

/// Store for word pairs with file-based persistence
pub struct DictionaryStore {
    /// Target terms indexed by source term
    entries: BTreeMap<String, String>,
    /// Number of entries using each target term
    target_counts: HashMap<String, usize>,
    /// Path to persistence file
    path: PathBuf,
    /// Ask before reusing an existing target term
    duplicate_check: bool,
    emitter: Arc<dyn DictionaryEventEmitter>,
}

impl std::fmt::Debug for DictionaryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryStore")
            .field("entries", &self.entries.len())
            .field("path", &self.path)
            .field("duplicate_check", &self.duplicate_check)
            .finish()
    }
}

impl DictionaryStore {
    /// Create an empty store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            entries: BTreeMap::new(),
            target_counts: HashMap::new(),
            path,
            duplicate_check: true,
            emitter: Arc::new(NoopEventEmitter),
        }
    }

    /// Create a store backed by `dic.json` in the working directory
    pub fn with_default_path() -> Self {
        Self::new(PathBuf::from(DEFAULT_DICTIONARY_FILE))
    }

    /// Route status and entry events to `emitter`
    pub fn with_emitter(mut self, emitter: Arc<dyn DictionaryEventEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    /// Enable or disable the duplicate-target confirmation step
    pub fn with_duplicate_check(mut self, enabled: bool) -> Self {
        self.duplicate_check = enabled;
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All pairs, sorted by source term
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether `term` is a source term
    pub fn has_source(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Whether `term` is the target of at least one entry
    pub fn has_target(&self, term: &str) -> bool {
        self.target_counts.contains_key(term)
    }

    fn status(&self, kind: StatusKind) {
        self.emitter.emit_status(StatusPayload::new(kind));
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.target_counts.clear();
    }

    fn retain_target(&mut self, target: &str) {
        *self.target_counts.entry(target.to_string()).or_insert(0) += 1;
    }

    fn release_target(&mut self, target: &str) {
        if let Some(count) = self.target_counts.get_mut(target) {
            *count -= 1;
            if *count == 0 {
                self.target_counts.remove(target);
            }
        }
    }

    /// Load pairs from the persistence file
    ///
    /// A missing file is the first-run case and leaves the store empty.
    /// On any failure the store is left empty and a LoadFailed status is emitted.
    pub fn load(&mut self) -> Result<(), DictionaryError> {
        crate::debug!("Loading dictionary from {:?}", self.path);
        self.status(StatusKind::Reading);
        self.clear();

        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                crate::debug!("No dictionary file found, starting with empty store");
                return Ok(());
            }
            Err(e) => {
                crate::error!("Failed to read dictionary {:?}: {}", self.path, e);
                self.status(StatusKind::LoadFailed);
                return Err(DictionaryError::LoadError(e.to_string()));
            }
        };

        // Bad encoding is a parse failure, not a read failure
        let body = content.strip_prefix(UTF8_BOM).unwrap_or(&content);
        let pairs: BTreeMap<String, String> = match serde_json::from_slice(body) {
            Ok(pairs) => pairs,
            Err(e) => {
                crate::error!("Dictionary {:?} is not a string map: {}", self.path, e);
                self.status(StatusKind::LoadFailed);
                return Err(DictionaryError::ParseError(e.to_string()));
            }
        };

        for (source, target) in pairs {
            if source.trim().is_empty() || target.trim().is_empty() {
                crate::warn!("Skipping blank dictionary pair {:?} -> {:?}", source, target);
                continue;
            }
            self.retain_target(&target);
            self.entries.insert(source, target);
        }

        crate::info!("Loaded {} dictionary entries", self.entries.len());
        self.status(StatusKind::Loaded);
        Ok(())
    }

    /// Persist all pairs to the file using atomic write (temp file + rename)
    pub fn save(&self) -> Result<(), DictionaryError> {
        self.write_file().map_err(|e| {
            crate::error!("Failed to save dictionary to {:?}: {}", self.path, e);
            self.status(StatusKind::SaveFailed);
            e
        })
    }

    fn write_file(&self) -> Result<(), DictionaryError> {
        crate::debug!(
            "Persisting {} dictionary entries to {:?}",
            self.entries.len(),
            self.path
        );

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DictionaryError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| DictionaryError::WriteError(e.to_string()))?;

        let temp_path = temp_path_for(&self.path);

        {
            let mut file = File::create(&temp_path).map_err(|e| {
                DictionaryError::WriteError(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(content.as_bytes())
                .map_err(|e| DictionaryError::WriteError(format!("Failed to write: {}", e)))?;
            file.sync_all()
                .map_err(|e| DictionaryError::WriteError(format!("Failed to sync: {}", e)))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            DictionaryError::WriteError(format!("Failed to rename: {}", e))
        })?;

        crate::debug!("Dictionary entries persisted successfully");
        Ok(())
    }

    /// Look up the translation of `term`
    ///
    /// Returns `None` without emitting anything when `term` is blank.
    pub fn lookup(&self, term: &str) -> Option<LookupResult> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        match self.entries.get(term) {
            Some(translation) => {
                self.status(StatusKind::Found);
                Some(LookupResult::Found {
                    term: term.to_string(),
                    translation: translation.clone(),
                })
            }
            None => {
                crate::debug!("No translation for {:?}", term);
                self.status(StatusKind::NotFound);
                Some(LookupResult::NotFound {
                    term: term.to_string(),
                })
            }
        }
    }

    /// Add or overwrite the pair `source -> target` and persist the dictionary
    ///
    /// When the duplicate check is on and `target` is already used by some entry,
    /// `confirmer` decides whether to go ahead. Overwriting an existing source is
    /// a plain upsert and never asks.
    ///
    /// A failed save does not fail the insert: the pair stays in memory,
    /// a SaveFailed status is emitted and the outcome reports `persisted: false`.
    #[must_use = "this returns a Result that should be handled"]
    pub fn insert(
        &mut self,
        source: &str,
        target: &str,
        confirmer: &mut dyn DuplicateConfirmer,
    ) -> Result<InsertOutcome, DictionaryError> {
        let source = source.trim();
        let target = target.trim();

        if source.is_empty() || target.is_empty() {
            self.status(StatusKind::EmptyInput);
            return Err(DictionaryError::EmptyInput);
        }

        if self.duplicate_check && self.has_target(target) {
            crate::debug!("Target {:?} already in dictionary, asking for confirmation", target);
            if !confirmer.confirm_duplicate(source, target) {
                self.status(StatusKind::Cancelled);
                return Err(DictionaryError::Cancelled(target.to_string()));
            }
        }

        let replaced = self
            .entries
            .insert(source.to_string(), target.to_string());
        if let Some(old) = &replaced {
            self.release_target(old);
        }
        self.retain_target(target);

        let persisted = self.save().is_ok();

        self.status(StatusKind::Added);
        self.emitter.emit_entry_added(EntryAddedPayload {
            source: source.to_string(),
            target: target.to_string(),
            replaced: replaced.clone(),
        });

        crate::info!("Added dictionary entry: {} -> {}", source, target);
        Ok(InsertOutcome {
            source: source.to_string(),
            target: target.to_string(),
            replaced,
            persisted,
        })
    }
}

/// `dic.json` -> `dic.json.tmp`, so no sibling file with another extension is clobbered
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
