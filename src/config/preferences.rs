//! File-backed generation preferences.
//!
//! Session state (history, favorites) is deliberately not persisted;
//! the only thing written to disk is the user's preferred
//! [`GenerationOptions`], so a new session starts from familiar
//! settings instead of the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CodesmithError, Result};
use crate::types::GenerationOptions;

/// Preferences store using a TOML file under the user's home directory.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    base_dir: PathBuf,
}

impl PreferencesStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Store rooted at `~/.codesmith`.
    pub fn new_default() -> Self {
        Self {
            base_dir: default_codesmith_dir(),
        }
    }

    fn preferences_path(&self) -> PathBuf {
        self.base_dir.join("preferences.toml")
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Load saved preferences. A missing file is not an error and
    /// returns `None`; a file that exists but does not parse is
    /// reported so the user knows their settings were not applied.
    pub fn load(&self) -> Result<Option<GenerationOptions>> {
        let path = self.preferences_path();
        let raw = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let file: PreferencesFile = toml::from_str(&raw).map_err(|err| {
            CodesmithError::Configuration(format!(
                "Malformed preferences file {}: {err}",
                path.display()
            ))
        })?;
        Ok(Some(file.options))
    }

    pub fn save(&self, options: &GenerationOptions) -> Result<()> {
        let path = self.preferences_path();
        Self::ensure_parent(&path)?;
        let file = PreferencesFile {
            version: 1,
            saved_at: DateTime::<Utc>::from(std::time::SystemTime::now()),
            options: options.clone(),
        };
        let serialized = toml::to_string(&file)
            .map_err(|err| CodesmithError::Configuration(err.to_string()))?;
        fs::write(&path, serialized)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(self.preferences_path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// Scalar fields first so the TOML renders them ahead of the
// [options] table.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferencesFile {
    version: u32,
    saved_at: DateTime<Utc>,
    options: GenerationOptions,
}

fn default_codesmith_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".codesmith"))
        .unwrap_or_else(|| PathBuf::from(".codesmith"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CodeStyle, Language};
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, PreferencesStore) {
        let dir = TempDir::new().unwrap();
        let store = PreferencesStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn preferences_round_trip_works() {
        let (_dir, store) = temp_store();
        let options = GenerationOptions::builder()
            .language(Language::TypeScript)
            .tests(true)
            .code_style(CodeStyle::Airbnb)
            .build();
        store.save(&options).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, options);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn malformed_file_is_a_configuration_error() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join("preferences.toml"), "not = [valid").unwrap();
        match store.load() {
            Err(CodesmithError::Configuration(msg)) => {
                assert!(msg.contains("preferences.toml"));
            }
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn clear_removes_preferences() {
        let (_dir, store) = temp_store();
        store.save(&GenerationOptions::default()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing again is fine.
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let (dir, store) = temp_store();
        store.save(&GenerationOptions::default()).unwrap();
        let mode = fs::metadata(dir.path().join("preferences.toml"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
