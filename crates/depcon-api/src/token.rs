//! On-disk persistence for the API credential.
//!
//! The browser original kept the token under a fixed key in local storage;
//! here it is a single file under the platform data directory. The constructor
//! takes an explicit path so tests can point it at a temp dir.

use std::path::{Path, PathBuf};

use depcon_core::prelude::*;

const TOKEN_FILENAME: &str = "token";

/// Stores the single opaque credential string at a fixed path.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `~/.local/share/depcon/token` (platform equivalent).
    pub fn default_path() -> PathBuf {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("depcon").join(TOKEN_FILENAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted token. `None` means anonymous.
    pub fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read token file {:?}: {}", self.path, e);
                None
            }
        }
    }

    /// Persist a token, creating the parent directory if needed.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        debug!("Token persisted to {:?}", self.path);
        Ok(())
    }

    /// Remove the persisted token. Missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TokenStore {
        TokenStore::new(dir.path().join("token"))
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("tok-abc123").unwrap();
        assert_eq!(store.load(), Some("tok-abc123".to_string()));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("nested").join("deeper").join("token"));
        store.save("tok").unwrap();
        assert_eq!(store.load(), Some("tok".to_string()));
    }

    #[test]
    fn test_clear_removes_token() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("tok").unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_on_missing_is_ok() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).clear().is_ok());
    }

    #[test]
    fn test_whitespace_only_token_is_anonymous() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("  \n").unwrap();
        assert_eq!(store.load(), None);
    }
}
