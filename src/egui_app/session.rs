//! Session token storage
//!
//! One secure-store entry keyed by service id and `jwt_token`. The desktop
//! build persists it in a small JSON map under the platform data directory;
//! tests and previews use [`MemorySessionStore`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::shared::error::SessionError;

/// Key of the token entry
pub const TOKEN_KEY: &str = "jwt_token";

/// Token cache used by the login flow and the request builder
pub trait SessionStore: Send + Sync {
    /// Replace any stored token
    fn save_token(&self, token: &str) -> Result<(), SessionError>;

    /// Currently stored token, if any
    fn get_token(&self) -> Option<String>;

    /// Remove the token; removing a missing token is not an error
    fn delete_token(&self) -> Result<(), SessionError>;

    fn has_active_session(&self) -> bool {
        self.get_token().is_some()
    }

    /// End the session
    fn logout(&self) {
        match self.delete_token() {
            Ok(()) => tracing::info!("[SESSION] Session closed"),
            Err(e) => tracing::warn!("[SESSION] Failed to delete token on logout: {}", e),
        }
    }
}

/// File-backed store: `{ "<key>": "<value>" }` in `<data dir>/benevits/<service>.json`
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write of the file
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, contents)?;
        restrict_permissions(&self.path)?;
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), SessionError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), SessionError> {
    Ok(())
}

impl SessionStore for FileSessionStore {
    fn save_token(&self, token: &str) -> Result<(), SessionError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_entries(&entries)?;
        tracing::info!("[SESSION] Token saved to {}", self.path.display());
        Ok(())
    }

    fn get_token(&self) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match self.read_entries() {
            Ok(mut entries) => entries.remove(TOKEN_KEY),
            Err(e) => {
                tracing::warn!("[SESSION] Could not read token: {}", e);
                None
            }
        }
    }

    fn delete_token(&self) -> Result<(), SessionError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut entries = self.read_entries().unwrap_or_default();
        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)?;
        tracing::info!("[SESSION] Token deleted");
        Ok(())
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save_token(&self, token: &str) -> Result<(), SessionError> {
        *self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn get_token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    fn delete_token(&self) -> Result<(), SessionError> {
        *self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}
