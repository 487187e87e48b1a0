//! Admin Token Access
//!
//! The dashboard needs the admin bearer token stored under `admin_token`.
//! Pages receive a [`TokenSource`] instead of reading storage themselves, so
//! the browser front end can hand in `localStorage`, the terminal front end a
//! token file, and tests a fixed value.

#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage key holding the admin token
pub const TOKEN_KEY: &str = "admin_token";

/// Read-only access to the stored admin token
pub trait TokenSource {
    /// The current token, or `None` if the admin is not logged in
    fn admin_token(&self) -> Option<String>;
}

/// A token fixed at construction time
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// A source with no token
    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenSource for StaticToken {
    fn admin_token(&self) -> Option<String> {
        self.0.clone()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn admin_token(&self) -> Option<String> {
        (**self).admin_token()
    }
}

/// Token storage errors
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Failed to write token file {path:?}: {error}")]
    Write { path: String, error: String },

    #[error("Failed to remove token file {path:?}: {error}")]
    Remove { path: String, error: String },
}

/// Token persisted in a file, the terminal counterpart of browser storage
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

#[cfg(feature = "native")]
impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data dir>/resort-admin/admin_token`
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|p| p.join("resort-admin").join(TOKEN_KEY))
            .unwrap_or_else(|| PathBuf::from(".resort-admin").join(TOKEN_KEY))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a token, creating the parent directory if needed
    pub fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        let write_err = |e: std::io::Error| TokenStoreError::Write {
            path: self.path.display().to_string(),
            error: e.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(&self.path, token.trim()).map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(write_err)?;
        }

        tracing::info!("Saved admin token to {:?}", self.path);
        Ok(())
    }

    /// Remove the stored token. Removing a missing token is not an error.
    pub fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Removed admin token {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenStoreError::Remove {
                path: self.path.display().to_string(),
                error: e.to_string(),
            }),
        }
    }
}

#[cfg(feature = "native")]
impl TokenSource for FileTokenStore {
    fn admin_token(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read token file {:?}: {}", self.path, e);
                None
            }
        }
    }
}
