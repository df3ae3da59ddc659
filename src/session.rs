//! Session context shared by every request a client makes.
//!
//! A session is created once (usually from a [`TokenStore`] at startup),
//! injected into the client, and torn down with [`Session::logout`]. A 401
//! from the backend calls `logout` as well.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;
use tracing::debug;

use crate::error::Result;

/// Interface language, sent as `Accept-Language`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    Fr,
    En,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Organizer,
    Admin,
}

/// What a [`TokenStore`] keeps between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub language: Language,
}

/// Persistence for the session between runs.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<PersistedSession>;
    fn save(&self, session: &PersistedSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Keeps the session in memory only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<PersistedSession>,
}

impl MemoryTokenStore {
    pub fn new(initial: PersistedSession) -> Self {
        Self {
            inner: Mutex::new(initial),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<PersistedSession> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn save(&self, session: &PersistedSession) -> Result<()> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let language = inner.language;
        *inner = PersistedSession {
            language,
            ..Default::default()
        };
        Ok(())
    }
}

/// Keeps the session in a JSON file. A missing file is an anonymous session.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<PersistedSession> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PersistedSession::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, session: &PersistedSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(session)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let language = self.load().map(|s| s.language).unwrap_or_default();
        self.save(&PersistedSession {
            language,
            ..Default::default()
        })
    }
}

/// The signed-in state of the application.
///
/// Cloning a `Session` yields a handle to the same state.
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<PersistedSession>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// An anonymous session that is not persisted anywhere.
    pub fn anonymous() -> Self {
        Self::with_store(PersistedSession::default(), MemoryTokenStore::default())
    }

    /// Restore the session kept by `store`.
    pub fn load(store: impl TokenStore + 'static) -> Result<Self> {
        let persisted = store.load()?;
        debug!(
            authenticated = persisted.token.is_some(),
            language = %persisted.language,
            "restored session"
        );
        Ok(Self::with_store(persisted, store))
    }

    fn with_store(state: PersistedSession, store: impl TokenStore + 'static) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            store: Arc::new(store),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, PersistedSession> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, PersistedSession> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.read().role
    }

    pub fn language(&self) -> Language {
        self.read().language
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(UserRole::Admin)
    }

    /// Record a token obtained from the backend and persist it.
    pub fn sign_in(&self, token: impl Into<String>, role: UserRole) -> Result<()> {
        let snapshot = {
            let mut state = self.write();
            state.token = Some(token.into());
            state.role = Some(role);
            state.clone()
        };
        self.store.save(&snapshot)
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        let snapshot = {
            let mut state = self.write();
            state.language = language;
            state.clone()
        };
        self.store.save(&snapshot)
    }

    /// Drop the token and role, in memory and in the store. The language is kept.
    pub fn logout(&self) -> Result<()> {
        {
            let mut state = self.write();
            state.token = None;
            state.role = None;
        }
        self.store.clear()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("Session")
            .field("authenticated", &state.token.is_some())
            .field("role", &state.role)
            .field("language", &state.language)
            .finish()
    }
}
