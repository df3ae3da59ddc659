//! Debounced slug availability checks.
//!
//! A form calls [`SlugChecker::check`] on every keystroke. Input that cannot be
//! a slug is reported as [`SlugCheckState::NotChecked`] right away without a
//! request. Valid input waits for a quiet period, then asks the backend once.
//! Starting a new check cancels the previous one, so the state always reflects
//! the most recently started check, whatever order responses arrive in.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::Result;

pub const SLUG_MIN_LEN: usize = 3;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// At least [`SLUG_MIN_LEN`] characters, all of `[a-z0-9-]`.
pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() >= SLUG_MIN_LEN
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Derive a slug candidate from a display name, e.g. `"UTMB Mont-Blanc"` → `"utmb-mont-blanc"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Backend lookup answering whether a slug is free.
#[async_trait]
pub trait SlugAvailability: Send + Sync {
    /// `exclude_id` is the record being edited, whose own slug counts as free.
    async fn is_slug_available(&self, slug: &str, exclude_id: Option<u32>) -> Result<bool>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlugCheckState {
    /// Nothing to check yet, or the input is not a valid slug.
    #[default]
    NotChecked,
    Checking,
    Available,
    Taken,
    Failed(String),
}

impl SlugCheckState {
    pub fn is_checking(&self) -> bool {
        matches!(self, SlugCheckState::Checking)
    }

    /// `Some(true)` if free, `Some(false)` if taken, `None` if unknown.
    pub fn available(&self) -> Option<bool> {
        match self {
            SlugCheckState::Available => Some(true),
            SlugCheckState::Taken => Some(false),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SlugCheckState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Debounced, cancelling slug checker bound to one form field.
///
/// `check` spawns onto the current tokio runtime and must be called from
/// within one.
pub struct SlugChecker<B: ?Sized> {
    backend: Arc<B>,
    debounce: Duration,
    exclude_id: Option<u32>,
    generation: Arc<AtomicU64>,
    state: Arc<watch::Sender<SlugCheckState>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<B> SlugChecker<B>
where
    B: SlugAvailability + ?Sized + 'static,
{
    pub fn new(backend: Arc<B>) -> Self {
        let (state, _) = watch::channel(SlugCheckState::NotChecked);
        Self {
            backend,
            debounce: DEFAULT_DEBOUNCE,
            exclude_id: None,
            generation: Arc::new(AtomicU64::new(0)),
            state: Arc::new(state),
            pending: Mutex::new(None),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Treat the slug of record `id` as available (edit forms).
    pub fn excluding(mut self, id: u32) -> Self {
        self.exclude_id = Some(id);
        self
    }

    pub fn state(&self) -> SlugCheckState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SlugCheckState> {
        self.state.subscribe()
    }

    /// Start checking `slug`, superseding any check in progress.
    pub fn check(&self, slug: &str) {
        let valid = is_valid_slug(slug);
        let generation = self.advance(if valid {
            SlugCheckState::Checking
        } else {
            SlugCheckState::NotChecked
        });
        if !valid {
            return;
        }

        let backend = Arc::clone(&self.backend);
        let current = Arc::clone(&self.generation);
        let state = Arc::clone(&self.state);
        let debounce = self.debounce;
        let exclude_id = self.exclude_id;
        let slug = slug.to_owned();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if current.load(Ordering::SeqCst) != generation {
                return;
            }
            debug!(slug = %slug, "checking slug availability");
            let next = match backend.is_slug_available(&slug, exclude_id).await {
                Ok(true) => SlugCheckState::Available,
                Ok(false) => SlugCheckState::Taken,
                Err(e) => SlugCheckState::Failed(e.user_message()),
            };
            // compared under the channel lock, which also orders `advance`
            let published = state.send_if_modified(|s| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *s = next;
                true
            });
            if !published {
                debug!(slug = %slug, "discarding stale slug check");
            }
        });
        *self.pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(handle);
    }

    /// Forget the current input and stop any check in progress.
    pub fn reset(&self) {
        self.advance(SlugCheckState::NotChecked);
    }

    /// Supersede every earlier check and publish `state`, returning the new generation.
    fn advance(&self, state: SlugCheckState) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|s| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *s = state;
        });
        self.cancel_pending();
        generation
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            handle.abort();
        }
    }
}

impl<B: ?Sized> Drop for SlugChecker<B> {
    fn drop(&mut self) {
        if let Some(handle) = self
            .pending
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            handle.abort();
        }
    }
}
