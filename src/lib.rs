//! Client library for the trail-running events directory.
//!
//! The directory is organised as Event → Competition → Edition. Editions may
//! leave some fields empty to inherit them from their parents; see
//! [`resolve`]. Event slugs can be checked for availability while a form is
//! being filled with [`SlugChecker`].

pub use client::TrailClient;
pub use config::ClientConfig;
pub use error::{FieldErrors, Result, TrailError};
pub use model::*;
pub use resolve::{resolve_edition, resolve_in, Resolved, ResolvedEdition};
pub use session::{
    FileTokenStore, Language, MemoryTokenStore, PersistedSession, Session, TokenStore, UserRole,
};
pub use slug::{is_valid_slug, slugify, SlugAvailability, SlugCheckState, SlugChecker};

mod api;
mod client;
pub mod config;
mod error;
mod model;
pub mod resolve;
pub mod session;
pub mod slug;
