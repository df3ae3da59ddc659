use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Deserialize;

/// Field name to messages, as reported by client-side validation or by the backend.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// All errors that can occur while talking to the directory API.
#[derive(thiserror::Error, Debug)]
pub enum TrailError {
    /// HTTP request failed before any response arrived (network, DNS, TLS, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Invalid input, caught locally or reported by the backend with 400, 409 or 422.
    #[error("validation failed: {message}")]
    Validation { message: String, fields: FieldErrors },

    /// The session token is missing, expired or revoked. The session has been cleared.
    #[error("unauthorized request to {url}")]
    Unauthorized { url: String },

    /// The session is valid but not allowed to perform the request.
    #[error("forbidden request to {url}")]
    Forbidden { url: String },

    /// The requested resource does not exist.
    #[error("resource not found at {url}")]
    NotFound { url: String },

    /// The backend failed with a 5xx status.
    #[error("server error {status} for {url}")]
    Server {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Any other non-success status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body.
    #[error("failed to decode response body from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// A record references a parent that could not be found.
    #[error("{entity} {id} references a missing {parent}")]
    MissingParent {
        entity: &'static str,
        id: u32,
        parent: &'static str,
    },

    /// A slug does not satisfy the format rules.
    #[error("invalid slug {slug:?}")]
    InvalidSlug { slug: String },

    /// The client configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The persisted session could not be read or written.
    #[error("session store error: {0}")]
    SessionStore(#[from] std::io::Error),

    /// The persisted session file is not valid JSON.
    #[error("corrupt session file: {0}")]
    SessionFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrailError>;

/// Error envelope returned by the backend on 4xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: FieldErrors,
}

impl TrailError {
    /// Build a validation error from a backend error envelope.
    pub(crate) fn from_api_body(body: ApiErrorBody) -> Self {
        let message = body.message.unwrap_or_else(|| {
            if body.errors.is_empty() {
                "the request was rejected".to_string()
            } else {
                body.errors.values().flatten().join(", ")
            }
        });
        TrailError::Validation {
            message,
            fields: body.errors,
        }
    }

    /// Whether this error invalidates the current session.
    pub fn is_session_invalidating(&self) -> bool {
        matches!(self, TrailError::Unauthorized { .. })
    }

    /// Field-level messages, when the error carries any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            TrailError::Validation { fields, .. } if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }

    /// A message suitable for showing to the person using the application.
    pub fn user_message(&self) -> String {
        match self {
            TrailError::Http { .. } => {
                "Unable to reach the server. Check your connection and retry.".to_string()
            }
            TrailError::Validation { message, .. } => message.clone(),
            TrailError::Unauthorized { .. } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            TrailError::Forbidden { .. } => {
                "You are not allowed to perform this action.".to_string()
            }
            TrailError::NotFound { .. } => "The requested item could not be found.".to_string(),
            TrailError::Server { .. } | TrailError::UnexpectedStatus { .. } => {
                "The server encountered an error. Please retry later.".to_string()
            }
            TrailError::Decode { .. } => "The server sent an unreadable response.".to_string(),
            TrailError::MissingParent { .. } => {
                "This item is incomplete and cannot be displayed.".to_string()
            }
            TrailError::InvalidSlug { .. } => {
                "Use at least 3 lowercase letters, digits or hyphens.".to_string()
            }
            TrailError::Config(_)
            | TrailError::SessionStore(_)
            | TrailError::SessionFormat(_) => "The application is misconfigured.".to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for TrailError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: FieldErrors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        let message = fields
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .join("; ");
        TrailError::Validation { message, fields }
    }
}
