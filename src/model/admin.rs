use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry of the admin audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLogEntry {
    pub id: u32,
    pub action: String,
    #[serde(default)]
    pub actor_id: Option<u32>,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub target_id: Option<u32>,
    #[serde(default)]
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of a reject call on a submitted event or competition.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body of an approve action: an empty JSON object.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ApproveRequest {}
