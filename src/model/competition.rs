use serde::{Deserialize, Serialize};
use strum_macros::EnumString;
use validator::Validate;

use super::common::{check_override, validate_slug};
use crate::error::Result;

/// A distance or category raced under an event, such as "UTMB 171K".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: u32,
    pub event_id: u32,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type", default)]
    pub competition_type: CompetitionType,
    #[serde(default)]
    pub description: Option<String>,
    /// Distance in kilometres, inherited by editions that leave theirs empty.
    #[serde(default)]
    pub base_distance: Option<f64>,
    /// Positive elevation gain in metres.
    #[serde(default)]
    pub base_elevation: Option<u32>,
    #[serde(default)]
    pub base_max_participants: Option<u32>,
    #[serde(default)]
    pub status: Option<ApprovalStatus>,
}

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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetitionType {
    #[default]
    Trail,
    Ultra,
    Vertical,
    Skyrunning,
    Canicross,
    Other,
}

/// Review state of a user-submitted competition.
///
/// Admin screens have been seen sending both `REJECTED` and `CANCELLED` for a
/// refused submission, so both decode. Anything else lands in `Unknown`
/// instead of failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Draft,
    Published,
    Rejected,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ApprovalStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ApprovalStatus::Draft)
    }

    /// Whether an admin turned the submission down, under either wire name.
    pub fn is_refused(&self) -> bool {
        matches!(self, ApprovalStatus::Rejected | ApprovalStatus::Cancelled)
    }
}

/// Payload for creating a competition under an event.
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitionRequest {
    #[validate(length(
        min = 2,
        max = 200,
        message = "Name must be between 2 and 200 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[serde(rename = "type")]
    pub competition_type: CompetitionType,

    #[validate(length(max = 5000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(range(
        min = 0.1,
        max = 1000.0,
        message = "Distance must be between 0.1 and 1000 km"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_distance: Option<f64>,

    #[validate(range(max = 30000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_elevation: Option<u32>,

    #[validate(range(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_max_participants: Option<u32>,
}

/// Payload for updating a competition. The slug is fixed at creation.
///
/// Base values use a double option: `Some(None)` clears the value so editions
/// have nothing to inherit, `None` leaves it untouched.
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 2, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub competition_type: Option<CompetitionType>,

    #[validate(length(max = 5000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_distance: Option<Option<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_elevation: Option<Option<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_max_participants: Option<Option<u32>>,
}

impl UpdateCompetitionRequest {
    /// Bounds on the inner value of each base override.
    pub fn validate_bases(&self) -> Result<()> {
        check_override(
            "baseDistance",
            self.base_distance,
            0.1..=1000.0,
            "Distance must be between 0.1 and 1000 km",
        )?;
        check_override(
            "baseElevation",
            self.base_elevation,
            0..=30000,
            "Elevation must be at most 30000 m",
        )?;
        check_override(
            "baseMaxParticipants",
            self.base_max_participants,
            1..=u32::MAX,
            "Max participants must be at least 1",
        )
    }
}
