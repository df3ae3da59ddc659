use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;
use validator::Validate;

use super::common::{check_override, check_text_override, single_field_error};
use crate::error::Result;

/// One year's running of a competition.
///
/// `distance`, `elevation`, `max_participants` and `city` are overrides: when
/// empty, the value comes from the parent competition (or the event, for the
/// city). See [`crate::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    pub id: u32,
    pub competition_id: u32,
    pub year: u16,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub elevation: Option<u32>,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub status: EditionStatus,
    #[serde(default)]
    pub registration_status: RegistrationStatus,
    #[serde(default)]
    pub registration_url: Option<String>,
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
pub enum EditionStatus {
    #[default]
    Upcoming,
    Ongoing,
    Finished,
    Cancelled,
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
pub enum RegistrationStatus {
    #[default]
    NotOpen,
    ComingSoon,
    Open,
    Closed,
    Full,
}

impl RegistrationStatus {
    pub fn accepts_entries(&self) -> bool {
        matches!(self, RegistrationStatus::Open)
    }
}

/// An edition as returned by `/editions/:id/with-inheritance`, with the
/// backend's own resolution of the inherited fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionWithInheritance {
    #[serde(flatten)]
    pub edition: Edition,
    #[serde(default)]
    pub resolved_distance: Option<f64>,
    #[serde(default)]
    pub resolved_elevation: Option<u32>,
    #[serde(default)]
    pub resolved_max_participants: Option<u32>,
    #[serde(default)]
    pub resolved_city: Option<String>,
}

/// Payload for creating an edition under a competition.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEditionRequest {
    #[validate(range(min = 1900, max = 2100, message = "Year must be between 1900 and 2100"))]
    pub year: u16,

    pub start_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[validate(range(min = 0.1, max = 1000.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    #[validate(range(max = 30000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<u32>,

    #[validate(range(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,

    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EditionStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_status: Option<RegistrationStatus>,

    #[validate(url)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

impl CreateEditionRequest {
    /// Checks that need more than one field.
    pub fn validate_dates(&self) -> Result<()> {
        check_date_order(Some(self.start_date), self.end_date)
    }
}

/// Payload for updating an edition. The year is fixed at creation.
///
/// Overrides use a double option: `Some(None)` clears the override so the
/// field inherits again, `None` leaves it untouched.
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEditionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Option<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<Option<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<Option<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EditionStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_status: Option<RegistrationStatus>,

    #[validate(url)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

impl UpdateEditionRequest {
    /// Checks the derive cannot express: date order and the inner value of
    /// double-option overrides, held to the same bounds as on creation.
    pub fn validate_overrides(&self) -> Result<()> {
        check_date_order(self.start_date, self.end_date)?;
        check_override(
            "distance",
            self.distance,
            0.1..=1000.0,
            "Distance must be between 0.1 and 1000 km",
        )?;
        check_override(
            "elevation",
            self.elevation,
            0..=30000,
            "Elevation must be at most 30000 m",
        )?;
        check_override(
            "maxParticipants",
            self.max_participants,
            1..=u32::MAX,
            "Max participants must be at least 1",
        )?;
        check_text_override(
            "city",
            self.city.as_ref(),
            1..=100,
            "City must be between 1 and 100 characters",
        )
    }
}

fn check_date_order(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(single_field_error(
                "endDate",
                "End date must be on or after start date",
            ));
        }
    }
    Ok(())
}
