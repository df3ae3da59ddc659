use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;
use validator::Validate;

use super::common::validate_slug;
use super::competition::Competition;
use crate::session::UserRole;

/// A recurring race brand, such as "UTMB Mont-Blanc".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub organizer_id: Option<u32>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Latitude and longitude, when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Publication lifecycle of an event.
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
pub enum EventStatus {
    #[default]
    Draft,
    Published,
    Cancelled,
    Archived,
}

impl EventStatus {
    /// Status a newly created event starts in. Admin submissions skip review.
    pub fn initial_for(role: Option<UserRole>) -> Self {
        match role {
            Some(UserRole::Admin) => EventStatus::Published,
            _ => EventStatus::Draft,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, EventStatus::Published)
    }
}

/// Filters for the public event listing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub competition_type: Option<super::CompetitionType>,
}

/// Payload for creating an event.
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(
        min = 3,
        max = 200,
        message = "Name must be between 3 and 200 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(length(max = 5000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 2, max = 100, message = "Country is required"))]
    pub country: String,

    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[validate(url)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<String>,

    /// Filled in by the client from the session role when left empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

/// Payload for updating an event. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(length(min = 3, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(custom(function = "validate_slug"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[validate(length(max = 5000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[validate(length(min = 2, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[validate(url)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_initial_status_depends_on_role() {
        assert_eq!(EventStatus::initial_for(None), EventStatus::Draft);
        assert_eq!(
            EventStatus::initial_for(Some(UserRole::Organizer)),
            EventStatus::Draft
        );
        assert_eq!(
            EventStatus::initial_for(Some(UserRole::Admin)),
            EventStatus::Published
        );
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(EventStatus::Published.to_string(), "PUBLISHED");
        assert_eq!(
            EventStatus::from_str("ARCHIVED").unwrap(),
            EventStatus::Archived
        );
        assert_eq!(
            serde_json::to_string(&EventStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
    }

    #[test]
    fn test_decode_minimal_event() {
        let event: Event = serde_json::from_str(
            r#"{"id":7,"name":"UTMB Mont-Blanc","slug":"utmb-mont-blanc","city":"Chamonix","latitude":45.92,"longitude":6.87}"#,
        )
        .unwrap();

        assert_eq!(event.status, EventStatus::Draft);
        assert_eq!(event.city.as_deref(), Some("Chamonix"));
        assert_eq!(event.coordinates(), Some((45.92, 6.87)));
        assert!(event.competitions.is_empty());
    }

    #[test]
    fn test_create_request_rejects_bad_slug_and_coordinates() {
        let req = CreateEventRequest {
            name: "Grand Raid".into(),
            slug: "Grand Raid!".into(),
            city: "Cilaos".into(),
            country: "FR".into(),
            latitude: Some(120.0),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("slug"));
        assert!(fields.contains_key("latitude"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn test_filters_skip_empty_fields() {
        let filters = EventFilters {
            country: Some("FR".into()),
            status: Some(EventStatus::Published),
            ..Default::default()
        };
        let value = serde_json::to_value(&filters).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"country": "FR", "status": "PUBLISHED"})
        );
    }
}
