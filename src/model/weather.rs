use serde::{Deserialize, Serialize};
use validator::Validate;

/// Race-day weather recorded for an edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub edition_id: u32,
    /// Degrees Celsius.
    #[serde(default)]
    pub temperature_min: Option<f64>,
    #[serde(default)]
    pub temperature_max: Option<f64>,
    #[serde(default)]
    pub conditions: Option<String>,
    /// Millimetres over the race window.
    #[serde(default)]
    pub precipitation: Option<f64>,
    /// km/h.
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRequest {
    #[validate(range(min = -60.0, max = 60.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_min: Option<f64>,

    #[validate(range(min = -60.0, max = 60.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_max: Option<f64>,

    #[validate(length(max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,

    #[validate(range(min = 0.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<f64>,

    #[validate(range(min = 0.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
}
