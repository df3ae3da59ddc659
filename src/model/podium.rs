use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;
use validator::Validate;

/// A top-three finish in one category of an edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Podium {
    pub id: u32,
    pub edition_id: u32,
    pub category: PodiumCategory,
    pub position: u8,
    pub runner_name: String,
    /// Finish time as published, e.g. `"19:54:23"`.
    #[serde(default)]
    pub finish_time: Option<String>,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PodiumCategory {
    Scratch,
    Men,
    Women,
    Veteran,
    Other,
}

/// Group podium entries by category, each group ordered by position.
pub fn podium_table(podiums: &[Podium]) -> Vec<(PodiumCategory, Vec<&Podium>)> {
    podiums
        .iter()
        .sorted_by_key(|p| (p.category, p.position))
        .chunk_by(|p| p.category)
        .into_iter()
        .map(|(category, group)| (category, group.collect()))
        .collect()
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PodiumRequest {
    pub category: PodiumCategory,

    #[validate(range(min = 1, max = 3, message = "Position must be 1, 2 or 3"))]
    pub position: u8,

    #[validate(length(min = 1, max = 200, message = "Runner name is required"))]
    pub runner_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<String>,

    #[validate(length(max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}
