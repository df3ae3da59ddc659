use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A runner's review of an edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: u32,
    pub edition_id: u32,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub author_name: Option<String>,
    pub score: u8,
    #[serde(default)]
    pub organization_score: Option<u8>,
    #[serde(default)]
    pub scenery_score: Option<u8>,
    #[serde(default)]
    pub difficulty_score: Option<u8>,
    #[serde(default)]
    pub value_score: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Mean overall score, or `None` when there are no ratings.
pub fn average_score(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let total: u32 = ratings.iter().map(|r| u32::from(r.score)).sum();
    Some(f64::from(total) / ratings.len() as f64)
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: u8,

    #[validate(range(min = 1, max = 5))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_score: Option<u8>,

    #[validate(range(min = 1, max = 5))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenery_score: Option<u8>,

    #[validate(range(min = 1, max = 5))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_score: Option<u8>,

    #[validate(range(min = 1, max = 5))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_score: Option<u8>,

    #[validate(length(max = 2000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(score: u8) -> Rating {
        Rating {
            id: u32::from(score),
            edition_id: 1,
            user_id: None,
            author_name: None,
            score,
            organization_score: None,
            scenery_score: None,
            difficulty_score: None,
            value_score: None,
            comment: None,
            created_at: None,
        }
    }

    #[test]
    fn test_average_score() {
        assert_eq!(average_score(&[]), None);
        assert_eq!(average_score(&[rating(4), rating(5)]), Some(4.5));
    }

    #[test]
    fn test_score_out_of_range() {
        let req = RatingRequest {
            score: 6,
            ..Default::default()
        };
        assert!(req.validate().is_err());

        let req = RatingRequest {
            score: 3,
            scenery_score: Some(0),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
