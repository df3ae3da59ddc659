use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrailError};
use crate::slug;

/// A page of results from a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u32,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    /// Number of pages needed to hold `total` items.
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// Pagination parameters sent with list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

/// Slug rule shared by every create payload carrying one.
pub(crate) fn validate_slug(
    value: &str,
) -> std::result::Result<(), validator::ValidationError> {
    if slug::is_valid_slug(value) {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("invalid_slug");
        err.message =
            Some("Slug must be at least 3 lowercase letters, digits or hyphens".into());
        Err(err)
    }
}

/// A validation error carrying one message for one field.
pub(crate) fn single_field_error(field: &str, message: &str) -> TrailError {
    TrailError::Validation {
        message: message.to_string(),
        fields: [(field.to_string(), vec![message.to_string()])].into(),
    }
}

/// Range check for a double-option override. `None` and `Some(None)` always pass.
pub(crate) fn check_override<T: PartialOrd>(
    field: &str,
    value: Option<Option<T>>,
    range: RangeInclusive<T>,
    message: &str,
) -> Result<()> {
    match value {
        Some(Some(value)) if !range.contains(&value) => Err(single_field_error(field, message)),
        _ => Ok(()),
    }
}

/// Length check, in characters, for a double-option text override.
pub(crate) fn check_text_override(
    field: &str,
    value: Option<&Option<String>>,
    range: RangeInclusive<usize>,
    message: &str,
) -> Result<()> {
    check_override(
        field,
        value.map(|inner| inner.as_ref().map(|text| text.chars().count())),
        range,
        message,
    )
}
