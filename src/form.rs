//! Article submission form decoding and validation.
//!
//! The HTML form posts raw strings; this module decodes the sentinel
//! values (`"none"` column, empty avatar) once and validates against the
//! article schema. Failures surface as one coarse error with no per-field
//! detail.

use serde::Deserialize;
use thiserror::Error;

/// Maximum accepted title length in characters.
pub const TITLE_MAX: usize = 100;

/// Raw create/update form fields, straight from the request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Column id as submitted; `"none"` or empty means no column.
    #[serde(default)]
    pub column: String,
    /// Comma-delimited tag labels.
    #[serde(default)]
    pub tags: String,
    /// Avatar image path or URL; empty means keep/omit.
    #[serde(default)]
    pub avatar: String,
}

/// A form that passed schema validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidArticle {
    pub title: String,
    pub body: String,
    pub column_id: Option<i64>,
    pub tags: Vec<String>,
    pub avatar: Option<String>,
}

/// Coarse validation failure. The message is generic on purpose; the
/// original form never surfaces field-level detail.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("the form is invalid, please fill it in again")]
pub struct ValidationError;

impl ArticleForm {
    /// Validates the submission against the article schema.
    ///
    /// Title and body are required; the title is capped at [`TITLE_MAX`]
    /// characters. The column sentinel decodes to `None`; any other
    /// non-numeric column value fails validation. Tags are split on
    /// commas, trimmed and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on any schema violation.
    pub fn validate(self) -> Result<ValidArticle, ValidationError> {
        let title = self.title.trim().to_string();
        let body = self.body.trim().to_string();

        if title.is_empty() || title.chars().count() > TITLE_MAX {
            return Err(ValidationError);
        }
        if body.is_empty() {
            return Err(ValidationError);
        }

        let column_id = match self.column.trim() {
            "" | "none" => None,
            raw => Some(raw.parse::<i64>().map_err(|_| ValidationError)?),
        };

        let avatar = match self.avatar.trim() {
            "" => None,
            path => Some(path.to_string()),
        };

        Ok(ValidArticle {
            title,
            body,
            column_id,
            tags: split_tags(&self.tags),
            avatar,
        })
    }
}

/// Splits a delimiter-joined tag string into clean labels.
///
/// Trims whitespace, drops empties and keeps the first occurrence of
/// duplicates, preserving submission order.
pub fn split_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',') {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
