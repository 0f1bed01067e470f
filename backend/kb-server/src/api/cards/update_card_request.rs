use crate::api::cards::due_date::due_date;
use crate::api::ids::parse_id;
use crate::api::nullable::nullable;
use crate::{ApiError, ApiResult};

use kb_config::ValidationConfig;
use kb_core::Priority;
use kb_core::validation::{labels, optional_text, required_text};
use kb_db::CardChanges;

use serde::Deserialize;

/// Omitted fields are left unchanged. `null` clears description, due date and assignee.
#[derive(Debug, Deserialize)]
pub struct UpdateCardRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub due_date: Option<Option<i64>>,

    #[serde(default, deserialize_with = "nullable")]
    pub assignee_id: Option<Option<String>>,

    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

impl UpdateCardRequest {
    pub fn into_changes(self, limits: &ValidationConfig) -> ApiResult<CardChanges> {
        let changes = CardChanges {
            title: self
                .title
                .as_deref()
                .map(|title| required_text(title, "title", limits.max_title_length))
                .transpose()?,
            description: self
                .description
                .map(|description| {
                    optional_text(
                        description.as_deref(),
                        "description",
                        limits.max_description_length,
                    )
                })
                .transpose()?,
            priority: self
                .priority
                .as_deref()
                .map(str::parse::<Priority>)
                .transpose()?,
            due_date: self
                .due_date
                .map(|value| value.map(due_date).transpose())
                .transpose()?,
            assignee_id: self
                .assignee_id
                .map(|value| {
                    value
                        .as_deref()
                        .map(|id| parse_id(id, "assignee_id"))
                        .transpose()
                })
                .transpose()?,
            labels: self
                .labels
                .map(|values| labels(&values, limits.max_labels, limits.max_label_length))
                .transpose()?,
        };

        if changes.is_empty() {
            return Err(ApiError::invalid_request("no fields to update"));
        }
        Ok(changes)
    }
}
