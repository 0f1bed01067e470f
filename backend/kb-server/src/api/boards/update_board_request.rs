use crate::api::nullable::nullable;
use crate::{ApiError, ApiResult};

use kb_config::ValidationConfig;
use kb_core::validation::{color, optional_text, required_text};
use kb_db::BoardChanges;

use serde::Deserialize;

/// Omitted fields are left unchanged; `"description": null` clears it.
#[derive(Debug, Deserialize)]
pub struct UpdateBoardRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,

    #[serde(default)]
    pub background_color: Option<String>,
}

impl UpdateBoardRequest {
    pub fn into_changes(self, limits: &ValidationConfig) -> ApiResult<BoardChanges> {
        let changes = BoardChanges {
            name: self
                .name
                .as_deref()
                .map(|name| required_text(name, "name", limits.max_name_length))
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
            background_color: self
                .background_color
                .as_deref()
                .map(|value| color(value, "background_color"))
                .transpose()?,
        };

        if changes.changed_fields().is_empty() {
            return Err(ApiError::invalid_request("no fields to update"));
        }
        Ok(changes)
    }
}
