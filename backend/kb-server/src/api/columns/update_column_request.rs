use crate::api::nullable::nullable;
use crate::{ApiError, ApiResult};

use kb_config::ValidationConfig;
use kb_core::validation::{color, required_text, wip_limit};
use kb_db::ColumnChanges;

use serde::Deserialize;

/// Omitted fields are left unchanged; `"wip_limit": null` removes the limit.
#[derive(Debug, Deserialize)]
pub struct UpdateColumnRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub wip_limit: Option<Option<i32>>,

    /// Move the column to this index
    #[serde(default)]
    pub position: Option<i32>,
}

impl UpdateColumnRequest {
    pub fn into_changes(self, limits: &ValidationConfig) -> ApiResult<ColumnChanges> {
        let changes = ColumnChanges {
            name: self
                .name
                .as_deref()
                .map(|name| required_text(name, "name", limits.max_name_length))
                .transpose()?,
            color: self
                .color
                .as_deref()
                .map(|value| color(value, "color"))
                .transpose()?,
            wip_limit: self.wip_limit.map(wip_limit).transpose()?,
            position: self.position,
        };

        if changes.changed_fields().is_empty() && changes.position.is_none() {
            return Err(ApiError::invalid_request("no fields to update"));
        }
        Ok(changes)
    }
}
