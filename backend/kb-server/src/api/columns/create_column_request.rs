use crate::ApiResult;

use kb_config::ValidationConfig;
use kb_core::validation::{color, required_text, wip_limit};
use kb_db::NewColumn;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateColumnRequest {
    pub name: String,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub wip_limit: Option<i32>,

    /// Zero-based insertion index; appended when omitted
    #[serde(default)]
    pub position: Option<i32>,
}

impl CreateColumnRequest {
    pub fn into_input(self, limits: &ValidationConfig) -> ApiResult<NewColumn> {
        Ok(NewColumn {
            name: required_text(&self.name, "name", limits.max_name_length)?,
            color: self
                .color
                .as_deref()
                .map(|value| color(value, "color"))
                .transpose()?,
            wip_limit: wip_limit(self.wip_limit)?,
            position: self.position,
        })
    }
}
