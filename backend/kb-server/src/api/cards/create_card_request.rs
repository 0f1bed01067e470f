use crate::ApiResult;
use crate::api::cards::due_date::due_date;
use crate::api::ids::parse_id;

use kb_config::ValidationConfig;
use kb_core::Priority;
use kb_core::validation::{labels, optional_text, required_text};
use kb_db::NewCard;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// "low", "medium" (default), "high" or "urgent"
    #[serde(default)]
    pub priority: Option<String>,

    /// Unix seconds
    #[serde(default)]
    pub due_date: Option<i64>,

    #[serde(default)]
    pub assignee_id: Option<String>,

    #[serde(default)]
    pub labels: Vec<String>,

    /// Zero-based insertion index; appended when omitted
    #[serde(default)]
    pub position: Option<i32>,
}

impl CreateCardRequest {
    pub fn into_input(self, limits: &ValidationConfig) -> ApiResult<NewCard> {
        Ok(NewCard {
            title: required_text(&self.title, "title", limits.max_title_length)?,
            description: optional_text(
                self.description.as_deref(),
                "description",
                limits.max_description_length,
            )?,
            priority: match self.priority.as_deref() {
                Some(priority) => priority.parse::<Priority>()?,
                None => Priority::default(),
            },
            due_date: self.due_date.map(due_date).transpose()?,
            assignee_id: self
                .assignee_id
                .as_deref()
                .map(|id| parse_id(id, "assignee_id"))
                .transpose()?,
            labels: labels(&self.labels, limits.max_labels, limits.max_label_length)?,
            position: self.position,
        })
    }
}
