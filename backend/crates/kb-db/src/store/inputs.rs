//! Already-validated inputs for store operations.

use kb_core::{BoardKind, Priority};

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct NewBoard {
    pub name: String,
    pub description: Option<String>,
    pub kind: BoardKind,
    pub team_id: Option<Uuid>,
    pub background_color: Option<String>,
    /// Columns (with their cards) created together with the board
    pub template: Vec<TemplateColumn>,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateColumn {
    pub name: String,
    pub color: Option<String>,
    pub wip_limit: Option<i32>,
    pub cards: Vec<TemplateCard>,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateCard {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
}

/// `None` leaves a field unchanged. For nullable fields `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct BoardChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub background_color: Option<String>,
}

impl BoardChanges {
    pub fn changed_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name".to_string());
        }
        if self.description.is_some() {
            fields.push("description".to_string());
        }
        if self.background_color.is_some() {
            fields.push("background_color".to_string());
        }
        fields
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewColumn {
    pub name: String,
    pub color: Option<String>,
    pub wip_limit: Option<i32>,
    /// Append when `None`
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct ColumnChanges {
    pub name: Option<String>,
    pub color: Option<String>,
    pub wip_limit: Option<Option<i32>>,
    pub position: Option<i32>,
}

impl ColumnChanges {
    /// Metadata fields only; a position change is reported as a move.
    pub fn changed_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name".to_string());
        }
        if self.color.is_some() {
            fields.push("color".to_string());
        }
        if self.wip_limit.is_some() {
            fields.push("wip_limit".to_string());
        }
        fields
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewCard {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub assignee_id: Option<Uuid>,
    pub labels: Vec<String>,
    /// Append when `None`
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CardChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub assignee_id: Option<Option<Uuid>>,
    pub labels: Option<Vec<String>>,
}

impl CardChanges {
    pub fn changed_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title".to_string());
        }
        if self.description.is_some() {
            fields.push("description".to_string());
        }
        if self.priority.is_some() {
            fields.push("priority".to_string());
        }
        if self.due_date.is_some() {
            fields.push("due_date".to_string());
        }
        if self.assignee_id.is_some() {
            fields.push("assignee_id".to_string());
        }
        if self.labels.is_some() {
            fields.push("labels".to_string());
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }
}
