use crate::ApiResult;
use crate::api::ids::parse_id;

use kb_config::ValidationConfig;
use kb_core::validation::{color, optional_text, required_text, wip_limit};
use kb_core::{BoardKind, Priority};
use kb_db::{NewBoard, TemplateCard, TemplateColumn};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// "personal" (default) or "team"
    #[serde(default)]
    pub kind: Option<String>,

    /// Required for team boards
    #[serde(default)]
    pub team_id: Option<String>,

    #[serde(default)]
    pub background_color: Option<String>,

    /// Columns created with the board, left to right
    #[serde(default)]
    pub template: Vec<TemplateColumnRequest>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateColumnRequest {
    pub name: String,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub wip_limit: Option<i32>,

    #[serde(default)]
    pub cards: Vec<TemplateCardRequest>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateCardRequest {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,
}

impl CreateBoardRequest {
    pub fn into_input(self, limits: &ValidationConfig) -> ApiResult<NewBoard> {
        let kind = match self.kind.as_deref() {
            Some(kind) => kind.parse::<BoardKind>()?,
            None => BoardKind::default(),
        };
        let team_id = self
            .team_id
            .as_deref()
            .map(|id| parse_id(id, "team_id"))
            .transpose()?;

        let template = self
            .template
            .into_iter()
            .map(|column| column.into_input(limits))
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(NewBoard {
            name: required_text(&self.name, "name", limits.max_name_length)?,
            description: optional_text(
                self.description.as_deref(),
                "description",
                limits.max_description_length,
            )?,
            kind,
            team_id,
            background_color: self
                .background_color
                .as_deref()
                .map(|value| color(value, "background_color"))
                .transpose()?,
            template,
        })
    }
}

impl TemplateColumnRequest {
    fn into_input(self, limits: &ValidationConfig) -> ApiResult<TemplateColumn> {
        let cards = self
            .cards
            .into_iter()
            .map(|card| card.into_input(limits))
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(TemplateColumn {
            name: required_text(&self.name, "template.name", limits.max_name_length)?,
            color: self
                .color
                .as_deref()
                .map(|value| color(value, "template.color"))
                .transpose()?,
            wip_limit: wip_limit(self.wip_limit)?,
            cards,
        })
    }
}

impl TemplateCardRequest {
    fn into_input(self, limits: &ValidationConfig) -> ApiResult<TemplateCard> {
        Ok(TemplateCard {
            title: required_text(&self.title, "template.cards.title", limits.max_title_length)?,
            description: optional_text(
                self.description.as_deref(),
                "template.cards.description",
                limits.max_description_length,
            )?,
            priority: self
                .priority
                .as_deref()
                .map(str::parse::<Priority>)
                .transpose()?,
        })
    }
}
