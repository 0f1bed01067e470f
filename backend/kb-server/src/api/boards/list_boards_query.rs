use serde::Deserialize;

/// Query parameters for listing boards
#[derive(Debug, Default, Deserialize)]
pub struct ListBoardsQuery {
    /// "personal", "team" or "all" (default)
    pub kind: Option<String>,
    /// When true, list archived boards instead of active ones
    #[serde(default)]
    pub archived: bool,
}
