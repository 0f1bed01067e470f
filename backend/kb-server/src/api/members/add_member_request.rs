use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: String,

    /// "owner", "editor" or "viewer"
    pub role: String,
}
