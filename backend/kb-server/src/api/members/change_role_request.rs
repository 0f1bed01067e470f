use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: String,
}
