use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ArchiveRequest {
    pub archived: bool,
}
