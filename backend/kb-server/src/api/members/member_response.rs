use crate::MemberDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member: MemberDto,
}
