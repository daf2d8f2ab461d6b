use shared_types::{SkillId, UserSkillId};
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct CreateSkillRequestDTO {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SkillResponseDTO {
    pub id: SkillId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: bool,
}

#[derive(Clone, Debug)]
pub struct UserSkillResponseDTO {
    pub id: UserSkillId,
    pub skill: Option<SkillResponseDTO>,
    pub is_verified: bool,
    pub verified_at: Option<OffsetDateTime>,
    pub created_date: OffsetDateTime,
}
