use shared_types::{SkillId, UserId, UserSkillId};
use time::OffsetDateTime;

use super::skill::{Skill, SkillRelations};
use super::user::{User, UserRelations};

#[derive(Clone, Debug, PartialEq)]
pub struct UserSkill {
    pub id: UserSkillId,
    pub user_id: UserId,
    pub skill_id: SkillId,
    pub is_verified: bool,
    pub verified_at: Option<OffsetDateTime>,
    pub created_date: OffsetDateTime,

    // Relations:
    pub user: Option<User>,
    pub skill: Option<Skill>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct UserSkillRelations {
    pub user: Option<UserRelations>,
    pub skill: Option<SkillRelations>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdateUserSkillRequest {
    pub is_verified: Option<bool>,
    pub verified_at: Option<OffsetDateTime>,
}
