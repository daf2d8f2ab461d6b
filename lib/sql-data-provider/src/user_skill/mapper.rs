use sea_orm::{Set, Unchanged};
use skillbase_core::model::user_skill::{UpdateUserSkillRequest, UserSkill};

use crate::entity::user_skill;

impl From<user_skill::Model> for UserSkill {
    fn from(value: user_skill::Model) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            skill_id: value.skill_id,
            is_verified: value.is_verified,
            verified_at: value.verified_at,
            created_date: value.created_date,
            user: None,
            skill: None,
        }
    }
}

impl From<UserSkill> for user_skill::ActiveModel {
    fn from(value: UserSkill) -> Self {
        Self {
            id: Set(value.id),
            user_id: Set(value.user_id),
            skill_id: Set(value.skill_id),
            is_verified: Set(value.is_verified),
            verified_at: Set(value.verified_at),
            created_date: Set(value.created_date),
        }
    }
}

impl From<UpdateUserSkillRequest> for user_skill::ActiveModel {
    fn from(value: UpdateUserSkillRequest) -> Self {
        Self {
            is_verified: match value.is_verified {
                Some(is_verified) => Set(is_verified),
                None => Unchanged(Default::default()),
            },
            verified_at: match value.verified_at {
                Some(verified_at) => Set(Some(verified_at)),
                None => Unchanged(Default::default()),
            },
            ..Default::default()
        }
    }
}
