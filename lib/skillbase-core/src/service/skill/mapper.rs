use time::OffsetDateTime;

use super::dto::{CreateSkillRequestDTO, SkillResponseDTO, UserSkillResponseDTO};
use crate::model::skill::Skill;
use crate::model::user_skill::UserSkill;

pub(super) fn skill_from_request(request: CreateSkillRequestDTO, now: OffsetDateTime) -> Skill {
    Skill {
        id: uuid::Uuid::new_v4().into(),
        name: request.name,
        category: request.category,
        description: request.description,
        icon: request.icon,
        is_active: true,
        created_date: now,
    }
}

pub(super) fn skill_response_dto(skill: Skill) -> SkillResponseDTO {
    SkillResponseDTO {
        id: skill.id,
        name: skill.name,
        category: skill.category,
        description: skill.description,
        icon: skill.icon,
        is_active: skill.is_active,
    }
}

pub(super) fn user_skill_response_dto(user_skill: UserSkill) -> UserSkillResponseDTO {
    UserSkillResponseDTO {
        id: user_skill.id,
        skill: user_skill.skill.map(skill_response_dto),
        is_verified: user_skill.is_verified,
        verified_at: user_skill.verified_at,
        created_date: user_skill.created_date,
    }
}
