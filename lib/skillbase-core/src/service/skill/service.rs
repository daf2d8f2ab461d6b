use shared_types::{SkillId, UserId, UserSkillId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::SkillService;
use super::dto::{CreateSkillRequestDTO, SkillResponseDTO, UserSkillResponseDTO};
use super::mapper::{skill_from_request, skill_response_dto, user_skill_response_dto};
use crate::model::skill::SkillRelations;
use crate::model::user::UserRelations;
use crate::model::user_skill::{UserSkill, UserSkillRelations};
use crate::repository::error::DataLayerError;
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};

impl SkillService {
    pub async fn create_skill(
        &self,
        request: CreateSkillRequestDTO,
    ) -> Result<SkillId, ServiceError> {
        if request.name.trim().is_empty() {
            return Err(ValidationError::EmptyValue("name").into());
        }
        if request.category.trim().is_empty() {
            return Err(ValidationError::EmptyValue("category").into());
        }

        let skill = skill_from_request(request, OffsetDateTime::now_utc());
        let id = self.skill_repository.create_skill(skill).await?;

        Ok(id)
    }

    pub async fn list_skills(&self) -> Result<Vec<SkillResponseDTO>, ServiceError> {
        let skills = self.skill_repository.list_active_skills().await?;

        Ok(skills.into_iter().map(skill_response_dto).collect())
    }

    /// Claims a skill for a user; each (user, skill) pair exists at most once.
    pub async fn claim_skill(
        &self,
        user_id: UserId,
        skill_id: SkillId,
    ) -> Result<UserSkillId, ServiceError> {
        self.user_repository
            .get_user(user_id, &UserRelations::default())
            .await?
            .ok_or(EntityNotFoundError::User(user_id))?;

        self.skill_repository
            .get_skill(skill_id, &SkillRelations::default())
            .await?
            .filter(|skill| skill.is_active)
            .ok_or(EntityNotFoundError::Skill(skill_id))?;

        let user_skill = UserSkill {
            id: Uuid::new_v4().into(),
            user_id,
            skill_id,
            is_verified: false,
            verified_at: None,
            created_date: OffsetDateTime::now_utc(),
            user: None,
            skill: None,
        };

        let result = self.user_skill_repository.create_user_skill(user_skill).await;
        match result {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => Err(BusinessLogicError::SkillAlreadyClaimed {
                user: user_id,
                skill: skill_id,
            }
            .into()),
            Err(error) => Err(error.into()),
        }
    }

    pub async fn get_user_skills(
        &self,
        user_id: UserId,
    ) -> Result<Vec<UserSkillResponseDTO>, ServiceError> {
        let user_skills = self
            .user_skill_repository
            .list_user_skills(
                user_id,
                &UserSkillRelations {
                    skill: Some(SkillRelations::default()),
                    ..Default::default()
                },
            )
            .await?;

        Ok(user_skills
            .into_iter()
            .map(user_skill_response_dto)
            .collect())
    }
}
