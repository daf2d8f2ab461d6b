use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Unchanged};
use shared_types::{SkillId, UserId, UserSkillId};
use skillbase_core::model::user_skill::{
    UpdateUserSkillRequest, UserSkill, UserSkillRelations,
};
use skillbase_core::repository::error::DataLayerError;
use skillbase_core::repository::user_skill_repository::UserSkillRepository;

use super::UserSkillProvider;
use crate::entity::{skill, user, user_skill};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

impl UserSkillProvider {
    async fn resolve_relations(
        &self,
        model: user_skill::Model,
        relations: &UserSkillRelations,
    ) -> Result<UserSkill, DataLayerError> {
        let mut result = UserSkill::from(model.clone());

        if relations.user.is_some() {
            let user = user::Entity::find_by_id(model.user_id)
                .one(&self.db)
                .await
                .map_err(to_data_layer_error)?
                .ok_or(DataLayerError::MappingError)?;
            result.user = Some(user.into());
        }

        if relations.skill.is_some() {
            let skill = skill::Entity::find_by_id(model.skill_id)
                .one(&self.db)
                .await
                .map_err(to_data_layer_error)?
                .ok_or(DataLayerError::MappingError)?;
            result.skill = Some(skill.into());
        }

        Ok(result)
    }

    async fn resolve_all(
        &self,
        models: Vec<user_skill::Model>,
        relations: &UserSkillRelations,
    ) -> Result<Vec<UserSkill>, DataLayerError> {
        let mut result = Vec::with_capacity(models.len());
        for model in models {
            result.push(self.resolve_relations(model, relations).await?);
        }
        Ok(result)
    }
}

#[async_trait]
impl UserSkillRepository for UserSkillProvider {
    async fn create_user_skill(&self, request: UserSkill) -> Result<UserSkillId, DataLayerError> {
        let user_skill = user_skill::Entity::insert(user_skill::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(user_skill.last_insert_id)
    }

    async fn get_user_skill(
        &self,
        id: UserSkillId,
        relations: &UserSkillRelations,
    ) -> Result<Option<UserSkill>, DataLayerError> {
        let user_skill = user_skill::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        match user_skill {
            None => Ok(None),
            Some(user_skill) => Ok(Some(self.resolve_relations(user_skill, relations).await?)),
        }
    }

    async fn list_user_skills(
        &self,
        user_id: UserId,
        relations: &UserSkillRelations,
    ) -> Result<Vec<UserSkill>, DataLayerError> {
        let user_skills = user_skill::Entity::find()
            .filter(user_skill::Column::UserId.eq(user_id))
            .order_by_asc(user_skill::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        self.resolve_all(user_skills, relations).await
    }

    async fn list_verified(
        &self,
        skill_id: Option<SkillId>,
        relations: &UserSkillRelations,
    ) -> Result<Vec<UserSkill>, DataLayerError> {
        let mut query = user_skill::Entity::find()
            .filter(user_skill::Column::IsVerified.eq(true))
            .order_by_desc(user_skill::Column::VerifiedAt);

        if let Some(skill_id) = skill_id {
            query = query.filter(user_skill::Column::SkillId.eq(skill_id));
        }

        let user_skills = query.all(&self.db).await.map_err(to_data_layer_error)?;

        self.resolve_all(user_skills, relations).await
    }

    async fn update_user_skill(
        &self,
        id: &UserSkillId,
        request: UpdateUserSkillRequest,
    ) -> Result<(), DataLayerError> {
        let update_model = user_skill::ActiveModel {
            id: Unchanged(*id),
            ..user_skill::ActiveModel::from(request)
        };

        user_skill::Entity::update(update_model)
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }
}
