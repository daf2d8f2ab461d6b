use async_trait::async_trait;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::SkillId;
use skillbase_core::model::skill::{Skill, SkillRelations};
use skillbase_core::repository::error::DataLayerError;
use skillbase_core::repository::skill_repository::SkillRepository;

use super::SkillProvider;
use crate::entity::skill;
use crate::mapper::to_data_layer_error;

#[async_trait]
impl SkillRepository for SkillProvider {
    async fn create_skill(&self, request: Skill) -> Result<SkillId, DataLayerError> {
        let skill = skill::Entity::insert(skill::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(skill.last_insert_id)
    }

    async fn get_skill(
        &self,
        id: SkillId,
        _relations: &SkillRelations,
    ) -> Result<Option<Skill>, DataLayerError> {
        let skill = skill::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(skill))
    }

    async fn list_active_skills(&self) -> Result<Vec<Skill>, DataLayerError> {
        let skills = skill::Entity::find()
            .filter(skill::Column::IsActive.eq(true))
            .order_by_asc(skill::Column::Name)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(skills))
    }
}
