use async_trait::async_trait;
use shared_types::SkillId;

use crate::model::skill::{Skill, SkillRelations};
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, request: Skill) -> Result<SkillId, DataLayerError>;

    async fn get_skill(
        &self,
        id: SkillId,
        relations: &SkillRelations,
    ) -> Result<Option<Skill>, DataLayerError>;

    /// Active catalog entries, ordered by name.
    async fn list_active_skills(&self) -> Result<Vec<Skill>, DataLayerError>;
}
