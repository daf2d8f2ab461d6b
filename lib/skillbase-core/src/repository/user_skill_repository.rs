use async_trait::async_trait;
use shared_types::{SkillId, UserId, UserSkillId};

use crate::model::user_skill::{UpdateUserSkillRequest, UserSkill, UserSkillRelations};
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserSkillRepository: Send + Sync {
    /// Fails with [`DataLayerError::AlreadyExists`] when the (user, skill) pair
    /// is already claimed; the store enforces the uniqueness.
    async fn create_user_skill(&self, request: UserSkill) -> Result<UserSkillId, DataLayerError>;

    async fn get_user_skill(
        &self,
        id: UserSkillId,
        relations: &UserSkillRelations,
    ) -> Result<Option<UserSkill>, DataLayerError>;

    async fn list_user_skills(
        &self,
        user_id: UserId,
        relations: &UserSkillRelations,
    ) -> Result<Vec<UserSkill>, DataLayerError>;

    /// Verified associations, optionally narrowed to one skill. Backs the
    /// marketplace worker search.
    async fn list_verified(
        &self,
        skill_id: Option<SkillId>,
        relations: &UserSkillRelations,
    ) -> Result<Vec<UserSkill>, DataLayerError>;

    async fn update_user_skill(
        &self,
        id: &UserSkillId,
        request: UpdateUserSkillRequest,
    ) -> Result<(), DataLayerError>;
}
