use async_trait::async_trait;
use shared_types::{SkillId, TestId};

use crate::model::mini_test::{MiniTest, MiniTestRelations, TestQuestion};
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait MiniTestRepository: Send + Sync {
    /// Inserts the test together with its questions, when the relation is set.
    async fn create_test(&self, request: MiniTest) -> Result<TestId, DataLayerError>;

    async fn get_test(
        &self,
        id: TestId,
        relations: &MiniTestRelations,
    ) -> Result<Option<MiniTest>, DataLayerError>;

    async fn list_active_tests(&self, skill_id: SkillId) -> Result<Vec<MiniTest>, DataLayerError>;

    /// Questions of a test, ascending by order index.
    async fn get_questions(&self, test_id: TestId) -> Result<Vec<TestQuestion>, DataLayerError>;
}
