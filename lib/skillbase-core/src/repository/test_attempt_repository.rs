use async_trait::async_trait;
use shared_types::{AttemptId, SkillId, UserId};

use crate::model::test_attempt::{CompleteAttemptRequest, TestAttempt, TestAttemptRelations};
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait TestAttemptRepository: Send + Sync {
    async fn create_attempt(&self, request: TestAttempt) -> Result<AttemptId, DataLayerError>;

    async fn get_attempt(
        &self,
        id: AttemptId,
        relations: &TestAttemptRelations,
    ) -> Result<Option<TestAttempt>, DataLayerError>;

    /// Conditional open → completed transition. Fails with
    /// [`DataLayerError::RecordNotUpdated`] when the attempt is already
    /// completed, so concurrent submissions resolve to exactly one winner.
    async fn complete_attempt(
        &self,
        id: &AttemptId,
        request: CompleteAttemptRequest,
    ) -> Result<(), DataLayerError>;

    /// Attempts owned by the user through their user skills, optionally
    /// narrowed to one skill, most recently started first.
    async fn list_attempts_for_user(
        &self,
        user_id: UserId,
        skill_id: Option<SkillId>,
    ) -> Result<Vec<TestAttempt>, DataLayerError>;
}
