use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use shared_types::{AttemptId, SkillId, UserId};
use skillbase_core::model::test_attempt::{
    CompleteAttemptRequest, TestAttempt, TestAttemptRelations,
};
use skillbase_core::repository::error::DataLayerError;
use skillbase_core::repository::test_attempt_repository::TestAttemptRepository;

use super::TestAttemptProvider;
use super::mapper::serialize_answers;
use crate::entity::{test_attempt, user_skill};
use crate::mapper::to_data_layer_error;

impl TestAttemptProvider {
    async fn resolve_relations(
        &self,
        model: test_attempt::Model,
        relations: &TestAttemptRelations,
    ) -> Result<TestAttempt, DataLayerError> {
        let mut result = TestAttempt::try_from(model)?;

        if let Some(user_skill_relations) = &relations.user_skill {
            result.user_skill = Some(
                self.user_skill_repository
                    .get_user_skill(result.user_skill_id, user_skill_relations)
                    .await?
                    .ok_or(DataLayerError::MappingError)?,
            );
        }

        if let Some(test_relations) = &relations.test {
            result.test = Some(
                self.mini_test_repository
                    .get_test(result.test_id, test_relations)
                    .await?
                    .ok_or(DataLayerError::MappingError)?,
            );
        }

        Ok(result)
    }
}

#[async_trait]
impl TestAttemptRepository for TestAttemptProvider {
    async fn create_attempt(&self, request: TestAttempt) -> Result<AttemptId, DataLayerError> {
        let attempt = test_attempt::Entity::insert(test_attempt::ActiveModel::try_from(request)?)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(attempt.last_insert_id)
    }

    async fn get_attempt(
        &self,
        id: AttemptId,
        relations: &TestAttemptRelations,
    ) -> Result<Option<TestAttempt>, DataLayerError> {
        let attempt = test_attempt::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        match attempt {
            None => Ok(None),
            Some(attempt) => Ok(Some(self.resolve_relations(attempt, relations).await?)),
        }
    }

    async fn complete_attempt(
        &self,
        id: &AttemptId,
        request: CompleteAttemptRequest,
    ) -> Result<(), DataLayerError> {
        let answers = serialize_answers(&request.answers)?;

        // The completed_at guard makes concurrent submissions resolve to
        // exactly one winner.
        let result = test_attempt::Entity::update_many()
            .set(test_attempt::ActiveModel {
                score: Set(request.score),
                passed: Set(request.passed),
                completed_at: Set(Some(request.completed_at)),
                answers: Set(answers),
                ..Default::default()
            })
            .filter(test_attempt::Column::Id.eq(*id))
            .filter(test_attempt::Column::CompletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }

    async fn list_attempts_for_user(
        &self,
        user_id: UserId,
        skill_id: Option<SkillId>,
    ) -> Result<Vec<TestAttempt>, DataLayerError> {
        let mut query = test_attempt::Entity::find()
            .join(JoinType::InnerJoin, test_attempt::Relation::UserSkill.def())
            .filter(user_skill::Column::UserId.eq(user_id))
            .order_by_desc(test_attempt::Column::StartedAt);

        if let Some(skill_id) = skill_id {
            query = query.filter(user_skill::Column::SkillId.eq(skill_id));
        }

        let attempts = query.all(&self.db).await.map_err(to_data_layer_error)?;

        attempts.into_iter().map(TryInto::try_into).collect()
    }
}
