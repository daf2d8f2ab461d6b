use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{SkillId, TestId};
use skillbase_core::model::mini_test::{MiniTest, MiniTestRelations, TestQuestion};
use skillbase_core::repository::error::DataLayerError;
use skillbase_core::repository::mini_test_repository::MiniTestRepository;

use super::MiniTestProvider;
use crate::entity::{mini_test, test_question};
use crate::mapper::to_data_layer_error;

impl MiniTestProvider {
    async fn questions_of(&self, test_id: TestId) -> Result<Vec<TestQuestion>, DataLayerError> {
        let questions = test_question::Entity::find()
            .filter(test_question::Column::TestId.eq(test_id))
            .order_by_asc(test_question::Column::OrderIndex)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        questions.into_iter().map(TryInto::try_into).collect()
    }
}

#[async_trait]
impl MiniTestRepository for MiniTestProvider {
    async fn create_test(&self, request: MiniTest) -> Result<TestId, DataLayerError> {
        let questions = request.questions.clone();

        let test = mini_test::Entity::insert(mini_test::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if let Some(questions) = questions {
            for question in questions {
                test_question::Entity::insert(test_question::ActiveModel::try_from(question)?)
                    .exec(&self.db)
                    .await
                    .map_err(to_data_layer_error)?;
            }
        }

        Ok(test.last_insert_id)
    }

    async fn get_test(
        &self,
        id: TestId,
        relations: &MiniTestRelations,
    ) -> Result<Option<MiniTest>, DataLayerError> {
        let test = mini_test::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let Some(test) = test else {
            return Ok(None);
        };

        let mut result = MiniTest::from(test);
        if relations.questions.is_some() {
            result.questions = Some(self.questions_of(id).await?);
        }

        Ok(Some(result))
    }

    async fn list_active_tests(&self, skill_id: SkillId) -> Result<Vec<MiniTest>, DataLayerError> {
        let tests = mini_test::Entity::find()
            .filter(mini_test::Column::SkillId.eq(skill_id))
            .filter(mini_test::Column::IsActive.eq(true))
            .order_by_asc(mini_test::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(tests.into_iter().map(Into::into).collect())
    }

    async fn get_questions(&self, test_id: TestId) -> Result<Vec<TestQuestion>, DataLayerError> {
        self.questions_of(test_id).await
    }
}
