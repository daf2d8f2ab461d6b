use std::collections::HashMap;

use sea_orm::Set;
use shared_types::QuestionId;
use skillbase_core::model::test_attempt::TestAttempt;
use skillbase_core::repository::error::DataLayerError;

use crate::entity::test_attempt;

pub(super) fn serialize_answers(
    answers: &HashMap<QuestionId, String>,
) -> Result<String, DataLayerError> {
    Ok(serde_json::to_string(answers)?)
}

impl TryFrom<test_attempt::Model> for TestAttempt {
    type Error = DataLayerError;

    fn try_from(value: test_attempt::Model) -> Result<Self, Self::Error> {
        let answers = serde_json::from_str(&value.answers)?;

        Ok(Self {
            id: value.id,
            user_skill_id: value.user_skill_id,
            test_id: value.test_id,
            score: value.score,
            total_points: value.total_points,
            passed: value.passed,
            started_at: value.started_at,
            completed_at: value.completed_at,
            answers,
            user_skill: None,
            test: None,
        })
    }
}

impl TryFrom<TestAttempt> for test_attempt::ActiveModel {
    type Error = DataLayerError;

    fn try_from(value: TestAttempt) -> Result<Self, Self::Error> {
        let answers = serialize_answers(&value.answers)?;

        Ok(Self {
            id: Set(value.id),
            user_skill_id: Set(value.user_skill_id),
            test_id: Set(value.test_id),
            score: Set(value.score),
            total_points: Set(value.total_points),
            passed: Set(value.passed),
            started_at: Set(value.started_at),
            completed_at: Set(value.completed_at),
            answers: Set(answers),
        })
    }
}
