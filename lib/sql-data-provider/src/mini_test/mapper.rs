use sea_orm::Set;
use skillbase_core::model::mini_test::{MiniTest, TestQuestion};
use skillbase_core::repository::error::DataLayerError;

use crate::entity::{mini_test, test_question};

impl From<mini_test::Model> for MiniTest {
    fn from(value: mini_test::Model) -> Self {
        Self {
            id: value.id,
            skill_id: value.skill_id,
            title: value.title,
            description: value.description,
            time_limit_minutes: value.time_limit_minutes,
            passing_score: value.passing_score,
            is_active: value.is_active,
            created_date: value.created_date,
            questions: None,
        }
    }
}

impl From<MiniTest> for mini_test::ActiveModel {
    fn from(value: MiniTest) -> Self {
        Self {
            id: Set(value.id),
            skill_id: Set(value.skill_id),
            title: Set(value.title),
            description: Set(value.description),
            time_limit_minutes: Set(value.time_limit_minutes),
            passing_score: Set(value.passing_score),
            is_active: Set(value.is_active),
            created_date: Set(value.created_date),
        }
    }
}

impl TryFrom<test_question::Model> for TestQuestion {
    type Error = DataLayerError;

    fn try_from(value: test_question::Model) -> Result<Self, Self::Error> {
        let options = value
            .options
            .map(|options| serde_json::from_str(&options))
            .transpose()?;

        Ok(Self {
            id: value.id,
            test_id: value.test_id,
            text: value.text,
            kind: value.kind.into(),
            options,
            correct_answer: value.correct_answer,
            points: value.points,
            order_index: value.order_index,
        })
    }
}

impl TryFrom<TestQuestion> for test_question::ActiveModel {
    type Error = DataLayerError;

    fn try_from(value: TestQuestion) -> Result<Self, Self::Error> {
        let options = value
            .options
            .map(|options| serde_json::to_string(&options))
            .transpose()?;

        Ok(Self {
            id: Set(value.id),
            test_id: Set(value.test_id),
            text: Set(value.text),
            kind: Set(value.kind.into()),
            options: Set(options),
            correct_answer: Set(value.correct_answer),
            points: Set(value.points),
            order_index: Set(value.order_index),
        })
    }
}
