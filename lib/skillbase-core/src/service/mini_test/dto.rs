use std::collections::HashMap;

use shared_types::{AttemptId, QuestionId, SkillId, TestId, UserSkillId};
use time::OffsetDateTime;

use crate::model::mini_test::QuestionKind;

#[derive(Clone, Debug)]
pub struct MiniTestListItemResponseDTO {
    pub id: TestId,
    pub skill_id: SkillId,
    pub title: String,
    pub description: Option<String>,
    pub time_limit_minutes: Option<u32>,
    pub passing_score: u32,
}

/// Question as handed to a test taker; the correct answer never leaves the
/// service layer.
#[derive(Clone, Debug)]
pub struct TestQuestionResponseDTO {
    pub id: QuestionId,
    pub text: String,
    pub kind: QuestionKind,
    pub options: Option<Vec<String>>,
    pub points: u32,
    pub order_index: u32,
}

#[derive(Clone, Debug)]
pub struct CreateAttemptRequestDTO {
    pub user_skill_id: UserSkillId,
    pub test_id: TestId,
}

#[derive(Clone, Debug)]
pub struct CreateAttemptResponseDTO {
    pub id: AttemptId,
    pub total_points: u32,
    pub started_at: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct SubmitAttemptRequestDTO {
    pub answers: HashMap<QuestionId, String>,
}

#[derive(Clone, Debug)]
pub struct SubmitAttemptResponseDTO {
    pub id: AttemptId,
    pub score: u32,
    pub total_points: u32,
    pub passing_score: u32,
    pub passed: bool,
    pub completed_at: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct TestAttemptListItemResponseDTO {
    pub id: AttemptId,
    pub test_id: TestId,
    pub user_skill_id: UserSkillId,
    pub score: u32,
    pub total_points: u32,
    pub passed: bool,
    pub started_at: OffsetDateTime,
    pub completed_at: Option<OffsetDateTime>,
}
