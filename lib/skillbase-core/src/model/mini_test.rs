use shared_types::{QuestionId, SkillId, TestId};
use strum::Display;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MiniTest {
    pub id: TestId,
    pub skill_id: SkillId,
    pub title: String,
    pub description: Option<String>,
    pub time_limit_minutes: Option<u32>,
    /// Absolute point threshold, compared directly against the summed score.
    pub passing_score: u32,
    pub is_active: bool,
    pub created_date: OffsetDateTime,

    // Relations:
    pub questions: Option<Vec<TestQuestion>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestQuestion {
    pub id: QuestionId,
    pub test_id: TestId,
    pub text: String,
    pub kind: QuestionKind,
    /// Present for multiple-choice questions only, in presentation order.
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    pub points: u32,
    /// Defines presentation order and nothing else.
    pub order_index: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum QuestionKind {
    MultipleChoice,
    VideoTask,
    TrueFalse,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct TestQuestionRelations {}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct MiniTestRelations {
    pub questions: Option<TestQuestionRelations>,
}
