use std::collections::HashMap;

use shared_types::{AttemptId, QuestionId, TestId, UserSkillId};
use time::OffsetDateTime;

use super::mini_test::{MiniTest, MiniTestRelations};
use super::user_skill::{UserSkill, UserSkillRelations};

#[derive(Clone, Debug, PartialEq)]
pub struct TestAttempt {
    pub id: AttemptId,
    pub user_skill_id: UserSkillId,
    pub test_id: TestId,
    pub score: u32,
    /// Snapshot of the sum of question points taken when the attempt starts.
    /// Later question edits must not change it.
    pub total_points: u32,
    pub passed: bool,
    pub started_at: OffsetDateTime,
    /// None iff the attempt is still open.
    pub completed_at: Option<OffsetDateTime>,
    pub answers: HashMap<QuestionId, String>,

    // Relations:
    pub user_skill: Option<UserSkill>,
    pub test: Option<MiniTest>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct TestAttemptRelations {
    pub user_skill: Option<UserSkillRelations>,
    pub test: Option<MiniTestRelations>,
}

/// The one and only mutation of an attempt: the open → completed transition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompleteAttemptRequest {
    pub score: u32,
    pub passed: bool,
    pub completed_at: OffsetDateTime,
    pub answers: HashMap<QuestionId, String>,
}
