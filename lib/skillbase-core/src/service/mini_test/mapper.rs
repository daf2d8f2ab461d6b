use std::collections::HashMap;

use shared_types::QuestionId;
use time::OffsetDateTime;

use super::dto::{
    CreateAttemptRequestDTO, MiniTestListItemResponseDTO, TestAttemptListItemResponseDTO,
    TestQuestionResponseDTO,
};
use crate::model::mini_test::{MiniTest, TestQuestion};
use crate::model::test_attempt::TestAttempt;

pub(super) fn test_list_item(test: MiniTest) -> MiniTestListItemResponseDTO {
    MiniTestListItemResponseDTO {
        id: test.id,
        skill_id: test.skill_id,
        title: test.title,
        description: test.description,
        time_limit_minutes: test.time_limit_minutes,
        passing_score: test.passing_score,
    }
}

pub(super) fn question_response(question: TestQuestion) -> TestQuestionResponseDTO {
    TestQuestionResponseDTO {
        id: question.id,
        text: question.text,
        kind: question.kind,
        options: question.options,
        points: question.points,
        order_index: question.order_index,
    }
}

pub(super) fn attempt_from_request(
    request: CreateAttemptRequestDTO,
    total_points: u32,
    now: OffsetDateTime,
) -> TestAttempt {
    TestAttempt {
        id: uuid::Uuid::new_v4().into(),
        user_skill_id: request.user_skill_id,
        test_id: request.test_id,
        score: 0,
        total_points,
        passed: false,
        started_at: now,
        completed_at: None,
        answers: HashMap::new(),
        user_skill: None,
        test: None,
    }
}

pub(super) fn attempt_list_item(attempt: TestAttempt) -> TestAttemptListItemResponseDTO {
    TestAttemptListItemResponseDTO {
        id: attempt.id,
        test_id: attempt.test_id,
        user_skill_id: attempt.user_skill_id,
        score: attempt.score,
        total_points: attempt.total_points,
        passed: attempt.passed,
        started_at: attempt.started_at,
        completed_at: attempt.completed_at,
    }
}

/// Exact string match per question, full points or nothing.
pub(super) fn score_answers(
    questions: &[TestQuestion],
    answers: &HashMap<QuestionId, String>,
) -> u32 {
    questions
        .iter()
        .filter(|question| {
            answers
                .get(&question.id)
                .is_some_and(|answer| *answer == question.correct_answer)
        })
        .map(|question| question.points)
        .sum()
}
