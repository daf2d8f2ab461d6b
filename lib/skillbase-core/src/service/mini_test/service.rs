use shared_types::{AttemptId, SkillId, TestId, UserId};
use time::OffsetDateTime;

use super::MiniTestService;
use super::dto::{
    CreateAttemptRequestDTO, CreateAttemptResponseDTO, MiniTestListItemResponseDTO,
    SubmitAttemptRequestDTO, SubmitAttemptResponseDTO, TestAttemptListItemResponseDTO,
    TestQuestionResponseDTO,
};
use super::mapper::{
    attempt_from_request, attempt_list_item, question_response, score_answers, test_list_item,
};
use crate::model::mini_test::MiniTestRelations;
use crate::model::test_attempt::{CompleteAttemptRequest, TestAttemptRelations};
use crate::model::user_skill::{UpdateUserSkillRequest, UserSkillRelations};
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl MiniTestService {
    /// Active tests for one skill.
    pub async fn get_tests_for_skill(
        &self,
        skill_id: SkillId,
    ) -> Result<Vec<MiniTestListItemResponseDTO>, ServiceError> {
        let tests = self.mini_test_repository.list_active_tests(skill_id).await?;

        Ok(tests.into_iter().map(test_list_item).collect())
    }

    /// Questions of a test in presentation order, without the answer key.
    pub async fn get_questions(
        &self,
        test_id: TestId,
    ) -> Result<Vec<TestQuestionResponseDTO>, ServiceError> {
        self.mini_test_repository
            .get_test(test_id, &MiniTestRelations::default())
            .await?
            .ok_or(EntityNotFoundError::MiniTest(test_id))?;

        let questions = self.mini_test_repository.get_questions(test_id).await?;

        Ok(questions.into_iter().map(question_response).collect())
    }

    /// Opens an attempt, snapshotting the attainable points of the test as it
    /// stands right now.
    pub async fn start_attempt(
        &self,
        user_id: UserId,
        request: CreateAttemptRequestDTO,
    ) -> Result<CreateAttemptResponseDTO, ServiceError> {
        let user_skill = self
            .user_skill_repository
            .get_user_skill(request.user_skill_id, &UserSkillRelations::default())
            .await?;
        match user_skill {
            Some(user_skill) if user_skill.user_id == user_id => {}
            _ => return Err(EntityNotFoundError::UserSkill(request.user_skill_id).into()),
        }

        let test = self
            .mini_test_repository
            .get_test(request.test_id, &MiniTestRelations::default())
            .await?
            .filter(|test| test.is_active)
            .ok_or(EntityNotFoundError::MiniTest(request.test_id))?;

        let questions = self.mini_test_repository.get_questions(test.id).await?;
        let total_points = questions.iter().map(|question| question.points).sum();

        let attempt = attempt_from_request(request, total_points, OffsetDateTime::now_utc());
        let started_at = attempt.started_at;
        let id = self.test_attempt_repository.create_attempt(attempt).await?;

        tracing::debug!(attempt_id = %id, total_points, "test attempt started");

        Ok(CreateAttemptResponseDTO {
            id,
            total_points,
            started_at,
        })
    }

    /// Scores and completes an attempt. The transition runs exactly once; a
    /// resubmission fails and leaves the stored result untouched.
    pub async fn submit_attempt(
        &self,
        user_id: UserId,
        attempt_id: AttemptId,
        request: SubmitAttemptRequestDTO,
    ) -> Result<SubmitAttemptResponseDTO, ServiceError> {
        let attempt = self
            .test_attempt_repository
            .get_attempt(attempt_id, &TestAttemptRelations::default())
            .await?
            .ok_or(EntityNotFoundError::TestAttempt(attempt_id))?;

        let user_skill = self
            .user_skill_repository
            .get_user_skill(attempt.user_skill_id, &UserSkillRelations::default())
            .await?;
        match &user_skill {
            Some(user_skill) if user_skill.user_id == user_id => {}
            _ => return Err(EntityNotFoundError::TestAttempt(attempt_id).into()),
        }

        if attempt.completed_at.is_some() {
            return Err(BusinessLogicError::AttemptAlreadyCompleted(attempt_id).into());
        }

        let test = self
            .mini_test_repository
            .get_test(attempt.test_id, &MiniTestRelations::default())
            .await?
            .ok_or(EntityNotFoundError::MiniTest(attempt.test_id))?;
        let questions = self.mini_test_repository.get_questions(test.id).await?;

        let score = score_answers(&questions, &request.answers);
        let passed = score >= test.passing_score;
        let completed_at = OffsetDateTime::now_utc();

        let result = self
            .test_attempt_repository
            .complete_attempt(
                &attempt_id,
                CompleteAttemptRequest {
                    score,
                    passed,
                    completed_at,
                    answers: request.answers,
                },
            )
            .await;
        match result {
            Ok(()) => {}
            // lost the race against a concurrent submission
            Err(DataLayerError::RecordNotUpdated) => {
                return Err(BusinessLogicError::AttemptAlreadyCompleted(attempt_id).into());
            }
            Err(error) => return Err(error.into()),
        }

        if passed {
            self.user_skill_repository
                .update_user_skill(
                    &attempt.user_skill_id,
                    UpdateUserSkillRequest {
                        is_verified: Some(true),
                        verified_at: Some(completed_at),
                    },
                )
                .await?;
        }

        tracing::info!(
            attempt_id = %attempt_id,
            score,
            passed,
            "test attempt completed"
        );

        Ok(SubmitAttemptResponseDTO {
            id: attempt_id,
            score,
            total_points: attempt.total_points,
            passing_score: test.passing_score,
            passed,
            completed_at,
        })
    }

    /// The caller's attempts, newest first, optionally narrowed to one skill.
    pub async fn get_user_attempts(
        &self,
        user_id: UserId,
        skill_id: Option<SkillId>,
    ) -> Result<Vec<TestAttemptListItemResponseDTO>, ServiceError> {
        let attempts = self
            .test_attempt_repository
            .list_attempts_for_user(user_id, skill_id)
            .await?;

        Ok(attempts.into_iter().map(attempt_list_item).collect())
    }
}
