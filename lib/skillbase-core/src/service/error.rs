use shared_types::{
    AttemptId, CertificateId, JobId, ProofId, SkillId, TestId, UserId, UserSkillId,
};
use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error("Repository error: `{0}`")]
    Repository(DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("User `{0}` not found")]
    User(UserId),

    #[error("Skill `{0}` not found")]
    Skill(SkillId),

    #[error("User skill `{0}` not found")]
    UserSkill(UserSkillId),

    #[error("Skill proof `{0}` not found")]
    Proof(ProofId),

    #[error("Mini test `{0}` not found")]
    MiniTest(TestId),

    #[error("Test attempt `{0}` not found")]
    TestAttempt(AttemptId),

    #[error("Certificate `{0}` not found")]
    Certificate(CertificateId),

    #[error("Job listing `{0}` not found")]
    JobListing(JobId),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("User skill `{0}` does not belong to the caller")]
    NotAuthorized(UserSkillId),

    #[error("Email address is already registered")]
    EmailAlreadyRegistered,

    #[error("User `{user}` already claimed skill `{skill}`")]
    SkillAlreadyClaimed { user: UserId, skill: SkillId },

    #[error("Test attempt `{0}` is already completed")]
    AttemptAlreadyCompleted(AttemptId),

    #[error("User skill `{0}` is not verified")]
    UserSkillNotVerified(UserSkillId),

    #[error("Certificate already issued for user skill `{0}`")]
    CertificateAlreadyIssued(UserSkillId),

    #[error("User `{user}` already applied to job `{job}`")]
    AlreadyApplied { user: UserId, job: JobId },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Rating `{0}` outside of the 0.0..=5.0 range")]
    RatingOutOfRange(f32),

    #[error("Invalid email address `{0}`")]
    InvalidEmail(String),

    #[error("Field `{0}` must not be empty")]
    EmptyValue(&'static str),
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        ServiceError::Repository(value)
    }
}
