use shared_types::{ApplicationId, JobId, SkillId, UserId, UserSkillId};
use time::OffsetDateTime;

use crate::model::job::ApplicationStatus;

#[derive(Clone, Debug)]
pub struct CreateJobListingRequestDTO {
    pub skill_id: SkillId,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub pay_rate: Option<String>,
}

#[derive(Clone, Debug)]
pub struct JobListingResponseDTO {
    pub id: JobId,
    pub employer_id: UserId,
    pub skill_id: SkillId,
    pub skill_name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub pay_rate: Option<String>,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Debug, Default)]
pub struct JobSearchQueryDTO {
    /// Case-insensitive substring match on the title.
    pub text: Option<String>,
    pub skill_id: Option<SkillId>,
}

#[derive(Clone, Debug)]
pub struct CreateJobApplicationRequestDTO {
    pub job_id: JobId,
    pub cover_note: Option<String>,
}

#[derive(Clone, Debug)]
pub struct JobApplicationResponseDTO {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: UserId,
    pub applicant_name: Option<String>,
    pub cover_note: Option<String>,
    pub status: ApplicationStatus,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Debug, Default)]
pub struct WorkerSearchQueryDTO {
    pub skill_id: Option<SkillId>,
}

/// One verified user-skill as shown in discovery, certificate included when
/// one has been issued.
#[derive(Clone, Debug)]
pub struct WorkerListItemResponseDTO {
    pub user_id: UserId,
    pub user_skill_id: UserSkillId,
    pub full_name: String,
    pub location: Option<String>,
    pub rating: Option<f32>,
    pub skill_name: String,
    pub verified_at: Option<OffsetDateTime>,
    pub certificate_number: Option<String>,
}
