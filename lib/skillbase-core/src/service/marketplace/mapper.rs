use shared_types::UserId;
use time::OffsetDateTime;

use super::dto::{
    CreateJobApplicationRequestDTO, CreateJobListingRequestDTO, JobApplicationResponseDTO,
    JobListingResponseDTO, WorkerListItemResponseDTO,
};
use crate::model::job::{ApplicationStatus, JobApplication, JobListing};
use crate::model::user_skill::UserSkill;
use crate::service::error::ServiceError;

pub(super) fn listing_from_request(
    employer_id: UserId,
    request: CreateJobListingRequestDTO,
    now: OffsetDateTime,
) -> JobListing {
    JobListing {
        id: uuid::Uuid::new_v4().into(),
        employer_id,
        skill_id: request.skill_id,
        title: request.title,
        description: request.description,
        location: request.location,
        pay_rate: request.pay_rate,
        is_active: true,
        created_date: now,
        employer: None,
        skill: None,
    }
}

pub(super) fn listing_response_dto(listing: JobListing) -> JobListingResponseDTO {
    JobListingResponseDTO {
        id: listing.id,
        employer_id: listing.employer_id,
        skill_id: listing.skill_id,
        skill_name: listing.skill.map(|skill| skill.name),
        title: listing.title,
        description: listing.description,
        location: listing.location,
        pay_rate: listing.pay_rate,
        created_date: listing.created_date,
    }
}

pub(super) fn application_from_request(
    applicant_id: UserId,
    request: CreateJobApplicationRequestDTO,
    now: OffsetDateTime,
) -> JobApplication {
    JobApplication {
        id: uuid::Uuid::new_v4().into(),
        job_id: request.job_id,
        applicant_id,
        cover_note: request.cover_note,
        status: ApplicationStatus::Pending,
        created_date: now,
        applicant: None,
    }
}

pub(super) fn application_response_dto(application: JobApplication) -> JobApplicationResponseDTO {
    JobApplicationResponseDTO {
        id: application.id,
        job_id: application.job_id,
        applicant_id: application.applicant_id,
        applicant_name: application.applicant.map(|user| user.full_name),
        cover_note: application.cover_note,
        status: application.status,
        created_date: application.created_date,
    }
}

pub(super) fn worker_list_item(
    user_skill: UserSkill,
    certificate_number: Option<String>,
) -> Result<WorkerListItemResponseDTO, ServiceError> {
    let user = user_skill
        .user
        .ok_or_else(|| ServiceError::MappingError("user is None".to_string()))?;
    let skill = user_skill
        .skill
        .ok_or_else(|| ServiceError::MappingError("skill is None".to_string()))?;

    Ok(WorkerListItemResponseDTO {
        user_id: user.id,
        user_skill_id: user_skill.id,
        full_name: user.full_name,
        location: user.location,
        rating: user.rating,
        skill_name: skill.name,
        verified_at: user_skill.verified_at,
        certificate_number,
    })
}
