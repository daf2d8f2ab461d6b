use shared_types::{ApplicationId, JobId, UserId};
use time::OffsetDateTime;

use super::MarketplaceService;
use super::dto::{
    CreateJobApplicationRequestDTO, CreateJobListingRequestDTO, JobApplicationResponseDTO,
    JobListingResponseDTO, JobSearchQueryDTO, WorkerListItemResponseDTO, WorkerSearchQueryDTO,
};
use super::mapper::{
    application_from_request, application_response_dto, listing_from_request,
    listing_response_dto, worker_list_item,
};
use crate::model::job::{JobApplicationRelations, JobListingFilter, JobListingRelations};
use crate::model::skill::SkillRelations;
use crate::model::user::UserRelations;
use crate::model::user_skill::UserSkillRelations;
use crate::repository::error::DataLayerError;
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};

impl MarketplaceService {
    pub async fn create_listing(
        &self,
        employer_id: UserId,
        request: CreateJobListingRequestDTO,
    ) -> Result<JobId, ServiceError> {
        if request.title.trim().is_empty() {
            return Err(ValidationError::EmptyValue("title").into());
        }

        self.user_repository
            .get_user(employer_id, &UserRelations::default())
            .await?
            .ok_or(EntityNotFoundError::User(employer_id))?;

        self.skill_repository
            .get_skill(request.skill_id, &SkillRelations::default())
            .await?
            .filter(|skill| skill.is_active)
            .ok_or(EntityNotFoundError::Skill(request.skill_id))?;

        let listing = listing_from_request(employer_id, request, OffsetDateTime::now_utc());
        let id = self.job_repository.create_listing(listing).await?;

        Ok(id)
    }

    /// Public search over active listings.
    pub async fn search_listings(
        &self,
        query: JobSearchQueryDTO,
    ) -> Result<Vec<JobListingResponseDTO>, ServiceError> {
        let listings = self
            .job_repository
            .search_listings(
                JobListingFilter {
                    text: query.text,
                    skill_id: query.skill_id,
                },
                &JobListingRelations {
                    skill: Some(SkillRelations::default()),
                    ..Default::default()
                },
            )
            .await?;

        Ok(listings.into_iter().map(listing_response_dto).collect())
    }

    /// One application per worker and listing.
    pub async fn apply_to_job(
        &self,
        user_id: UserId,
        request: CreateJobApplicationRequestDTO,
    ) -> Result<ApplicationId, ServiceError> {
        self.user_repository
            .get_user(user_id, &UserRelations::default())
            .await?
            .ok_or(EntityNotFoundError::User(user_id))?;

        let job_id = request.job_id;
        self.job_repository
            .get_listing(job_id, &JobListingRelations::default())
            .await?
            .filter(|listing| listing.is_active)
            .ok_or(EntityNotFoundError::JobListing(job_id))?;

        let application = application_from_request(user_id, request, OffsetDateTime::now_utc());
        let result = self.job_repository.create_application(application).await;

        match result {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => Err(BusinessLogicError::AlreadyApplied {
                user: user_id,
                job: job_id,
            }
            .into()),
            Err(error) => Err(error.into()),
        }
    }

    /// Employer view over the applications of one listing.
    pub async fn get_job_applications(
        &self,
        job_id: JobId,
    ) -> Result<Vec<JobApplicationResponseDTO>, ServiceError> {
        self.job_repository
            .get_listing(job_id, &JobListingRelations::default())
            .await?
            .ok_or(EntityNotFoundError::JobListing(job_id))?;

        let applications = self
            .job_repository
            .list_applications_for_job(
                job_id,
                &JobApplicationRelations {
                    applicant: Some(UserRelations::default()),
                },
            )
            .await?;

        Ok(applications
            .into_iter()
            .map(application_response_dto)
            .collect())
    }

    pub async fn get_user_applications(
        &self,
        user_id: UserId,
    ) -> Result<Vec<JobApplicationResponseDTO>, ServiceError> {
        let applications = self
            .job_repository
            .list_applications_for_user(user_id)
            .await?;

        Ok(applications
            .into_iter()
            .map(application_response_dto)
            .collect())
    }

    /// Discovery over verified user skills, with the issued certificate
    /// number attached where one exists.
    pub async fn search_workers(
        &self,
        query: WorkerSearchQueryDTO,
    ) -> Result<Vec<WorkerListItemResponseDTO>, ServiceError> {
        let user_skills = self
            .user_skill_repository
            .list_verified(
                query.skill_id,
                &UserSkillRelations {
                    user: Some(UserRelations::default()),
                    skill: Some(SkillRelations::default()),
                },
            )
            .await?;

        let mut workers = Vec::with_capacity(user_skills.len());
        for user_skill in user_skills {
            let certificate = self
                .certificate_repository
                .get_by_user_skill(user_skill.id)
                .await?
                .filter(|certificate| certificate.is_active);

            workers.push(worker_list_item(
                user_skill,
                certificate.map(|certificate| certificate.certificate_number),
            )?);
        }

        Ok(workers)
    }
}
