use async_trait::async_trait;
use shared_types::{ApplicationId, JobId, UserId};

use crate::model::job::{
    JobApplication, JobApplicationRelations, JobListing, JobListingFilter, JobListingRelations,
};
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create_listing(&self, request: JobListing) -> Result<JobId, DataLayerError>;

    async fn get_listing(
        &self,
        id: JobId,
        relations: &JobListingRelations,
    ) -> Result<Option<JobListing>, DataLayerError>;

    /// Active listings matching the filter, newest first.
    async fn search_listings(
        &self,
        filter: JobListingFilter,
        relations: &JobListingRelations,
    ) -> Result<Vec<JobListing>, DataLayerError>;

    /// One application per (job, applicant); duplicates surface as
    /// [`DataLayerError::AlreadyExists`].
    async fn create_application(
        &self,
        request: JobApplication,
    ) -> Result<ApplicationId, DataLayerError>;

    async fn list_applications_for_job(
        &self,
        job_id: JobId,
        relations: &JobApplicationRelations,
    ) -> Result<Vec<JobApplication>, DataLayerError>;

    async fn list_applications_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<JobApplication>, DataLayerError>;
}
