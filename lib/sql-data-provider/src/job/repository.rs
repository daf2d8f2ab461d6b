use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{ApplicationId, JobId, UserId};
use skillbase_core::model::job::{
    JobApplication, JobApplicationRelations, JobListing, JobListingFilter, JobListingRelations,
};
use skillbase_core::repository::error::DataLayerError;
use skillbase_core::repository::job_repository::JobRepository;

use super::JobProvider;
use crate::entity::{job_application, job_listing, skill, user};
use crate::mapper::to_data_layer_error;

impl JobProvider {
    async fn resolve_listing_relations(
        &self,
        model: job_listing::Model,
        relations: &JobListingRelations,
    ) -> Result<JobListing, DataLayerError> {
        let mut result = JobListing::from(model.clone());

        if relations.employer.is_some() {
            let employer = user::Entity::find_by_id(model.employer_id)
                .one(&self.db)
                .await
                .map_err(to_data_layer_error)?
                .ok_or(DataLayerError::MappingError)?;
            result.employer = Some(employer.into());
        }

        if relations.skill.is_some() {
            let skill = skill::Entity::find_by_id(model.skill_id)
                .one(&self.db)
                .await
                .map_err(to_data_layer_error)?
                .ok_or(DataLayerError::MappingError)?;
            result.skill = Some(skill.into());
        }

        Ok(result)
    }

    async fn resolve_application_relations(
        &self,
        model: job_application::Model,
        relations: &JobApplicationRelations,
    ) -> Result<JobApplication, DataLayerError> {
        let mut result = JobApplication::from(model.clone());

        if relations.applicant.is_some() {
            let applicant = user::Entity::find_by_id(model.applicant_id)
                .one(&self.db)
                .await
                .map_err(to_data_layer_error)?
                .ok_or(DataLayerError::MappingError)?;
            result.applicant = Some(applicant.into());
        }

        Ok(result)
    }
}

#[async_trait]
impl JobRepository for JobProvider {
    async fn create_listing(&self, request: JobListing) -> Result<JobId, DataLayerError> {
        let listing = job_listing::Entity::insert(job_listing::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(listing.last_insert_id)
    }

    async fn get_listing(
        &self,
        id: JobId,
        relations: &JobListingRelations,
    ) -> Result<Option<JobListing>, DataLayerError> {
        let listing = job_listing::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        match listing {
            None => Ok(None),
            Some(listing) => Ok(Some(self.resolve_listing_relations(listing, relations).await?)),
        }
    }

    async fn search_listings(
        &self,
        filter: JobListingFilter,
        relations: &JobListingRelations,
    ) -> Result<Vec<JobListing>, DataLayerError> {
        let mut query = job_listing::Entity::find()
            .filter(job_listing::Column::IsActive.eq(true))
            .order_by_desc(job_listing::Column::CreatedDate);

        if let Some(text) = filter.text {
            query = query.filter(job_listing::Column::Title.contains(&text));
        }

        if let Some(skill_id) = filter.skill_id {
            query = query.filter(job_listing::Column::SkillId.eq(skill_id));
        }

        let listings = query.all(&self.db).await.map_err(to_data_layer_error)?;

        let mut result = Vec::with_capacity(listings.len());
        for listing in listings {
            result.push(self.resolve_listing_relations(listing, relations).await?);
        }

        Ok(result)
    }

    async fn create_application(
        &self,
        request: JobApplication,
    ) -> Result<ApplicationId, DataLayerError> {
        let application =
            job_application::Entity::insert(job_application::ActiveModel::from(request))
                .exec(&self.db)
                .await
                .map_err(to_data_layer_error)?;

        Ok(application.last_insert_id)
    }

    async fn list_applications_for_job(
        &self,
        job_id: JobId,
        relations: &JobApplicationRelations,
    ) -> Result<Vec<JobApplication>, DataLayerError> {
        let applications = job_application::Entity::find()
            .filter(job_application::Column::JobId.eq(job_id))
            .order_by_asc(job_application::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let mut result = Vec::with_capacity(applications.len());
        for application in applications {
            result.push(
                self.resolve_application_relations(application, relations)
                    .await?,
            );
        }

        Ok(result)
    }

    async fn list_applications_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<JobApplication>, DataLayerError> {
        let applications = job_application::Entity::find()
            .filter(job_application::Column::ApplicantId.eq(user_id))
            .order_by_desc(job_application::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(applications.into_iter().map(Into::into).collect())
    }
}
