use sea_orm::Set;
use skillbase_core::model::job::{JobApplication, JobListing};

use crate::entity::{job_application, job_listing};

impl From<job_listing::Model> for JobListing {
    fn from(value: job_listing::Model) -> Self {
        Self {
            id: value.id,
            employer_id: value.employer_id,
            skill_id: value.skill_id,
            title: value.title,
            description: value.description,
            location: value.location,
            pay_rate: value.pay_rate,
            is_active: value.is_active,
            created_date: value.created_date,
            employer: None,
            skill: None,
        }
    }
}

impl From<JobListing> for job_listing::ActiveModel {
    fn from(value: JobListing) -> Self {
        Self {
            id: Set(value.id),
            employer_id: Set(value.employer_id),
            skill_id: Set(value.skill_id),
            title: Set(value.title),
            description: Set(value.description),
            location: Set(value.location),
            pay_rate: Set(value.pay_rate),
            is_active: Set(value.is_active),
            created_date: Set(value.created_date),
        }
    }
}

impl From<job_application::Model> for JobApplication {
    fn from(value: job_application::Model) -> Self {
        Self {
            id: value.id,
            job_id: value.job_id,
            applicant_id: value.applicant_id,
            cover_note: value.cover_note,
            status: value.status.into(),
            created_date: value.created_date,
            applicant: None,
        }
    }
}

impl From<JobApplication> for job_application::ActiveModel {
    fn from(value: JobApplication) -> Self {
        Self {
            id: Set(value.id),
            job_id: Set(value.job_id),
            applicant_id: Set(value.applicant_id),
            cover_note: Set(value.cover_note),
            status: Set(value.status.into()),
            created_date: Set(value.created_date),
        }
    }
}
