use shared_types::{ApplicationId, JobId, SkillId, UserId};
use strum::Display;
use time::OffsetDateTime;

use super::skill::{Skill, SkillRelations};
use super::user::{User, UserRelations};

#[derive(Clone, Debug, PartialEq)]
pub struct JobListing {
    pub id: JobId,
    pub employer_id: UserId,
    pub skill_id: SkillId,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub pay_rate: Option<String>,
    pub is_active: bool,
    pub created_date: OffsetDateTime,

    // Relations:
    pub employer: Option<User>,
    pub skill: Option<Skill>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct JobListingRelations {
    pub employer: Option<UserRelations>,
    pub skill: Option<SkillRelations>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: UserId,
    pub cover_note: Option<String>,
    pub status: ApplicationStatus,
    pub created_date: OffsetDateTime,

    // Relations:
    pub applicant: Option<User>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct JobApplicationRelations {
    pub applicant: Option<UserRelations>,
}

/// Filter for the public listing search.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct JobListingFilter {
    /// Case-insensitive substring match on the title.
    pub text: Option<String>,
    pub skill_id: Option<SkillId>,
}
