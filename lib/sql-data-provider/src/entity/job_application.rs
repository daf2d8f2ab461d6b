use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{ApplicationId, JobId, UserId};
use skillbase_core::model::job::ApplicationStatus as ModelApplicationStatus;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job_application")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: UserId,
    pub cover_note: Option<String>,
    pub status: ApplicationStatus,
    pub created_date: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job_listing::Entity",
        from = "Column::JobId",
        to = "super::job_listing::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    JobListing,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ApplicantId",
        to = "super::user::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Applicant,
}

impl Related<super::job_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobListing.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applicant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(ModelApplicationStatus)]
#[into(ModelApplicationStatus)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "application_status")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}
