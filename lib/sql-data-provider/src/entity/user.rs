use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::UserId;
use skillbase_core::model::user::User;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Into)]
#[into(User)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: UserId,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub rating: Option<f32>,
    pub is_verified: bool,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_skill::Entity")]
    UserSkill,
    #[sea_orm(has_many = "super::job_listing::Entity")]
    JobListing,
    #[sea_orm(has_many = "super::job_application::Entity")]
    JobApplication,
}

impl Related<super::user_skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSkill.def()
    }
}

impl Related<super::job_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobListing.def()
    }
}

impl Related<super::job_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
