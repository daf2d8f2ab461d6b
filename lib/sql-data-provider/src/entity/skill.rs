use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::SkillId;
use skillbase_core::model::skill::Skill;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(Skill)]
#[sea_orm(table_name = "skill")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: SkillId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: bool,
    pub created_date: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_skill::Entity")]
    UserSkill,
    #[sea_orm(has_many = "super::mini_test::Entity")]
    MiniTest,
    #[sea_orm(has_many = "super::job_listing::Entity")]
    JobListing,
}

impl Related<super::user_skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSkill.def()
    }
}

impl Related<super::mini_test::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MiniTest.def()
    }
}

impl Related<super::job_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
