use sea_orm::entity::prelude::*;
use shared_types::{SkillId, UserId, UserSkillId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_skill")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: UserSkillId,
    pub user_id: UserId,
    pub skill_id: SkillId,
    pub is_verified: bool,
    pub verified_at: Option<OffsetDateTime>,
    pub created_date: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::skill::Entity",
        from = "Column::SkillId",
        to = "super::skill::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Skill,
    #[sea_orm(has_many = "super::skill_proof::Entity")]
    SkillProof,
    #[sea_orm(has_many = "super::test_attempt::Entity")]
    TestAttempt,
    #[sea_orm(has_many = "super::certificate::Entity")]
    Certificate,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl Related<super::skill_proof::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillProof.def()
    }
}

impl Related<super::test_attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestAttempt.def()
    }
}

impl Related<super::certificate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
