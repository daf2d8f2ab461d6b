use sea_orm::entity::prelude::*;
use shared_types::{CertificateId, UserSkillId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "certificate")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: CertificateId,
    #[sea_orm(unique)]
    pub user_skill_id: UserSkillId,
    #[sea_orm(unique)]
    pub certificate_number: String,
    pub qr_payload: String,
    pub issued_date: OffsetDateTime,
    pub is_active: bool,
    pub created_date: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_skill::Entity",
        from = "Column::UserSkillId",
        to = "super::user_skill::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    UserSkill,
}

impl Related<super::user_skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSkill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
