use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{ProofId, UserSkillId};
use skillbase_core::model::skill_proof::{
    ProofFileKind as ModelProofFileKind, ProofStatus as ModelProofStatus,
};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skill_proof")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ProofId,
    pub user_skill_id: UserSkillId,
    pub file_url: String,
    pub file_kind: ProofFileKind,
    pub description: Option<String>,
    pub status: ProofStatus,
    pub ai_score: Option<f32>,
    pub ai_feedback: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
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

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(ModelProofFileKind)]
#[into(ModelProofFileKind)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "proof_file_kind")]
pub enum ProofFileKind {
    #[sea_orm(string_value = "IMAGE")]
    Image,
    #[sea_orm(string_value = "VIDEO")]
    Video,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(ModelProofStatus)]
#[into(ModelProofStatus)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "proof_status")]
pub enum ProofStatus {
    #[sea_orm(string_value = "UPLOADING")]
    Uploading,
    #[sea_orm(string_value = "UPLOADED")]
    Uploaded,
    #[sea_orm(string_value = "PROCESSING")]
    Processing,
    #[sea_orm(string_value = "VERIFIED")]
    Verified,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}
