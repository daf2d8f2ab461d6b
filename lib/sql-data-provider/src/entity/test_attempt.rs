use sea_orm::entity::prelude::*;
use shared_types::{AttemptId, TestId, UserSkillId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "test_attempt")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: AttemptId,
    pub user_skill_id: UserSkillId,
    pub test_id: TestId,
    pub score: u32,
    pub total_points: u32,
    pub passed: bool,
    pub started_at: OffsetDateTime,
    pub completed_at: Option<OffsetDateTime>,
    /// JSON object keyed by question id.
    pub answers: String,
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
    #[sea_orm(
        belongs_to = "super::mini_test::Entity",
        from = "Column::TestId",
        to = "super::mini_test::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    MiniTest,
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

impl ActiveModelBehavior for ActiveModel {}
