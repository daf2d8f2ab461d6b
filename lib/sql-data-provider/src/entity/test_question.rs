use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{QuestionId, TestId};
use skillbase_core::model::mini_test::QuestionKind as ModelQuestionKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "test_question")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: QuestionId,
    pub test_id: TestId,
    pub text: String,
    pub kind: QuestionKind,
    /// JSON array of choices, null for question kinds without options.
    pub options: Option<String>,
    pub correct_answer: String,
    pub points: u32,
    pub order_index: u32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mini_test::Entity",
        from = "Column::TestId",
        to = "super::mini_test::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    MiniTest,
}

impl Related<super::mini_test::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MiniTest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(ModelQuestionKind)]
#[into(ModelQuestionKind)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "question_kind")]
pub enum QuestionKind {
    #[sea_orm(string_value = "MULTIPLE_CHOICE")]
    MultipleChoice,
    #[sea_orm(string_value = "VIDEO_TASK")]
    VideoTask,
    #[sea_orm(string_value = "TRUE_FALSE")]
    TrueFalse,
}
