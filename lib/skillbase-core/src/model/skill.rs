use shared_types::SkillId;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: bool,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct SkillRelations {}
