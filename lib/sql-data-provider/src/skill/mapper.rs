use sea_orm::Set;
use skillbase_core::model::skill::Skill;

use crate::entity::skill;

impl From<Skill> for skill::ActiveModel {
    fn from(value: Skill) -> Self {
        Self {
            id: Set(value.id),
            name: Set(value.name),
            category: Set(value.category),
            description: Set(value.description),
            icon: Set(value.icon),
            is_active: Set(value.is_active),
            created_date: Set(value.created_date),
        }
    }
}
