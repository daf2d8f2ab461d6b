use sea_orm::{Set, Unchanged};
use skillbase_core::model::skill_proof::{SkillProof, UpdateSkillProofRequest};
use time::OffsetDateTime;

use crate::entity::skill_proof;

impl From<skill_proof::Model> for SkillProof {
    fn from(value: skill_proof::Model) -> Self {
        Self {
            id: value.id,
            user_skill_id: value.user_skill_id,
            file_url: value.file_url,
            file_kind: value.file_kind.into(),
            description: value.description,
            status: value.status.into(),
            ai_score: value.ai_score,
            ai_feedback: value.ai_feedback,
            created_date: value.created_date,
            last_modified: value.last_modified,
            user_skill: None,
        }
    }
}

impl From<SkillProof> for skill_proof::ActiveModel {
    fn from(value: SkillProof) -> Self {
        Self {
            id: Set(value.id),
            user_skill_id: Set(value.user_skill_id),
            file_url: Set(value.file_url),
            file_kind: Set(value.file_kind.into()),
            description: Set(value.description),
            status: Set(value.status.into()),
            ai_score: Set(value.ai_score),
            ai_feedback: Set(value.ai_feedback),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
        }
    }
}

impl From<UpdateSkillProofRequest> for skill_proof::ActiveModel {
    fn from(value: UpdateSkillProofRequest) -> Self {
        Self {
            status: value.status.map(|status| Set(status.into())).unwrap_or_default(),
            ai_score: match value.ai_score {
                Some(ai_score) => Set(Some(ai_score)),
                None => Unchanged(Default::default()),
            },
            ai_feedback: match value.ai_feedback {
                Some(ai_feedback) => Set(Some(ai_feedback)),
                None => Unchanged(Default::default()),
            },
            last_modified: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        }
    }
}
