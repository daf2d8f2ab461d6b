use shared_types::{ProofId, UserSkillId};
use strum::Display;
use time::OffsetDateTime;

use super::user_skill::{UserSkill, UserSkillRelations};

#[derive(Clone, Debug, PartialEq)]
pub struct SkillProof {
    pub id: ProofId,
    pub user_skill_id: UserSkillId,
    /// Reference to already-stored media, supplied by the caller.
    pub file_url: String,
    pub file_kind: ProofFileKind,
    pub description: Option<String>,
    pub status: ProofStatus,
    pub ai_score: Option<f32>,
    pub ai_feedback: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,

    // Relations:
    pub user_skill: Option<UserSkill>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum ProofFileKind {
    Image,
    Video,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum ProofStatus {
    Uploading,
    Uploaded,
    Processing,
    Verified,
    Rejected,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct SkillProofRelations {
    pub user_skill: Option<UserSkillRelations>,
}

/// Score and feedback are only ever written together, by the verification step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateSkillProofRequest {
    pub status: Option<ProofStatus>,
    pub ai_score: Option<f32>,
    pub ai_feedback: Option<String>,
}
