use shared_types::{ProofId, UserSkillId};
use time::OffsetDateTime;

use crate::model::skill_proof::{ProofFileKind, ProofStatus};

#[derive(Clone, Debug)]
pub struct CreateProofRequestDTO {
    pub user_skill_id: UserSkillId,
    pub file_url: String,
    pub file_kind: ProofFileKind,
    pub description: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ProofResponseDTO {
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

#[derive(Clone, Debug)]
pub struct ProofVerificationResponseDTO {
    pub id: ProofId,
    pub status: ProofStatus,
    pub ai_score: f32,
    pub ai_feedback: String,
}

#[derive(Clone, Debug)]
pub struct UploadStatusResponseDTO {
    pub status: ProofStatus,
    /// Coarse percentage derived purely from the status.
    pub progress: u8,
}
