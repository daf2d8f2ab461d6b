use time::OffsetDateTime;

use super::dto::{CreateProofRequestDTO, ProofResponseDTO};
use crate::model::skill_proof::{ProofStatus, SkillProof};

pub(super) fn proof_from_request(
    request: CreateProofRequestDTO,
    now: OffsetDateTime,
) -> SkillProof {
    SkillProof {
        id: uuid::Uuid::new_v4().into(),
        user_skill_id: request.user_skill_id,
        file_url: request.file_url,
        file_kind: request.file_kind,
        description: request.description,
        status: ProofStatus::Uploaded,
        ai_score: None,
        ai_feedback: None,
        created_date: now,
        last_modified: now,
        user_skill: None,
    }
}

pub(super) fn create_response_dto(proof: SkillProof) -> ProofResponseDTO {
    ProofResponseDTO {
        id: proof.id,
        user_skill_id: proof.user_skill_id,
        file_url: proof.file_url,
        file_kind: proof.file_kind,
        description: proof.description,
        status: proof.status,
        ai_score: proof.ai_score,
        ai_feedback: proof.ai_feedback,
        created_date: proof.created_date,
        last_modified: proof.last_modified,
    }
}

pub(super) fn progress_for_status(status: ProofStatus) -> u8 {
    match status {
        ProofStatus::Uploading => 25,
        ProofStatus::Uploaded => 50,
        ProofStatus::Processing => 75,
        ProofStatus::Verified | ProofStatus::Rejected => 100,
    }
}

pub(super) fn feedback_for(passed: bool, score: f32) -> &'static str {
    if passed {
        if score >= 90.0 {
            "Excellent demonstration of the claimed skill."
        } else {
            "Proof accepted, the demonstrated work meets the bar."
        }
    } else if score < 40.0 {
        "The submitted material does not show the claimed skill."
    } else {
        "Not enough evidence of the claimed skill, consider a clearer recording."
    }
}
