use shared_types::{ProofId, UserId, UserSkillId};
use time::OffsetDateTime;

use super::ProofService;
use super::dto::{
    CreateProofRequestDTO, ProofResponseDTO, ProofVerificationResponseDTO, UploadStatusResponseDTO,
};
use super::mapper::{create_response_dto, feedback_for, progress_for_status, proof_from_request};
use crate::model::skill_proof::{ProofStatus, SkillProofRelations, UpdateSkillProofRequest};
use crate::model::user_skill::{UpdateUserSkillRequest, UserSkillRelations};
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl ProofService {
    /// Records an uploaded proof reference against one of the caller's
    /// claimed skills. The ownership check runs before any write.
    pub async fn submit_proof(
        &self,
        user_id: UserId,
        request: CreateProofRequestDTO,
    ) -> Result<ProofId, ServiceError> {
        self.throw_if_not_owner(user_id, request.user_skill_id)
            .await?;

        let proof = proof_from_request(request, OffsetDateTime::now_utc());
        let id = self.proof_repository.create_proof(proof).await?;

        Ok(id)
    }

    /// All proofs of one user skill. The read is deliberately unauthenticated;
    /// proofs back the public marketplace profile.
    pub async fn get_proofs(
        &self,
        user_skill_id: UserSkillId,
    ) -> Result<Vec<ProofResponseDTO>, ServiceError> {
        let proofs = self.proof_repository.list_proofs(user_skill_id).await?;

        Ok(proofs.into_iter().map(create_response_dto).collect())
    }

    /// Runs the AI verification for a proof and stores score, feedback and the
    /// resulting status. A passing score also marks the owning user skill
    /// verified, which unlocks certificate issuance.
    pub async fn run_verification(
        &self,
        proof_id: ProofId,
    ) -> Result<ProofVerificationResponseDTO, ServiceError> {
        let proof = self
            .proof_repository
            .get_proof(proof_id, &SkillProofRelations::default())
            .await?
            .ok_or(EntityNotFoundError::Proof(proof_id))?;

        let score = self.analyzer.analyze(&proof);
        let passed = score >= self.config.verification.pass_threshold;
        let status = if passed {
            ProofStatus::Verified
        } else {
            ProofStatus::Rejected
        };
        let feedback = feedback_for(passed, score);

        self.proof_repository
            .update_proof(
                &proof_id,
                UpdateSkillProofRequest {
                    status: Some(status),
                    ai_score: Some(score),
                    ai_feedback: Some(feedback.to_string()),
                },
            )
            .await?;

        if passed {
            self.user_skill_repository
                .update_user_skill(
                    &proof.user_skill_id,
                    UpdateUserSkillRequest {
                        is_verified: Some(true),
                        verified_at: Some(OffsetDateTime::now_utc()),
                    },
                )
                .await?;
        }

        tracing::info!(
            proof_id = %proof_id,
            score,
            %status,
            "proof verification finished"
        );

        Ok(ProofVerificationResponseDTO {
            id: proof_id,
            status,
            ai_score: score,
            ai_feedback: feedback.to_string(),
        })
    }

    pub async fn get_upload_status(
        &self,
        proof_id: ProofId,
    ) -> Result<UploadStatusResponseDTO, ServiceError> {
        let proof = self
            .proof_repository
            .get_proof(proof_id, &SkillProofRelations::default())
            .await?
            .ok_or(EntityNotFoundError::Proof(proof_id))?;

        Ok(UploadStatusResponseDTO {
            status: proof.status,
            progress: progress_for_status(proof.status),
        })
    }

    async fn throw_if_not_owner(
        &self,
        user_id: UserId,
        user_skill_id: UserSkillId,
    ) -> Result<(), ServiceError> {
        let user_skill = self
            .user_skill_repository
            .get_user_skill(user_skill_id, &UserSkillRelations::default())
            .await?;

        // a missing association is indistinguishable from someone else's
        match user_skill {
            Some(user_skill) if user_skill.user_id == user_id => Ok(()),
            _ => Err(BusinessLogicError::NotAuthorized(user_skill_id).into()),
        }
    }
}
