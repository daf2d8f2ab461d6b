use async_trait::async_trait;
use shared_types::{ProofId, UserSkillId};

use crate::model::skill_proof::{SkillProof, SkillProofRelations, UpdateSkillProofRequest};
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SkillProofRepository: Send + Sync {
    async fn create_proof(&self, request: SkillProof) -> Result<ProofId, DataLayerError>;

    async fn get_proof(
        &self,
        id: ProofId,
        relations: &SkillProofRelations,
    ) -> Result<Option<SkillProof>, DataLayerError>;

    async fn list_proofs(
        &self,
        user_skill_id: UserSkillId,
    ) -> Result<Vec<SkillProof>, DataLayerError>;

    async fn update_proof(
        &self,
        id: &ProofId,
        request: UpdateSkillProofRequest,
    ) -> Result<(), DataLayerError>;
}
