use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Unchanged};
use shared_types::{ProofId, UserSkillId};
use skillbase_core::model::skill_proof::{
    SkillProof, SkillProofRelations, UpdateSkillProofRequest,
};
use skillbase_core::repository::error::DataLayerError;
use skillbase_core::repository::skill_proof_repository::SkillProofRepository;

use super::SkillProofProvider;
use crate::entity::skill_proof;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

impl SkillProofProvider {
    async fn resolve_relations(
        &self,
        model: skill_proof::Model,
        relations: &SkillProofRelations,
    ) -> Result<SkillProof, DataLayerError> {
        let mut result = SkillProof::from(model.clone());

        if let Some(user_skill_relations) = &relations.user_skill {
            result.user_skill = Some(
                self.user_skill_repository
                    .get_user_skill(model.user_skill_id, user_skill_relations)
                    .await?
                    .ok_or(DataLayerError::MappingError)?,
            );
        }

        Ok(result)
    }
}

#[async_trait]
impl SkillProofRepository for SkillProofProvider {
    async fn create_proof(&self, request: SkillProof) -> Result<ProofId, DataLayerError> {
        let proof = skill_proof::Entity::insert(skill_proof::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(proof.last_insert_id)
    }

    async fn get_proof(
        &self,
        id: ProofId,
        relations: &SkillProofRelations,
    ) -> Result<Option<SkillProof>, DataLayerError> {
        let proof = skill_proof::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        match proof {
            None => Ok(None),
            Some(proof) => Ok(Some(self.resolve_relations(proof, relations).await?)),
        }
    }

    async fn list_proofs(
        &self,
        user_skill_id: UserSkillId,
    ) -> Result<Vec<SkillProof>, DataLayerError> {
        let proofs = skill_proof::Entity::find()
            .filter(skill_proof::Column::UserSkillId.eq(user_skill_id))
            .order_by_desc(skill_proof::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(proofs.into_iter().map(Into::into).collect())
    }

    async fn update_proof(
        &self,
        id: &ProofId,
        request: UpdateSkillProofRequest,
    ) -> Result<(), DataLayerError> {
        let update_model = skill_proof::ActiveModel {
            id: Unchanged(*id),
            ..skill_proof::ActiveModel::from(request)
        };

        skill_proof::Entity::update(update_model)
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }
}
