use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Unchanged,
};
use shared_types::{CertificateId, UserId, UserSkillId};
use skillbase_core::model::certificate::{
    Certificate, CertificateRelations, UpdateCertificateRequest,
};
use skillbase_core::repository::certificate_repository::CertificateRepository;
use skillbase_core::repository::error::DataLayerError;

use super::CertificateProvider;
use crate::entity::{certificate, user_skill};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

impl CertificateProvider {
    async fn resolve_relations(
        &self,
        model: certificate::Model,
        relations: &CertificateRelations,
    ) -> Result<Certificate, DataLayerError> {
        let mut result = Certificate::from(model.clone());

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
impl CertificateRepository for CertificateProvider {
    async fn create_certificate(
        &self,
        request: Certificate,
    ) -> Result<CertificateId, DataLayerError> {
        let certificate = certificate::Entity::insert(certificate::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(certificate.last_insert_id)
    }

    async fn get_certificate(
        &self,
        id: CertificateId,
        relations: &CertificateRelations,
    ) -> Result<Option<Certificate>, DataLayerError> {
        let certificate = certificate::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        match certificate {
            None => Ok(None),
            Some(certificate) => Ok(Some(self.resolve_relations(certificate, relations).await?)),
        }
    }

    async fn get_by_user_skill(
        &self,
        user_skill_id: UserSkillId,
    ) -> Result<Option<Certificate>, DataLayerError> {
        let certificate = certificate::Entity::find()
            .filter(certificate::Column::UserSkillId.eq(user_skill_id))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(certificate.map(Into::into))
    }

    async fn get_active_by_number(
        &self,
        certificate_number: &str,
        relations: &CertificateRelations,
    ) -> Result<Option<Certificate>, DataLayerError> {
        let certificate = certificate::Entity::find()
            .filter(certificate::Column::CertificateNumber.eq(certificate_number))
            .filter(certificate::Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        match certificate {
            None => Ok(None),
            Some(certificate) => Ok(Some(self.resolve_relations(certificate, relations).await?)),
        }
    }

    async fn list_user_certificates(
        &self,
        user_id: UserId,
        relations: &CertificateRelations,
    ) -> Result<Vec<Certificate>, DataLayerError> {
        let certificates = certificate::Entity::find()
            .join(JoinType::InnerJoin, certificate::Relation::UserSkill.def())
            .filter(user_skill::Column::UserId.eq(user_id))
            .filter(certificate::Column::IsActive.eq(true))
            .order_by_desc(certificate::Column::IssuedDate)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let mut result = Vec::with_capacity(certificates.len());
        for certificate in certificates {
            result.push(self.resolve_relations(certificate, relations).await?);
        }

        Ok(result)
    }

    async fn update_certificate(
        &self,
        id: &CertificateId,
        request: UpdateCertificateRequest,
    ) -> Result<(), DataLayerError> {
        let update_model = certificate::ActiveModel {
            id: Unchanged(*id),
            ..certificate::ActiveModel::from(request)
        };

        certificate::Entity::update(update_model)
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }
}
