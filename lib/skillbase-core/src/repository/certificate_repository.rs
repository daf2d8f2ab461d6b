use async_trait::async_trait;
use shared_types::{CertificateId, UserId, UserSkillId};

use crate::model::certificate::{Certificate, CertificateRelations, UpdateCertificateRequest};
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// At most one active certificate per user skill; the store enforces the
    /// uniqueness and surfaces violations as [`DataLayerError::AlreadyExists`].
    async fn create_certificate(
        &self,
        request: Certificate,
    ) -> Result<CertificateId, DataLayerError>;

    async fn get_certificate(
        &self,
        id: CertificateId,
        relations: &CertificateRelations,
    ) -> Result<Option<Certificate>, DataLayerError>;

    async fn get_by_user_skill(
        &self,
        user_skill_id: UserSkillId,
    ) -> Result<Option<Certificate>, DataLayerError>;

    /// Lookup for third-party QR scans; revoked numbers resolve to `None`.
    async fn get_active_by_number(
        &self,
        certificate_number: &str,
        relations: &CertificateRelations,
    ) -> Result<Option<Certificate>, DataLayerError>;

    async fn list_user_certificates(
        &self,
        user_id: UserId,
        relations: &CertificateRelations,
    ) -> Result<Vec<Certificate>, DataLayerError>;

    async fn update_certificate(
        &self,
        id: &CertificateId,
        request: UpdateCertificateRequest,
    ) -> Result<(), DataLayerError>;
}
