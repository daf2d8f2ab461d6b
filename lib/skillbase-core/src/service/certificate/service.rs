use shared_types::{CertificateId, UserId, UserSkillId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::CertificateService;
use super::dto::{
    CertificateDownloadResponseDTO, CertificateResponseDTO, CertificateVerificationResponseDTO,
};
use super::mapper::{
    create_response_dto, download_file_name, generate_certificate_number, qr_payload,
    verification_response_dto,
};
use crate::model::certificate::{Certificate, CertificateRelations, UpdateCertificateRequest};
use crate::model::skill::SkillRelations;
use crate::model::user::UserRelations;
use crate::model::user_skill::UserSkillRelations;
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl CertificateService {
    /// Mints the one certificate of a verified user skill.
    pub async fn generate_certificate(
        &self,
        user_skill_id: UserSkillId,
    ) -> Result<CertificateResponseDTO, ServiceError> {
        let user_skill = self
            .user_skill_repository
            .get_user_skill(user_skill_id, &UserSkillRelations::default())
            .await?
            .ok_or(EntityNotFoundError::UserSkill(user_skill_id))?;

        if !user_skill.is_verified {
            return Err(BusinessLogicError::UserSkillNotVerified(user_skill_id).into());
        }

        if self
            .certificate_repository
            .get_by_user_skill(user_skill_id)
            .await?
            .is_some()
        {
            return Err(BusinessLogicError::CertificateAlreadyIssued(user_skill_id).into());
        }

        let issued_date = OffsetDateTime::now_utc();
        let mut certificate = Certificate {
            id: Uuid::new_v4().into(),
            user_skill_id,
            certificate_number: generate_certificate_number(
                &self.config.certificate.number_prefix,
                issued_date,
            ),
            qr_payload: String::new(),
            issued_date,
            is_active: true,
            created_date: issued_date,
            user_skill: None,
        };
        certificate.qr_payload = qr_payload(&certificate)?;

        let result = self
            .certificate_repository
            .create_certificate(certificate.clone())
            .await;
        match result {
            Ok(_) => {}
            // concurrent issuance for the same association
            Err(DataLayerError::AlreadyExists) => {
                return Err(BusinessLogicError::CertificateAlreadyIssued(user_skill_id).into());
            }
            Err(error) => return Err(error.into()),
        }

        tracing::info!(
            certificate_number = %certificate.certificate_number,
            user_skill_id = %user_skill_id,
            "certificate issued"
        );

        Ok(create_response_dto(certificate))
    }

    /// Active certificates of one user.
    pub async fn get_user_certificates(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CertificateResponseDTO>, ServiceError> {
        self.user_repository
            .get_user(user_id, &UserRelations::default())
            .await?
            .ok_or(EntityNotFoundError::User(user_id))?;

        let certificates = self
            .certificate_repository
            .list_user_certificates(user_id, &CertificateRelations::default())
            .await?;

        Ok(certificates.into_iter().map(create_response_dto).collect())
    }

    /// Deactivates a certificate. Revoked certificates drop out of holder
    /// listings, verification lookups and downloads; the number stays taken.
    pub async fn revoke_certificate(
        &self,
        certificate_id: CertificateId,
    ) -> Result<(), ServiceError> {
        let certificate = self
            .certificate_repository
            .get_certificate(certificate_id, &CertificateRelations::default())
            .await?
            .ok_or(EntityNotFoundError::Certificate(certificate_id))?;

        self.certificate_repository
            .update_certificate(
                &certificate_id,
                UpdateCertificateRequest {
                    is_active: Some(false),
                },
            )
            .await?;

        tracing::info!(
            certificate_number = %certificate.certificate_number,
            "certificate revoked"
        );

        Ok(())
    }

    /// Third-party lookup of a scanned certificate number. Unknown or revoked
    /// numbers are an empty result, never an error.
    pub async fn verify_certificate(
        &self,
        certificate_number: &str,
    ) -> Result<Option<CertificateVerificationResponseDTO>, ServiceError> {
        let certificate = self
            .certificate_repository
            .get_active_by_number(
                certificate_number,
                &CertificateRelations {
                    user_skill: Some(UserSkillRelations {
                        user: Some(UserRelations::default()),
                        skill: Some(SkillRelations::default()),
                    }),
                },
            )
            .await?;

        Ok(certificate.map(verification_response_dto))
    }

    /// Resolves the display filename and QR payload for a certificate
    /// download; the actual document rendering happens outside the core.
    pub async fn prepare_download(
        &self,
        certificate_id: CertificateId,
    ) -> Result<CertificateDownloadResponseDTO, ServiceError> {
        let certificate = self
            .certificate_repository
            .get_certificate(
                certificate_id,
                &CertificateRelations {
                    user_skill: Some(UserSkillRelations {
                        user: Some(UserRelations::default()),
                        skill: Some(SkillRelations::default()),
                    }),
                },
            )
            .await?
            .filter(|certificate| certificate.is_active)
            .ok_or(EntityNotFoundError::Certificate(certificate_id))?;

        let user_skill = certificate
            .user_skill
            .as_ref()
            .ok_or_else(|| ServiceError::MappingError("user_skill is None".to_string()))?;
        let holder = user_skill
            .user
            .as_ref()
            .ok_or_else(|| ServiceError::MappingError("user is None".to_string()))?;
        let skill = user_skill
            .skill
            .as_ref()
            .ok_or_else(|| ServiceError::MappingError("skill is None".to_string()))?;

        Ok(CertificateDownloadResponseDTO {
            id: certificate.id,
            certificate_number: certificate.certificate_number.clone(),
            file_name: download_file_name(&holder.full_name, &skill.name),
            qr_payload: certificate.qr_payload.clone(),
        })
    }
}
