use rand::Rng;
use time::OffsetDateTime;

use super::dto::{CertificateResponseDTO, CertificateVerificationResponseDTO, QrPayloadDTO};
use crate::model::certificate::Certificate;
use crate::service::error::ServiceError;

/// Time component plus a random suffix; uniqueness is backed by the store
/// constraint, the suffix only makes collisions unlikely.
pub(super) fn generate_certificate_number(prefix: &str, issued_at: OffsetDateTime) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{prefix}-{}-{suffix:06}", issued_at.unix_timestamp())
}

pub(super) fn qr_payload(certificate: &Certificate) -> Result<String, ServiceError> {
    let payload = QrPayloadDTO {
        certificate_number: certificate.certificate_number.clone(),
        user_skill_id: certificate.user_skill_id,
        issued_at: certificate.issued_date,
    };

    serde_json::to_string(&payload).map_err(|error| ServiceError::MappingError(error.to_string()))
}

pub(super) fn create_response_dto(certificate: Certificate) -> CertificateResponseDTO {
    CertificateResponseDTO {
        id: certificate.id,
        user_skill_id: certificate.user_skill_id,
        certificate_number: certificate.certificate_number,
        qr_payload: certificate.qr_payload,
        issued_date: certificate.issued_date,
        is_active: certificate.is_active,
    }
}

pub(super) fn verification_response_dto(
    certificate: Certificate,
) -> CertificateVerificationResponseDTO {
    let user_skill = certificate.user_skill;

    CertificateVerificationResponseDTO {
        certificate_number: certificate.certificate_number,
        user_skill_id: certificate.user_skill_id,
        issued_date: certificate.issued_date,
        holder_name: user_skill
            .as_ref()
            .and_then(|user_skill| user_skill.user.as_ref())
            .map(|user| user.full_name.clone()),
        skill_name: user_skill
            .as_ref()
            .and_then(|user_skill| user_skill.skill.as_ref())
            .map(|skill| skill.name.clone()),
    }
}

/// `{holder}_{skill}_certificate` with every non-alphanumeric character
/// replaced by an underscore.
pub(super) fn download_file_name(holder_name: &str, skill_name: &str) -> String {
    let sanitized: String = format!("{holder_name} {skill_name} certificate")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    format!("{sanitized}.pdf")
}
