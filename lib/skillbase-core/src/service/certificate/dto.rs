use serde::{Deserialize, Serialize};
use shared_types::{CertificateId, UserSkillId};
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct CertificateResponseDTO {
    pub id: CertificateId,
    pub user_skill_id: UserSkillId,
    pub certificate_number: String,
    pub qr_payload: String,
    pub issued_date: OffsetDateTime,
    pub is_active: bool,
}

/// What a third party gets back for a scanned certificate number.
#[derive(Clone, Debug)]
pub struct CertificateVerificationResponseDTO {
    pub certificate_number: String,
    pub user_skill_id: UserSkillId,
    pub issued_date: OffsetDateTime,
    pub holder_name: Option<String>,
    pub skill_name: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CertificateDownloadResponseDTO {
    pub id: CertificateId,
    pub certificate_number: String,
    /// Display filename derived from holder and skill names.
    pub file_name: String,
    pub qr_payload: String,
}

/// Content of the QR code. Round-trips through JSON so an external verifier
/// can recover number and association from a scan.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct QrPayloadDTO {
    pub certificate_number: String,
    pub user_skill_id: UserSkillId,
    #[serde(with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,
}
