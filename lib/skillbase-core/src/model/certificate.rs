use shared_types::{CertificateId, UserSkillId};
use time::OffsetDateTime;

use super::user_skill::{UserSkill, UserSkillRelations};

#[derive(Clone, Debug, PartialEq)]
pub struct Certificate {
    pub id: CertificateId,
    pub user_skill_id: UserSkillId,
    /// Globally unique, stable for the lifetime of the user skill.
    pub certificate_number: String,
    /// JSON payload embedded in the QR code handed to third-party verifiers.
    pub qr_payload: String,
    pub issued_date: OffsetDateTime,
    pub is_active: bool,
    pub created_date: OffsetDateTime,

    // Relations:
    pub user_skill: Option<UserSkill>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct CertificateRelations {
    pub user_skill: Option<UserSkillRelations>,
}

/// The active flag doubles as soft revocation; nothing else is mutable.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdateCertificateRequest {
    pub is_active: Option<bool>,
}
