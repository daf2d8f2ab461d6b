use sea_orm::{Set, Unchanged};
use skillbase_core::model::certificate::{Certificate, UpdateCertificateRequest};

use crate::entity::certificate;

impl From<certificate::Model> for Certificate {
    fn from(value: certificate::Model) -> Self {
        Self {
            id: value.id,
            user_skill_id: value.user_skill_id,
            certificate_number: value.certificate_number,
            qr_payload: value.qr_payload,
            issued_date: value.issued_date,
            is_active: value.is_active,
            created_date: value.created_date,
            user_skill: None,
        }
    }
}

impl From<Certificate> for certificate::ActiveModel {
    fn from(value: Certificate) -> Self {
        Self {
            id: Set(value.id),
            user_skill_id: Set(value.user_skill_id),
            certificate_number: Set(value.certificate_number),
            qr_payload: Set(value.qr_payload),
            issued_date: Set(value.issued_date),
            is_active: Set(value.is_active),
            created_date: Set(value.created_date),
        }
    }
}

impl From<UpdateCertificateRequest> for certificate::ActiveModel {
    fn from(value: UpdateCertificateRequest) -> Self {
        Self {
            is_active: match value.is_active {
                Some(is_active) => Set(is_active),
                None => Unchanged(Default::default()),
            },
            ..Default::default()
        }
    }
}
