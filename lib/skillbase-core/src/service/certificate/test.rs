use std::sync::Arc;

use uuid::Uuid;

use super::CertificateService;
use super::dto::QrPayloadDTO;
use super::mapper::download_file_name;
use crate::config::core_config::CoreConfig;
use crate::repository::certificate_repository::MockCertificateRepository;
use crate::repository::error::DataLayerError;
use crate::repository::user_repository::MockUserRepository;
use crate::repository::user_skill_repository::MockUserSkillRepository;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};
use crate::service::test_utilities::{
    dummy_date, generic_certificate, generic_skill, generic_user, generic_user_skill,
};

#[derive(Default)]
struct Repositories {
    pub certificate_repository: MockCertificateRepository,
    pub user_skill_repository: MockUserSkillRepository,
    pub user_repository: MockUserRepository,
}

fn setup_service(repositories: Repositories) -> CertificateService {
    CertificateService::new(
        Arc::new(repositories.certificate_repository),
        Arc::new(repositories.user_skill_repository),
        Arc::new(repositories.user_repository),
        Arc::new(CoreConfig::default()),
    )
}

fn verified_user_skill() -> crate::model::user_skill::UserSkill {
    let mut user_skill = generic_user_skill(Uuid::new_v4().into());
    user_skill.is_verified = true;
    user_skill.verified_at = Some(dummy_date());
    user_skill
}

#[tokio::test]
async fn test_generate_certificate_success_and_qr_round_trip() {
    let user_skill = verified_user_skill();
    let user_skill_id = user_skill.id;

    let mut user_skill_repository = MockUserSkillRepository::default();
    user_skill_repository
        .expect_get_user_skill()
        .once()
        .returning(move |_, _| Ok(Some(user_skill.clone())));

    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_by_user_skill()
        .once()
        .returning(|_| Ok(None));
    certificate_repository
        .expect_create_certificate()
        .once()
        .withf(|certificate| certificate.is_active && !certificate.qr_payload.is_empty())
        .returning(|certificate| Ok(certificate.id));

    let service = setup_service(Repositories {
        certificate_repository,
        user_skill_repository,
        ..Default::default()
    });

    let result = service.generate_certificate(user_skill_id).await.unwrap();
    assert!(result.certificate_number.starts_with("SKB-"));

    let payload: QrPayloadDTO = serde_json::from_str(&result.qr_payload).unwrap();
    assert_eq!(result.certificate_number, payload.certificate_number);
    assert_eq!(user_skill_id, payload.user_skill_id);
}

#[tokio::test]
async fn test_generate_certificate_fails_for_unverified_user_skill() {
    let user_skill = generic_user_skill(Uuid::new_v4().into());
    let user_skill_id = user_skill.id;

    let mut user_skill_repository = MockUserSkillRepository::default();
    user_skill_repository
        .expect_get_user_skill()
        .once()
        .returning(move |_, _| Ok(Some(user_skill.clone())));

    let service = setup_service(Repositories {
        user_skill_repository,
        ..Default::default()
    });

    let result = service.generate_certificate(user_skill_id).await;
    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::UserSkillNotVerified(_)
        ))
    ));
}

#[tokio::test]
async fn test_generate_certificate_fails_when_already_issued() {
    let user_skill = verified_user_skill();
    let user_skill_id = user_skill.id;
    let existing = generic_certificate(user_skill_id);

    let mut user_skill_repository = MockUserSkillRepository::default();
    user_skill_repository
        .expect_get_user_skill()
        .once()
        .returning(move |_, _| Ok(Some(user_skill.clone())));

    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_by_user_skill()
        .once()
        .returning(move |_| Ok(Some(existing.clone())));

    let service = setup_service(Repositories {
        certificate_repository,
        user_skill_repository,
        ..Default::default()
    });

    let result = service.generate_certificate(user_skill_id).await;
    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::CertificateAlreadyIssued(_)
        ))
    ));
}

#[tokio::test]
async fn test_generate_certificate_lost_race_maps_to_already_issued() {
    let user_skill = verified_user_skill();
    let user_skill_id = user_skill.id;

    let mut user_skill_repository = MockUserSkillRepository::default();
    user_skill_repository
        .expect_get_user_skill()
        .once()
        .returning(move |_, _| Ok(Some(user_skill.clone())));

    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_by_user_skill()
        .once()
        .returning(|_| Ok(None));
    certificate_repository
        .expect_create_certificate()
        .once()
        .returning(|_| Err(DataLayerError::AlreadyExists));

    let service = setup_service(Repositories {
        certificate_repository,
        user_skill_repository,
        ..Default::default()
    });

    let result = service.generate_certificate(user_skill_id).await;
    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::CertificateAlreadyIssued(_)
        ))
    ));
}

#[tokio::test]
async fn test_revoke_certificate_clears_active_flag() {
    let certificate = generic_certificate(Uuid::new_v4().into());
    let certificate_id = certificate.id;

    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_certificate()
        .once()
        .returning(move |_, _| Ok(Some(certificate.clone())));
    certificate_repository
        .expect_update_certificate()
        .once()
        .withf(|_, request| request.is_active == Some(false))
        .returning(|_, _| Ok(()));

    let service = setup_service(Repositories {
        certificate_repository,
        ..Default::default()
    });

    service.revoke_certificate(certificate_id).await.unwrap();
}

#[tokio::test]
async fn test_revoke_certificate_fails_for_unknown_certificate() {
    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_certificate()
        .once()
        .returning(|_, _| Ok(None));

    let service = setup_service(Repositories {
        certificate_repository,
        ..Default::default()
    });

    let result = service.revoke_certificate(Uuid::new_v4().into()).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(
            EntityNotFoundError::Certificate(_)
        ))
    ));
}

#[tokio::test]
async fn test_verify_certificate_unknown_number_is_empty_result() {
    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_active_by_number()
        .once()
        .returning(|_, _| Ok(None));

    let service = setup_service(Repositories {
        certificate_repository,
        ..Default::default()
    });

    let result = service.verify_certificate("SKB-0-000000").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_verify_certificate_resolves_holder_and_skill() {
    let user = generic_user();
    let skill = generic_skill();
    let mut user_skill = generic_user_skill(user.id);
    user_skill.is_verified = true;
    user_skill.user = Some(user.clone());
    user_skill.skill = Some(skill.clone());

    let mut certificate = generic_certificate(user_skill.id);
    certificate.user_skill = Some(user_skill);
    let number = certificate.certificate_number.clone();

    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_active_by_number()
        .once()
        .returning(move |_, _| Ok(Some(certificate.clone())));

    let service = setup_service(Repositories {
        certificate_repository,
        ..Default::default()
    });

    let result = service.verify_certificate(&number).await.unwrap().unwrap();
    assert_eq!(number, result.certificate_number);
    assert_eq!(Some(user.full_name), result.holder_name);
    assert_eq!(Some(skill.name), result.skill_name);
}

#[tokio::test]
async fn test_get_user_certificates_fails_for_unknown_user() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .once()
        .returning(|_, _| Ok(None));

    let service = setup_service(Repositories {
        user_repository,
        ..Default::default()
    });

    let result = service.get_user_certificates(Uuid::new_v4().into()).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::User(_)))
    ));
}

#[tokio::test]
async fn test_prepare_download_fails_for_revoked_certificate() {
    let mut certificate = generic_certificate(Uuid::new_v4().into());
    certificate.is_active = false;
    let certificate_id = certificate.id;

    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_certificate()
        .once()
        .returning(move |_, _| Ok(Some(certificate.clone())));

    let service = setup_service(Repositories {
        certificate_repository,
        ..Default::default()
    });

    let result = service.prepare_download(certificate_id).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(
            EntityNotFoundError::Certificate(_)
        ))
    ));
}

#[tokio::test]
async fn test_prepare_download_derives_file_name() {
    let user = generic_user();
    let skill = generic_skill();
    let mut user_skill = generic_user_skill(user.id);
    user_skill.user = Some(user);
    user_skill.skill = Some(skill);

    let mut certificate = generic_certificate(user_skill.id);
    certificate.user_skill = Some(user_skill);
    let certificate_id = certificate.id;

    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_certificate()
        .once()
        .returning(move |_, _| Ok(Some(certificate.clone())));

    let service = setup_service(Repositories {
        certificate_repository,
        ..Default::default()
    });

    let result = service.prepare_download(certificate_id).await.unwrap();
    assert_eq!("Jane_Worker_Welding_certificate.pdf", result.file_name);
}

#[test]
fn test_download_file_name_replaces_non_alphanumerics() {
    assert_eq!(
        "Jane_Worker_Welding_certificate.pdf",
        download_file_name("Jane Worker", "Welding")
    );
    assert_eq!(
        "J_rgen_O_Brien_MIG_TIG_certificate.pdf",
        download_file_name("Jürgen O'Brien", "MIG/TIG")
    );
}
