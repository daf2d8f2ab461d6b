use std::sync::Arc;

use uuid::Uuid;

use super::MarketplaceService;
use super::dto::{
    CreateJobApplicationRequestDTO, CreateJobListingRequestDTO, WorkerSearchQueryDTO,
};
use crate::model::job::JobListing;
use crate::repository::certificate_repository::MockCertificateRepository;
use crate::repository::error::DataLayerError;
use crate::repository::job_repository::MockJobRepository;
use crate::repository::skill_repository::MockSkillRepository;
use crate::repository::user_repository::MockUserRepository;
use crate::repository::user_skill_repository::MockUserSkillRepository;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};
use crate::service::test_utilities::{
    dummy_date, generic_certificate, generic_skill, generic_user, generic_user_skill,
};

#[derive(Default)]
struct Repositories {
    pub job_repository: MockJobRepository,
    pub user_repository: MockUserRepository,
    pub skill_repository: MockSkillRepository,
    pub user_skill_repository: MockUserSkillRepository,
    pub certificate_repository: MockCertificateRepository,
}

fn setup_service(repositories: Repositories) -> MarketplaceService {
    MarketplaceService::new(
        Arc::new(repositories.job_repository),
        Arc::new(repositories.user_repository),
        Arc::new(repositories.skill_repository),
        Arc::new(repositories.user_skill_repository),
        Arc::new(repositories.certificate_repository),
    )
}

fn generic_listing(employer_id: shared_types::UserId) -> JobListing {
    JobListing {
        id: Uuid::new_v4().into(),
        employer_id,
        skill_id: Uuid::new_v4().into(),
        title: "Welder needed".to_string(),
        description: None,
        location: Some("Tallinn".to_string()),
        pay_rate: Some("25 EUR/h".to_string()),
        is_active: true,
        created_date: dummy_date(),
        employer: None,
        skill: None,
    }
}

#[tokio::test]
async fn test_create_listing_success() {
    let user = generic_user();
    let user_id = user.id;
    let skill = generic_skill();
    let skill_id = skill.id;

    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .once()
        .returning(move |_, _| Ok(Some(user.clone())));

    let mut skill_repository = MockSkillRepository::default();
    skill_repository
        .expect_get_skill()
        .once()
        .returning(move |_, _| Ok(Some(skill.clone())));

    let mut job_repository = MockJobRepository::default();
    job_repository
        .expect_create_listing()
        .once()
        .withf(|listing| listing.is_active)
        .returning(|listing| Ok(listing.id));

    let service = setup_service(Repositories {
        job_repository,
        user_repository,
        skill_repository,
        ..Default::default()
    });

    let result = service
        .create_listing(
            user_id,
            CreateJobListingRequestDTO {
                skill_id,
                title: "Welder needed".to_string(),
                description: None,
                location: None,
                pay_rate: None,
            },
        )
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_apply_to_job_duplicate_application() {
    let user = generic_user();
    let user_id = user.id;
    let listing = generic_listing(Uuid::new_v4().into());
    let job_id = listing.id;

    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .once()
        .returning(move |_, _| Ok(Some(user.clone())));

    let mut job_repository = MockJobRepository::default();
    job_repository
        .expect_get_listing()
        .once()
        .returning(move |_, _| Ok(Some(listing.clone())));
    job_repository
        .expect_create_application()
        .once()
        .returning(|_| Err(DataLayerError::AlreadyExists));

    let service = setup_service(Repositories {
        job_repository,
        user_repository,
        ..Default::default()
    });

    let result = service
        .apply_to_job(
            user_id,
            CreateJobApplicationRequestDTO {
                job_id,
                cover_note: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::AlreadyApplied { .. }
        ))
    ));
}

#[tokio::test]
async fn test_apply_to_job_inactive_listing() {
    let user = generic_user();
    let user_id = user.id;
    let mut listing = generic_listing(Uuid::new_v4().into());
    listing.is_active = false;
    let job_id = listing.id;

    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .once()
        .returning(move |_, _| Ok(Some(user.clone())));

    let mut job_repository = MockJobRepository::default();
    job_repository
        .expect_get_listing()
        .once()
        .returning(move |_, _| Ok(Some(listing.clone())));

    let service = setup_service(Repositories {
        job_repository,
        user_repository,
        ..Default::default()
    });

    let result = service
        .apply_to_job(
            user_id,
            CreateJobApplicationRequestDTO {
                job_id,
                cover_note: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(
            EntityNotFoundError::JobListing(_)
        ))
    ));
}

#[tokio::test]
async fn test_search_workers_attaches_certificate_number() {
    let user = generic_user();
    let skill = generic_skill();

    let mut with_certificate = generic_user_skill(user.id);
    with_certificate.is_verified = true;
    with_certificate.verified_at = Some(dummy_date());
    with_certificate.user = Some(user.clone());
    with_certificate.skill = Some(skill.clone());
    let certificate = generic_certificate(with_certificate.id);
    let number = certificate.certificate_number.clone();

    let mut without_certificate = generic_user_skill(Uuid::new_v4().into());
    without_certificate.is_verified = true;
    without_certificate.user = Some(generic_user());
    without_certificate.skill = Some(skill.clone());
    let with_certificate_id = with_certificate.id;

    let mut user_skill_repository = MockUserSkillRepository::default();
    user_skill_repository
        .expect_list_verified()
        .once()
        .returning(move |_, _| Ok(vec![with_certificate.clone(), without_certificate.clone()]));

    let mut certificate_repository = MockCertificateRepository::default();
    certificate_repository
        .expect_get_by_user_skill()
        .times(2)
        .returning(move |user_skill_id| {
            if user_skill_id == with_certificate_id {
                Ok(Some(certificate.clone()))
            } else {
                Ok(None)
            }
        });

    let service = setup_service(Repositories {
        user_skill_repository,
        certificate_repository,
        ..Default::default()
    });

    let result = service
        .search_workers(WorkerSearchQueryDTO::default())
        .await
        .unwrap();
    assert_eq!(2, result.len());
    assert_eq!(Some(number), result[0].certificate_number);
    assert!(result[1].certificate_number.is_none());
}
