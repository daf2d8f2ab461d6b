use std::sync::Arc;

use uuid::Uuid;

use super::UserService;
use super::dto::{CreateUserRequestDTO, UpdateUserProfileRequestDTO};
use crate::repository::error::DataLayerError;
use crate::repository::user_repository::MockUserRepository;
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};
use crate::service::test_utilities::generic_user;

fn setup_service(user_repository: MockUserRepository) -> UserService {
    UserService::new(Arc::new(user_repository))
}

fn registration() -> CreateUserRequestDTO {
    CreateUserRequestDTO {
        full_name: "Jane Worker".to_string(),
        email: "jane.worker@example.com".to_string(),
        phone: None,
        password_hash: "$argon2id$dummy".to_string(),
    }
}

#[tokio::test]
async fn test_register_user_success() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_create_user()
        .once()
        .withf(|user| !user.is_verified && user.rating.is_none())
        .returning(|user| Ok(user.id));

    let service = setup_service(user_repository);

    let result = service.register_user(registration()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_register_user_duplicate_email() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_create_user()
        .once()
        .returning(|_| Err(DataLayerError::AlreadyExists));

    let service = setup_service(user_repository);

    let result = service.register_user(registration()).await;
    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::EmailAlreadyRegistered
        ))
    ));
}

#[tokio::test]
async fn test_register_user_invalid_email() {
    let service = setup_service(MockUserRepository::default());

    let mut request = registration();
    request.email = "not-an-email".to_string();

    let result = service.register_user(request).await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::InvalidEmail(_)))
    ));
}

#[tokio::test]
async fn test_update_profile_rejects_out_of_range_rating() {
    let service = setup_service(MockUserRepository::default());

    let result = service
        .update_profile(
            Uuid::new_v4().into(),
            UpdateUserProfileRequestDTO {
                rating: Some(5.5),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(
            ValidationError::RatingOutOfRange(_)
        ))
    ));
}

#[tokio::test]
async fn test_update_profile_success() {
    let user = generic_user();
    let user_id = user.id;

    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .once()
        .returning(move |_, _| Ok(Some(user.clone())));
    user_repository
        .expect_update_user()
        .once()
        .withf(|_, request| request.rating == Some(4.0) && request.is_verified.is_none())
        .returning(|_, _| Ok(()));

    let service = setup_service(user_repository);

    let result = service
        .update_profile(
            user_id,
            UpdateUserProfileRequestDTO {
                rating: Some(4.0),
                location: Some("Tartu".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_get_user_missing() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .once()
        .returning(|_, _| Ok(None));

    let service = setup_service(user_repository);

    let result = service.get_user(Uuid::new_v4().into()).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::User(_)))
    ));
}
