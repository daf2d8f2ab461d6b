use shared_types::UserId;
use time::OffsetDateTime;

use super::UserService;
use super::dto::{CreateUserRequestDTO, UpdateUserProfileRequestDTO, UserResponseDTO};
use super::mapper::{create_response_dto, update_request, user_from_request};
use super::validator::{validate_email, validate_rating};
use crate::model::user::UserRelations;
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl UserService {
    /// Registers a new account. The email is unique across the store.
    pub async fn register_user(
        &self,
        request: CreateUserRequestDTO,
    ) -> Result<UserId, ServiceError> {
        validate_email(&request.email)?;

        let user = user_from_request(request, OffsetDateTime::now_utc());
        let result = self.user_repository.create_user(user).await;

        match result {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => {
                Err(BusinessLogicError::EmailAlreadyRegistered.into())
            }
            Err(error) => Err(error.into()),
        }
    }

    pub async fn get_user(&self, user_id: UserId) -> Result<UserResponseDTO, ServiceError> {
        let user = self
            .user_repository
            .get_user(user_id, &UserRelations::default())
            .await?
            .ok_or(EntityNotFoundError::User(user_id))?;

        Ok(create_response_dto(user))
    }

    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateUserProfileRequestDTO,
    ) -> Result<(), ServiceError> {
        if let Some(rating) = request.rating {
            validate_rating(rating)?;
        }

        self.user_repository
            .get_user(user_id, &UserRelations::default())
            .await?
            .ok_or(EntityNotFoundError::User(user_id))?;

        self.user_repository
            .update_user(&user_id, update_request(request))
            .await?;

        Ok(())
    }
}
