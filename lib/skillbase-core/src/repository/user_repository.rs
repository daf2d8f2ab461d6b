use async_trait::async_trait;
use shared_types::UserId;

use crate::model::user::{UpdateUserRequest, User, UserRelations};
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError>;

    async fn get_user(
        &self,
        id: UserId,
        relations: &UserRelations,
    ) -> Result<Option<User>, DataLayerError>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DataLayerError>;

    async fn update_user(
        &self,
        id: &UserId,
        request: UpdateUserRequest,
    ) -> Result<(), DataLayerError>;
}
