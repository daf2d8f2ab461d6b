use async_trait::async_trait;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Unchanged};
use shared_types::UserId;
use skillbase_core::model::user::{UpdateUserRequest, User, UserRelations};
use skillbase_core::repository::error::DataLayerError;
use skillbase_core::repository::user_repository::UserRepository;

use super::UserProvider;
use crate::entity::user;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

#[async_trait]
impl UserRepository for UserProvider {
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError> {
        let user = user::Entity::insert(user::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(user.last_insert_id)
    }

    async fn get_user(
        &self,
        id: UserId,
        _relations: &UserRelations,
    ) -> Result<Option<User>, DataLayerError> {
        let user = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(user))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DataLayerError> {
        let user = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(user))
    }

    async fn update_user(
        &self,
        id: &UserId,
        request: UpdateUserRequest,
    ) -> Result<(), DataLayerError> {
        let update_model = user::ActiveModel {
            id: Unchanged(*id),
            ..user::ActiveModel::from(request)
        };

        user::Entity::update(update_model)
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }
}
