use sea_orm::{Set, Unchanged};
use skillbase_core::model::user::{UpdateUserRequest, User};
use time::OffsetDateTime;

use crate::entity::user;

impl From<User> for user::ActiveModel {
    fn from(value: User) -> Self {
        Self {
            id: Set(value.id),
            full_name: Set(value.full_name),
            email: Set(value.email),
            phone: Set(value.phone),
            password_hash: Set(value.password_hash),
            photo_url: Set(value.photo_url),
            location: Set(value.location),
            bio: Set(value.bio),
            rating: Set(value.rating),
            is_verified: Set(value.is_verified),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
        }
    }
}

impl From<UpdateUserRequest> for user::ActiveModel {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            full_name: match value.full_name {
                Some(full_name) => Set(full_name),
                None => Unchanged(Default::default()),
            },
            phone: match value.phone {
                Some(phone) => Set(Some(phone)),
                None => Unchanged(Default::default()),
            },
            photo_url: match value.photo_url {
                Some(photo_url) => Set(Some(photo_url)),
                None => Unchanged(Default::default()),
            },
            location: match value.location {
                Some(location) => Set(Some(location)),
                None => Unchanged(Default::default()),
            },
            bio: match value.bio {
                Some(bio) => Set(Some(bio)),
                None => Unchanged(Default::default()),
            },
            rating: match value.rating {
                Some(rating) => Set(Some(rating)),
                None => Unchanged(Default::default()),
            },
            is_verified: match value.is_verified {
                Some(is_verified) => Set(is_verified),
                None => Unchanged(Default::default()),
            },
            last_modified: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        }
    }
}
