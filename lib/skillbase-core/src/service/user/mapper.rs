use time::OffsetDateTime;

use super::dto::{CreateUserRequestDTO, UpdateUserProfileRequestDTO, UserResponseDTO};
use crate::model::user::{UpdateUserRequest, User};

pub(super) fn user_from_request(request: CreateUserRequestDTO, now: OffsetDateTime) -> User {
    User {
        id: uuid::Uuid::new_v4().into(),
        full_name: request.full_name,
        email: request.email,
        phone: request.phone,
        password_hash: request.password_hash,
        photo_url: None,
        location: None,
        bio: None,
        rating: None,
        is_verified: false,
        created_date: now,
        last_modified: now,
    }
}

pub(super) fn create_response_dto(user: User) -> UserResponseDTO {
    UserResponseDTO {
        id: user.id,
        full_name: user.full_name,
        email: user.email,
        phone: user.phone,
        photo_url: user.photo_url,
        location: user.location,
        bio: user.bio,
        rating: user.rating,
        is_verified: user.is_verified,
        created_date: user.created_date,
    }
}

pub(super) fn update_request(request: UpdateUserProfileRequestDTO) -> UpdateUserRequest {
    UpdateUserRequest {
        full_name: request.full_name,
        phone: request.phone,
        photo_url: request.photo_url,
        location: request.location,
        bio: request.bio,
        rating: request.rating,
        is_verified: None,
    }
}
