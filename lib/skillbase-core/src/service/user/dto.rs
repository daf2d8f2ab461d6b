use shared_types::UserId;
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct CreateUserRequestDTO {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Already hashed by the credential service; opaque here.
    pub password_hash: String,
}

/// Public profile view; the credential secret never leaves the service.
#[derive(Clone, Debug)]
pub struct UserResponseDTO {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub rating: Option<f32>,
    pub is_verified: bool,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateUserProfileRequestDTO {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub rating: Option<f32>,
}
