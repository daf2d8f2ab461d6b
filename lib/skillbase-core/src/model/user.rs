use shared_types::UserId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Opaque salted hash produced by the credential service.
    pub password_hash: String,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub rating: Option<f32>,
    pub is_verified: bool,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct UserRelations {}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub rating: Option<f32>,
    pub is_verified: Option<bool>,
}
