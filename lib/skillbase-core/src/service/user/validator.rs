use crate::service::error::ValidationError;

pub(super) fn validate_email(email: &str) -> Result<(), ValidationError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

pub(super) fn validate_rating(rating: f32) -> Result<(), ValidationError> {
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::RatingOutOfRange(rating))
    }
}
