use std::sync::Arc;

use crate::repository::user_repository::UserRepository;

pub mod dto;
pub(crate) mod mapper;
pub mod service;
pub(crate) mod validator;

#[cfg(test)]
mod test;

#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}
