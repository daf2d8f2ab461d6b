use std::sync::Arc;

use crate::repository::mini_test_repository::MiniTestRepository;
use crate::repository::test_attempt_repository::TestAttemptRepository;
use crate::repository::user_skill_repository::UserSkillRepository;

pub mod dto;
pub(crate) mod mapper;
pub mod service;


#[derive(Clone)]
pub struct MiniTestService {
    mini_test_repository: Arc<dyn MiniTestRepository>,
    test_attempt_repository: Arc<dyn TestAttemptRepository>,
    user_skill_repository: Arc<dyn UserSkillRepository>,
}

impl MiniTestService {
    pub fn new(
        mini_test_repository: Arc<dyn MiniTestRepository>,
        test_attempt_repository: Arc<dyn TestAttemptRepository>,
        user_skill_repository: Arc<dyn UserSkillRepository>,
    ) -> Self {
        Self {
            mini_test_repository,
            test_attempt_repository,
            user_skill_repository,
        }
    }
}
