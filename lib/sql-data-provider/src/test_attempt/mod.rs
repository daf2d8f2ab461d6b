use std::sync::Arc;

use sea_orm::DatabaseConnection;
use skillbase_core::repository::mini_test_repository::MiniTestRepository;
use skillbase_core::repository::user_skill_repository::UserSkillRepository;

mod mapper;
pub mod repository;


pub(crate) struct TestAttemptProvider {
    pub db: DatabaseConnection,
    pub user_skill_repository: Arc<dyn UserSkillRepository>,
    pub mini_test_repository: Arc<dyn MiniTestRepository>,
}
