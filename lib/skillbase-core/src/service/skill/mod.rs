use std::sync::Arc;

use crate::repository::skill_repository::SkillRepository;
use crate::repository::user_repository::UserRepository;
use crate::repository::user_skill_repository::UserSkillRepository;

pub mod dto;
pub(crate) mod mapper;
pub mod service;


#[derive(Clone)]
pub struct SkillService {
    skill_repository: Arc<dyn SkillRepository>,
    user_skill_repository: Arc<dyn UserSkillRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl SkillService {
    pub fn new(
        skill_repository: Arc<dyn SkillRepository>,
        user_skill_repository: Arc<dyn UserSkillRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            skill_repository,
            user_skill_repository,
            user_repository,
        }
    }
}
