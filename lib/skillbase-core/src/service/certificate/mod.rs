use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::repository::certificate_repository::CertificateRepository;
use crate::repository::user_repository::UserRepository;
use crate::repository::user_skill_repository::UserSkillRepository;

pub mod dto;
pub(crate) mod mapper;
pub mod service;

#[cfg(test)]
mod test;

#[derive(Clone)]
pub struct CertificateService {
    certificate_repository: Arc<dyn CertificateRepository>,
    user_skill_repository: Arc<dyn UserSkillRepository>,
    user_repository: Arc<dyn UserRepository>,
    config: Arc<CoreConfig>,
}

impl CertificateService {
    pub fn new(
        certificate_repository: Arc<dyn CertificateRepository>,
        user_skill_repository: Arc<dyn UserSkillRepository>,
        user_repository: Arc<dyn UserRepository>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            certificate_repository,
            user_skill_repository,
            user_repository,
            config,
        }
    }
}
