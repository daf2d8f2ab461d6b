use std::sync::Arc;

use crate::repository::certificate_repository::CertificateRepository;
use crate::repository::job_repository::JobRepository;
use crate::repository::skill_repository::SkillRepository;
use crate::repository::user_repository::UserRepository;
use crate::repository::user_skill_repository::UserSkillRepository;

pub mod dto;
pub(crate) mod mapper;
pub mod service;

#[cfg(test)]
mod test;

#[derive(Clone)]
pub struct MarketplaceService {
    job_repository: Arc<dyn JobRepository>,
    user_repository: Arc<dyn UserRepository>,
    skill_repository: Arc<dyn SkillRepository>,
    user_skill_repository: Arc<dyn UserSkillRepository>,
    certificate_repository: Arc<dyn CertificateRepository>,
}

impl MarketplaceService {
    pub fn new(
        job_repository: Arc<dyn JobRepository>,
        user_repository: Arc<dyn UserRepository>,
        skill_repository: Arc<dyn SkillRepository>,
        user_skill_repository: Arc<dyn UserSkillRepository>,
        certificate_repository: Arc<dyn CertificateRepository>,
    ) -> Self {
        Self {
            job_repository,
            user_repository,
            skill_repository,
            user_skill_repository,
            certificate_repository,
        }
    }
}
