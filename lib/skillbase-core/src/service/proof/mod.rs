use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::verification::ProofAnalyzer;
use crate::repository::skill_proof_repository::SkillProofRepository;
use crate::repository::user_skill_repository::UserSkillRepository;

pub mod dto;
pub(crate) mod mapper;
pub mod service;


#[derive(Clone)]
pub struct ProofService {
    proof_repository: Arc<dyn SkillProofRepository>,
    user_skill_repository: Arc<dyn UserSkillRepository>,
    analyzer: Arc<dyn ProofAnalyzer>,
    config: Arc<CoreConfig>,
}

impl ProofService {
    pub fn new(
        proof_repository: Arc<dyn SkillProofRepository>,
        user_skill_repository: Arc<dyn UserSkillRepository>,
        analyzer: Arc<dyn ProofAnalyzer>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            proof_repository,
            user_skill_repository,
            analyzer,
            config,
        }
    }
}
