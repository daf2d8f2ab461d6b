//! Core business logic of the skill verification and job marketplace
//! backend. Storage is injected through [`repository::DataRepository`],
//! proof analysis through [`provider::verification::ProofAnalyzer`].

use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::verification::ProofAnalyzer;
use repository::DataRepository;
use service::certificate::CertificateService;
use service::marketplace::MarketplaceService;
use service::mini_test::MiniTestService;
use service::proof::ProofService;
use service::skill::SkillService;
use service::user::UserService;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct SkillbaseCore {
    pub user_service: UserService,
    pub skill_service: SkillService,
    pub proof_service: ProofService,
    pub mini_test_service: MiniTestService,
    pub certificate_service: CertificateService,
    pub marketplace_service: MarketplaceService,
}

impl SkillbaseCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        analyzer: Arc<dyn ProofAnalyzer>,
        config: CoreConfig,
    ) -> Self {
        let config = Arc::new(config);

        Self {
            user_service: UserService::new(data_provider.get_user_repository()),
            skill_service: SkillService::new(
                data_provider.get_skill_repository(),
                data_provider.get_user_skill_repository(),
                data_provider.get_user_repository(),
            ),
            proof_service: ProofService::new(
                data_provider.get_skill_proof_repository(),
                data_provider.get_user_skill_repository(),
                analyzer,
                config.clone(),
            ),
            mini_test_service: MiniTestService::new(
                data_provider.get_mini_test_repository(),
                data_provider.get_test_attempt_repository(),
                data_provider.get_user_skill_repository(),
            ),
            certificate_service: CertificateService::new(
                data_provider.get_certificate_repository(),
                data_provider.get_user_skill_repository(),
                data_provider.get_user_repository(),
                config.clone(),
            ),
            marketplace_service: MarketplaceService::new(
                data_provider.get_job_repository(),
                data_provider.get_user_repository(),
                data_provider.get_skill_repository(),
                data_provider.get_user_skill_repository(),
                data_provider.get_certificate_repository(),
            ),
        }
    }
}
