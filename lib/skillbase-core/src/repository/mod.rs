pub mod error;

pub mod certificate_repository;
pub mod job_repository;
pub mod mini_test_repository;
pub mod skill_proof_repository;
pub mod skill_repository;
pub mod test_attempt_repository;
pub mod user_repository;
pub mod user_skill_repository;

use std::sync::Arc;

use certificate_repository::CertificateRepository;
use job_repository::JobRepository;
use mini_test_repository::MiniTestRepository;
use skill_proof_repository::SkillProofRepository;
use skill_repository::SkillRepository;
use test_attempt_repository::TestAttemptRepository;
use user_repository::UserRepository;
use user_skill_repository::UserSkillRepository;

/// Accessor for all repository implementations of one storage backend.
pub trait DataRepository: Send + Sync {
    fn get_user_repository(&self) -> Arc<dyn UserRepository>;
    fn get_skill_repository(&self) -> Arc<dyn SkillRepository>;
    fn get_user_skill_repository(&self) -> Arc<dyn UserSkillRepository>;
    fn get_skill_proof_repository(&self) -> Arc<dyn SkillProofRepository>;
    fn get_mini_test_repository(&self) -> Arc<dyn MiniTestRepository>;
    fn get_test_attempt_repository(&self) -> Arc<dyn TestAttemptRepository>;
    fn get_certificate_repository(&self) -> Arc<dyn CertificateRepository>;
    fn get_job_repository(&self) -> Arc<dyn JobRepository>;
}
