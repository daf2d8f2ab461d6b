//! SQL implementation of the core storage traits, backed by sea-orm.

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
use skillbase_core::repository::DataRepository;
use skillbase_core::repository::certificate_repository::CertificateRepository;
use skillbase_core::repository::job_repository::JobRepository;
use skillbase_core::repository::mini_test_repository::MiniTestRepository;
use skillbase_core::repository::skill_proof_repository::SkillProofRepository;
use skillbase_core::repository::skill_repository::SkillRepository;
use skillbase_core::repository::test_attempt_repository::TestAttemptRepository;
use skillbase_core::repository::user_repository::UserRepository;
use skillbase_core::repository::user_skill_repository::UserSkillRepository;

use crate::certificate::CertificateProvider;
use crate::job::JobProvider;
use crate::mini_test::MiniTestProvider;
use crate::skill::SkillProvider;
use crate::skill_proof::SkillProofProvider;
use crate::test_attempt::TestAttemptProvider;
use crate::user::UserProvider;
use crate::user_skill::UserSkillProvider;

pub mod certificate;
pub mod job;
pub mod mini_test;
pub mod skill;
pub mod skill_proof;
pub mod test_attempt;
pub mod user;
pub mod user_skill;

mod entity;
mod mapper;

#[cfg(test)]
pub(crate) mod test_utilities;

pub async fn db_conn(
    database_url: impl Into<ConnectOptions>,
    with_migration: bool,
) -> Result<DatabaseConnection, DbErr> {
    let db = sea_orm::Database::connect(database_url).await?;
    if with_migration {
        tracing::debug!("running database migrations");
        Migrator::up(&db, None).await?;
    }
    Ok(db)
}

#[derive(Clone)]
pub struct DataLayer {
    user_repository: Arc<dyn UserRepository>,
    skill_repository: Arc<dyn SkillRepository>,
    user_skill_repository: Arc<dyn UserSkillRepository>,
    skill_proof_repository: Arc<dyn SkillProofRepository>,
    mini_test_repository: Arc<dyn MiniTestRepository>,
    test_attempt_repository: Arc<dyn TestAttemptRepository>,
    certificate_repository: Arc<dyn CertificateRepository>,
    job_repository: Arc<dyn JobRepository>,
}

impl DataLayer {
    pub fn build(db: DatabaseConnection) -> Self {
        let user_repository = Arc::new(UserProvider { db: db.clone() });
        let skill_repository = Arc::new(SkillProvider { db: db.clone() });
        let user_skill_repository = Arc::new(UserSkillProvider { db: db.clone() });
        let skill_proof_repository = Arc::new(SkillProofProvider {
            db: db.clone(),
            user_skill_repository: user_skill_repository.clone(),
        });
        let mini_test_repository = Arc::new(MiniTestProvider { db: db.clone() });
        let test_attempt_repository = Arc::new(TestAttemptProvider {
            db: db.clone(),
            user_skill_repository: user_skill_repository.clone(),
            mini_test_repository: mini_test_repository.clone(),
        });
        let certificate_repository = Arc::new(CertificateProvider {
            db: db.clone(),
            user_skill_repository: user_skill_repository.clone(),
        });
        let job_repository = Arc::new(JobProvider { db });

        Self {
            user_repository,
            skill_repository,
            user_skill_repository,
            skill_proof_repository,
            mini_test_repository,
            test_attempt_repository,
            certificate_repository,
            job_repository,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
    fn get_skill_repository(&self) -> Arc<dyn SkillRepository> {
        self.skill_repository.clone()
    }
    fn get_user_skill_repository(&self) -> Arc<dyn UserSkillRepository> {
        self.user_skill_repository.clone()
    }
    fn get_skill_proof_repository(&self) -> Arc<dyn SkillProofRepository> {
        self.skill_proof_repository.clone()
    }
    fn get_mini_test_repository(&self) -> Arc<dyn MiniTestRepository> {
        self.mini_test_repository.clone()
    }
    fn get_test_attempt_repository(&self) -> Arc<dyn TestAttemptRepository> {
        self.test_attempt_repository.clone()
    }
    fn get_certificate_repository(&self) -> Arc<dyn CertificateRepository> {
        self.certificate_repository.clone()
    }
    fn get_job_repository(&self) -> Arc<dyn JobRepository> {
        self.job_repository.clone()
    }
}
