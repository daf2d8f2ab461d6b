//! Id newtypes shared between the core, the data provider and the migrations.

mod certificate_id;
mod job_id;
mod macros;
mod proof_id;
mod skill_id;
mod test_id;
mod user_id;

pub use certificate_id::CertificateId;
pub use job_id::{ApplicationId, JobId};
pub use proof_id::ProofId;
pub use skill_id::{SkillId, UserSkillId};
pub use test_id::{AttemptId, QuestionId, TestId};
pub use user_id::UserId;
