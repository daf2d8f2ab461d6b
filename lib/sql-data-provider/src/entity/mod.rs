pub mod certificate;
pub mod job_application;
pub mod job_listing;
pub mod skill;
pub mod skill_proof;
pub mod test_attempt;
pub mod test_question;
pub mod user;
pub mod user_skill;
