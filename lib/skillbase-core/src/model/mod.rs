pub mod certificate;
pub mod job;
pub mod mini_test;
pub mod skill;
pub mod skill_proof;
pub mod test_attempt;
pub mod user;
pub mod user_skill;
