pub mod error;

pub mod certificate;
pub mod marketplace;
pub mod mini_test;
pub mod proof;
pub mod skill;
pub mod user;

#[cfg(test)]
pub(crate) mod test_utilities;
