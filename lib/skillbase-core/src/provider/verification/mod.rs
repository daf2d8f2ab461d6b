pub mod random;

use crate::model::skill_proof::SkillProof;

/// Scores an uploaded proof of competence.
///
/// The contract is "produce a confidence score"; the pass/fail decision against
/// the configured threshold stays with the proof service. Injectable so tests
/// can drive both verification outcomes deterministically.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ProofAnalyzer: Send + Sync {
    /// Returns a score in the `0.0..100.0` range.
    fn analyze(&self, proof: &SkillProof) -> f32;
}
