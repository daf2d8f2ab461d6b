use rand::Rng;

use super::ProofAnalyzer;
use crate::model::skill_proof::SkillProof;

/// Stand-in for a real ML verifier: draws a uniform score and ignores the
/// media entirely.
#[derive(Default)]
pub struct RandomAnalyzer;

impl ProofAnalyzer for RandomAnalyzer {
    fn analyze(&self, _proof: &SkillProof) -> f32 {
        rand::thread_rng().gen_range(0.0..100.0)
    }
}
