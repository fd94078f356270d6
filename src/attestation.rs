use serde::{Deserialize, Serialize};

/// One named skill with its assessed score and justifying evidence string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub skill: String,
    pub score: u8,
    pub evidence: String,
}

/// The generated summary-plus-scored-skills result of analyzing evidence.
/// Produced once per wizard run and immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    pub summary: String,
    pub skills: Vec<Skill>,
}

/// Display tier for a skill score. Thresholds are inclusive: 85 and up is
/// High, 70 and up is Medium, everything below is Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn of(score: u8) -> Self {
        if score >= 85 {
            Self::High
        } else if score >= 70 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
