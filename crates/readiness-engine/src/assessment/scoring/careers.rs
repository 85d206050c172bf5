use serde::Serialize;

use super::composite::{clamp_score, CompositeResult, ScoreSeed};

struct CareerRole {
    role: &'static str,
    description: &'static str,
    seed: ScoreSeed,
    offset: i16,
}

const CAREER_ROLES: [CareerRole; 3] = [
    CareerRole {
        role: "Automotive Designer",
        description: "Design complete vehicle systems with focus on aesthetics and functionality",
        seed: ScoreSeed::Overall,
        offset: 10,
    },
    CareerRole {
        role: "CAD Engineer",
        description: "Create detailed 3D models and technical drawings",
        seed: ScoreSeed::Technical,
        offset: 5,
    },
    CareerRole {
        role: "R&D Engineer",
        description: "Innovate new technologies and propulsion systems",
        seed: ScoreSeed::Wiscar,
        offset: 8,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerMatch {
    pub role: &'static str,
    #[serde(rename = "match")]
    pub match_score: u8,
    pub description: &'static str,
}

pub fn estimate_matches(scores: &CompositeResult) -> Vec<CareerMatch> {
    CAREER_ROLES
        .iter()
        .map(|role| CareerMatch {
            role: role.role,
            match_score: clamp_score(i16::from(scores.seed(role.seed)) + role.offset),
            description: role.description,
        })
        .collect()
}
