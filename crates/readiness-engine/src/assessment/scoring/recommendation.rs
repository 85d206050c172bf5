use serde::Serialize;

pub const READY_THRESHOLD: u8 = 75;
pub const DEVELOP_THRESHOLD: u8 = 50;

/// Recommendation category selected by overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    Ready,
    Develop,
    Explore,
}

impl RecommendationTier {
    pub const fn for_score(overall: u8) -> Self {
        if overall >= READY_THRESHOLD {
            RecommendationTier::Ready
        } else if overall >= DEVELOP_THRESHOLD {
            RecommendationTier::Develop
        } else {
            RecommendationTier::Explore
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RecommendationTier::Ready => "ready",
            RecommendationTier::Develop => "develop",
            RecommendationTier::Explore => "explore",
        }
    }

    pub fn recommendation(self) -> Recommendation {
        match self {
            RecommendationTier::Ready => Recommendation {
                tier: self,
                title: "Ready to Start",
                description: "Excellent alignment across all dimensions. You're ready to begin your journey in automotive design engineering.",
                next_steps: vec![
                    "Enroll in Automotive Fundamentals course",
                    "Learn CAD software (SolidWorks/CATIA)",
                    "Join Formula SAE or similar projects",
                    "Build a portfolio of design projects",
                ],
            },
            RecommendationTier::Develop => Recommendation {
                tier: self,
                title: "Needs Development",
                description: "Strong potential with some areas requiring development. Focus on building foundational skills.",
                next_steps: vec![
                    "Take foundation courses in math and physics",
                    "Complete basic CAD training modules",
                    "Gain exposure to automotive industry",
                    "Retake assessment after 6 months",
                ],
            },
            RecommendationTier::Explore => Recommendation {
                tier: self,
                title: "Explore Alternatives",
                description: "Consider exploring related fields or reassessing your interests and goals.",
                next_steps: vec![
                    "Explore Industrial Design programs",
                    "Consider general Mechanical Engineering",
                    "Look into Product Development roles",
                    "Speak with career counselors",
                ],
            },
        }
    }
}

/// Static guidance attached to a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub tier: RecommendationTier,
    pub title: &'static str,
    pub description: &'static str,
    pub next_steps: Vec<&'static str>,
}

pub fn select_recommendation(overall: u8) -> Recommendation {
    RecommendationTier::for_score(overall).recommendation()
}
