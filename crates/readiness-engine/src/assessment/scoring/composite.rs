use serde::Serialize;

use super::super::catalog::Section;

pub const MAX_SCORE: u8 = 100;

/// Section scores plus the derived overall score.
///
/// Only [`aggregate`] builds one, so `overall` always agrees with the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositeResult {
    psychometric: u8,
    technical: u8,
    wiscar: u8,
    overall: u8,
}

impl CompositeResult {
    pub const fn psychometric(&self) -> u8 {
        self.psychometric
    }

    pub const fn technical(&self) -> u8 {
        self.technical
    }

    pub const fn wiscar(&self) -> u8 {
        self.wiscar
    }

    pub const fn overall(&self) -> u8 {
        self.overall
    }

    pub const fn section(&self, section: Section) -> u8 {
        match section {
            Section::Psychometric => self.psychometric,
            Section::Technical => self.technical,
            Section::WiscarProbe => self.wiscar,
        }
    }

    pub const fn seed(&self, seed: ScoreSeed) -> u8 {
        match seed {
            ScoreSeed::Psychometric => self.psychometric,
            ScoreSeed::Technical => self.technical,
            ScoreSeed::Wiscar => self.wiscar,
            ScoreSeed::Overall => self.overall,
        }
    }
}

/// Which composite score a derived value starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSeed {
    Psychometric,
    Technical,
    Wiscar,
    Overall,
}

pub fn aggregate(psychometric: u8, technical: u8, wiscar: u8) -> CompositeResult {
    let psychometric = psychometric.min(MAX_SCORE);
    let technical = technical.min(MAX_SCORE);
    let wiscar = wiscar.min(MAX_SCORE);

    let sum = u16::from(psychometric) + u16::from(technical) + u16::from(wiscar);
    let overall = ((sum + 1) / 3) as u8;

    CompositeResult {
        psychometric,
        technical,
        wiscar,
        overall,
    }
}

/// WISCAR readiness facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Facet {
    pub const ALL: [Facet; 6] = [
        Facet::Will,
        Facet::Interest,
        Facet::Skill,
        Facet::Cognitive,
        Facet::Ability,
        Facet::RealWorld,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Facet::Will => "Will",
            Facet::Interest => "Interest",
            Facet::Skill => "Skill",
            Facet::Cognitive => "Cognitive",
            Facet::Ability => "Ability",
            Facet::RealWorld => "Real-World",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Facet::Will => "Motivation consistency",
            Facet::Interest => "Career alignment",
            Facet::Skill => "Practical skill exposure",
            Facet::Cognitive => "Problem-solving readiness",
            Facet::Ability => "Metacognitive skills",
            Facet::RealWorld => "Job requirement understanding",
        }
    }

    pub const fn seed(self) -> ScoreSeed {
        match self {
            Facet::Will | Facet::Ability => ScoreSeed::Wiscar,
            Facet::Interest => ScoreSeed::Psychometric,
            Facet::Skill => ScoreSeed::Technical,
            Facet::Cognitive | Facet::RealWorld => ScoreSeed::Overall,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetScore {
    pub facet: Facet,
    pub label: &'static str,
    pub description: &'static str,
    pub score: u8,
}

/// Six facet scores in framework order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetBreakdown {
    facets: Vec<FacetScore>,
}

impl FacetBreakdown {
    pub fn from_composite(scores: &CompositeResult) -> Self {
        Self::build(|facet| i16::from(scores.seed(facet.seed())))
    }

    /// Copy of the breakdown with a caller-supplied offset added to each facet.
    ///
    /// The scoring pipeline never calls this; it exists for presentations that
    /// want illustrative variability and accept non-reproducible output.
    pub fn with_jitter<F>(&self, mut offset: F) -> Self
    where
        F: FnMut(Facet) -> i16,
    {
        Self::build(|facet| i16::from(self.score(facet)).saturating_add(offset(facet)))
    }

    pub fn score(&self, facet: Facet) -> u8 {
        self.facets
            .iter()
            .find(|entry| entry.facet == facet)
            .map(|entry| entry.score)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacetScore> {
        self.facets.iter()
    }

    fn build<F>(mut raw: F) -> Self
    where
        F: FnMut(Facet) -> i16,
    {
        let facets = Facet::ALL
            .into_iter()
            .map(|facet| FacetScore {
                facet,
                label: facet.label(),
                description: facet.description(),
                score: clamp_score(raw(facet)),
            })
            .collect();

        Self { facets }
    }
}

pub(crate) fn clamp_score(raw: i16) -> u8 {
    raw.clamp(0, i16::from(MAX_SCORE)) as u8
}
