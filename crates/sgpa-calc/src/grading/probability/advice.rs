use super::ladder::ProbabilityLadder;
use serde::Serialize;

/// Banded reading of a mean effort score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortLevel {
    Minimal,
    Light,
    Moderate,
    High,
    VeryHigh,
    Maximum,
}

impl EffortLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 20.0 {
            Self::Minimal
        } else if score < 40.0 {
            Self::Light
        } else if score < 60.0 {
            Self::Moderate
        } else if score < 75.0 {
            Self::High
        } else if score < 90.0 {
            Self::VeryHigh
        } else {
            Self::Maximum
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal effort - Already well positioned",
            Self::Light => "Light study - Regular revision should suffice",
            Self::Moderate => "Moderate effort - Consistent study needed",
            Self::High => "High effort - Intensive study required",
            Self::VeryHigh => "Very high effort - Extensive preparation needed",
            Self::Maximum => "Maximum effort - Requires exceptional preparation",
        }
    }
}

/// How hard the SEE still needed for a course looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Impossible,
    #[serde(rename = "Very Hard")]
    VeryHard,
    Hard,
    Moderate,
    Easy,
    #[serde(rename = "Very Easy")]
    VeryEasy,
}

impl Difficulty {
    /// Bands are exclusive at the lower edge: exactly 100% is still "Very Hard".
    pub fn from_percent(see_percent: f64) -> Self {
        if see_percent > 100.0 {
            Self::Impossible
        } else if see_percent > 90.0 {
            Self::VeryHard
        } else if see_percent > 75.0 {
            Self::Hard
        } else if see_percent > 60.0 {
            Self::Moderate
        } else if see_percent > 45.0 {
            Self::Easy
        } else {
            Self::VeryEasy
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Impossible => "Impossible",
            Self::VeryHard => "Very Hard",
            Self::Hard => "Hard",
            Self::Moderate => "Moderate",
            Self::Easy => "Easy",
            Self::VeryEasy => "Very Easy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Success,
    Info,
    Warning,
}

/// Headline advice for the most probable target on the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub message: String,
    pub kind: RecommendationKind,
}

pub fn recommend(ladder: Option<&ProbabilityLadder>) -> Recommendation {
    let Some(ladder) = ladder else {
        return Recommendation {
            title: "Enter CIE Marks First".to_string(),
            message: "Start entering your CIE marks to see SGPA predictions and recommendations."
                .to_string(),
            kind: RecommendationKind::Info,
        };
    };

    let best = &ladder.highest_probable;
    let label = best.target.label;
    let effort = best.result.effort_description;
    let probability = best.result.probability;
    let value = best.target.value;

    if value >= 9.5 && probability >= 70 {
        Recommendation {
            title: "Excellent Position!".to_string(),
            message: format!(
                "You're on track for an outstanding {label}! Keep up the great work and maintain your study routine."
            ),
            kind: RecommendationKind::Success,
        }
    } else if value >= 9.0 && probability >= 60 {
        Recommendation {
            title: "Great Performance!".to_string(),
            message: format!(
                "You have a good chance at {label}. {effort} to maintain this trajectory."
            ),
            kind: RecommendationKind::Success,
        }
    } else if value >= 8.0 && probability >= 50 {
        Recommendation {
            title: "Good Progress".to_string(),
            message: format!("{label} is achievable. {effort} for better results."),
            kind: RecommendationKind::Info,
        }
    } else {
        Recommendation {
            title: "Focus Required".to_string(),
            message: format!(
                "Reaching {label} will require {effort}. Stay committed and you can do it!"
            ),
            kind: RecommendationKind::Warning,
        }
    }
}
