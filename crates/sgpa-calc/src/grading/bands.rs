use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grades of the scheme, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "O")]
    O,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "P")]
    P,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::P => "P",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Closed score interval mapped to one grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeBand {
    pub grade: Grade,
    pub points: u8,
    pub min: u8,
    pub max: u8,
}

/// Ordered, non-overlapping bands covering 0–100.
pub const GRADE_BANDS: [GradeBand; 8] = [
    GradeBand { grade: Grade::O, points: 10, min: 90, max: 100 },
    GradeBand { grade: Grade::APlus, points: 9, min: 80, max: 89 },
    GradeBand { grade: Grade::A, points: 8, min: 70, max: 79 },
    GradeBand { grade: Grade::BPlus, points: 7, min: 60, max: 69 },
    GradeBand { grade: Grade::B, points: 6, min: 55, max: 59 },
    GradeBand { grade: Grade::C, points: 5, min: 50, max: 54 },
    GradeBand { grade: Grade::P, points: 4, min: 40, max: 49 },
    GradeBand { grade: Grade::F, points: 0, min: 0, max: 39 },
];

/// Bands a student can aim for, best first (everything but F).
pub fn passing_bands() -> impl Iterator<Item = &'static GradeBand> {
    GRADE_BANDS.iter().filter(|band| band.grade != Grade::F)
}

/// Lowest passing band worth at least `points` grade points.
pub fn lowest_band_with_points(points: u8) -> Option<&'static GradeBand> {
    passing_bands()
        .filter(|band| band.points >= points)
        .min_by_key(|band| band.points)
}

/// Grade and points awarded for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeDetails {
    pub grade: Grade,
    pub points: u8,
}

impl GradeDetails {
    const FAIL: Self = Self {
        grade: Grade::F,
        points: 0,
    };
}

/// Map a final score to a grade. A failed component threshold is an F whatever the score.
pub fn grade_details(final_score: f64, is_pass: bool) -> GradeDetails {
    if !is_pass {
        return GradeDetails::FAIL;
    }

    let score = (final_score + 0.5).floor();
    if let Some(band) = GRADE_BANDS
        .iter()
        .find(|band| score >= f64::from(band.min) && score <= f64::from(band.max))
    {
        return GradeDetails {
            grade: band.grade,
            points: band.points,
        };
    }

    if score > 100.0 {
        return GradeDetails {
            grade: Grade::O,
            points: 10,
        };
    }

    GradeDetails::FAIL
}
