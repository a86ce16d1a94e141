//! Inverse of the score combiner: SEE marks needed for each grade given known CIE.

use super::bands::{passing_bands, Grade};
use super::domain::IntegratedSplit;
use super::policy::MIN_SEE_PERCENT;
use super::scoring::{weighted, COMPONENT_WEIGHT};
use serde::{Serialize, Serializer};

/// Why a requirement was pinned to one end of the achievable SEE range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeeNote {
    /// The band is reached even with the minimum passing SEE.
    AlreadyAchievable,
    /// Even full SEE marks fall short.
    NotAchievable,
}

impl SeeNote {
    pub const fn message(self) -> &'static str {
        match self {
            SeeNote::AlreadyAchievable => "Already achievable with minimum SEE",
            SeeNote::NotAchievable => "Not achievable",
        }
    }
}

impl Serialize for SeeNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Requirement for one grade on a single-SEE course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequiredSee {
    pub grade: Grade,
    pub required: f64,
    pub achievable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<SeeNote>,
}

/// Requirement for one grade on an integrated course, solved per part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedRequiredSee {
    pub grade: Grade,
    pub required: f64,
    pub required_theory: f64,
    pub required_lab: f64,
    pub achievable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<SeeNote>,
}

/// Required-SEE table for whichever shape the course has.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequiredSeeTable {
    Simple(Vec<RequiredSee>),
    Integrated(Vec<IntegratedRequiredSee>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PartRequirement {
    required: f64,
    achievable: bool,
    note: Option<SeeNote>,
}

/// SEE needed per passing grade, best grade first.
///
/// Returns `None` when no CIE has been entered yet or either maximum is zero. Displayed
/// requirements live in `[35% of see_max, see_max]`; the normal case is rounded up.
pub fn required_see(cie: f64, cie_max: f64, see_max: f64) -> Option<Vec<RequiredSee>> {
    if cie <= 0.0 || cie_max <= 0.0 || see_max <= 0.0 {
        return None;
    }

    let weighted_cie = weighted(cie, cie_max);
    let table = passing_bands()
        .map(|band| {
            let part = solve_part(f64::from(band.min), weighted_cie, see_max);
            RequiredSee {
                grade: band.grade,
                required: part.required,
                achievable: part.achievable,
                note: part.note,
            }
        })
        .collect();

    Some(table)
}

/// Integrated variant: theory and lab are inverted independently against their own
/// breakdown maxima, so meeting both parts always meets the band overall.
///
/// Reachability is judged on the combined course, since a surplus in one part makes up
/// for a shortfall in the other.
pub fn required_see_integrated(
    cie_theory: f64,
    cie_lab: f64,
    split: &IntegratedSplit,
) -> Option<Vec<IntegratedRequiredSee>> {
    if cie_theory + cie_lab <= 0.0 || split.see.theory <= 0.0 || split.see.lab <= 0.0 {
        return None;
    }

    let weighted_theory = weighted(cie_theory, split.cie.theory);
    let weighted_lab = weighted(cie_lab, split.cie.lab);
    let weighted_total = weighted(cie_theory + cie_lab, split.cie.total());
    let see_max = split.see.total();
    let min_see = see_max * MIN_SEE_PERCENT / 100.0;

    let table = passing_bands()
        .map(|band| {
            let band_min = f64::from(band.min);
            let theory = solve_part(band_min, weighted_theory, split.see.theory);
            let lab = solve_part(band_min, weighted_lab, split.see.lab);

            let combined = (band_min - weighted_total) * see_max / COMPONENT_WEIGHT;
            let achievable = combined <= see_max;
            let note = if !achievable {
                Some(SeeNote::NotAchievable)
            } else if combined < min_see {
                Some(SeeNote::AlreadyAchievable)
            } else {
                None
            };

            IntegratedRequiredSee {
                grade: band.grade,
                required: theory.required + lab.required,
                required_theory: theory.required,
                required_lab: lab.required,
                achievable,
                note,
            }
        })
        .collect();

    Some(table)
}

fn solve_part(band_min: f64, weighted_cie: f64, see_max: f64) -> PartRequirement {
    let required = (band_min - weighted_cie) * see_max / COMPONENT_WEIGHT;
    let min_see = see_max * MIN_SEE_PERCENT / 100.0;

    if required < min_see {
        PartRequirement {
            required: min_see.ceil(),
            achievable: true,
            note: Some(SeeNote::AlreadyAchievable),
        }
    } else if required > see_max {
        PartRequirement {
            required: see_max,
            achievable: false,
            note: Some(SeeNote::NotAchievable),
        }
    } else {
        PartRequirement {
            required: required.ceil().min(see_max),
            achievable: true,
            note: None,
        }
    }
}
