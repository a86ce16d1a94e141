//! Heuristic forecast of reaching a target SGPA while SEE marks are still outstanding.
//!
//! The estimate multiplies four factors (share of remaining courses where the target band
//! is reachable, mean CIE quality, difficulty of the SEE still needed, rarity of the
//! target) and then bounds the result with a per-target cap and, for strong students, a
//! floor. All constants live in [`ProbabilityConfig`].

mod advice;
mod config;
mod ladder;

pub use advice::{recommend, Difficulty, EffortLevel, Recommendation, RecommendationKind};
pub use config::{
    EffortStep, FloorBoost, ProbabilityCap, ProbabilityConfig, QualityStep, RarityStep,
};
pub use ladder::{ladder, LadderEntry, ProbabilityLadder, SgpaTarget, TARGETS};

use super::bands::{lowest_band_with_points, Grade, GradeBand, GRADE_BANDS};
use super::engine::CourseEvaluation;
use super::policy::MIN_SEE_PERCENT;
use super::scoring::{percent, round2, weighted, COMPONENT_WEIGHT};
use serde::Serialize;
use tracing::debug;

/// Lowest band a remaining course can be asked for.
const MIN_REQUIRED_POINTS: u8 = 4;
const MAX_GRADE_POINTS: f64 = 10.0;
const EPSILON: f64 = 1e-9;

/// What one remaining course must score in SEE for the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequirement {
    pub code: String,
    pub title: String,
    pub current_cie: f64,
    /// SEE marks to aim for, within `[35% of see_max, see_max]`.
    pub required_see: f64,
    /// Unclamped SEE percentage; above 100 means out of reach.
    pub required_see_percent: f64,
    pub required_grade: Grade,
    pub difficulty: Difficulty,
    pub effort: f64,
    pub achievable: bool,
}

/// Intermediate numbers behind a probability, kept for display and tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityFactors {
    pub achievable_ratio: f64,
    pub cie_quality: f64,
    pub cie_quality_factor: f64,
    pub difficulty_factor: f64,
    pub rarity_factor: f64,
    pub cap: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<f64>,
}

/// Forecast for a single target SGPA.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityResult {
    pub target: f64,
    pub achievable: bool,
    /// 0–100.
    pub probability: u8,
    pub effort_level: EffortLevel,
    pub effort_description: &'static str,
    pub effort_score: f64,
    pub study_hours_estimate: u32,
    /// Grade points each remaining course has to average.
    pub required_grade_points: f64,
    pub required_weighted_points: f64,
    pub course_requirements: Vec<CourseRequirement>,
    pub factors: ProbabilityFactors,
}

/// Estimate the chance of finishing the semester at or above `target`.
///
/// Courses with SEE entered are locked at their current grade points. The points still
/// missing are spread evenly over the credits of the courses without SEE, which gives
/// the band every remaining course has to reach.
pub fn estimate(
    courses: &[CourseEvaluation],
    target: f64,
    config: &ProbabilityConfig,
) -> ProbabilityResult {
    let graded: Vec<&CourseEvaluation> = courses
        .iter()
        .filter(|course| course.course.credits > 0)
        .collect();
    let total_credits: u32 = graded.iter().map(|course| course.course.credits).sum();
    let required_weighted_points = target * f64::from(total_credits);

    let (locked, remaining): (Vec<&CourseEvaluation>, Vec<&CourseEvaluation>) =
        graded.into_iter().partition(|course| course.see_entered);

    let locked_points: f64 = locked
        .iter()
        .filter(|course| course.result.is_pass)
        .map(|course| f64::from(course.result.points) * f64::from(course.course.credits))
        .sum();
    let remaining_credits: u32 = remaining.iter().map(|course| course.course.credits).sum();

    if total_credits == 0 {
        return settled(target, false, 0.0, required_weighted_points, config);
    }

    if remaining.is_empty() {
        let current = round2(locked_points / f64::from(total_credits));
        let reached = current + EPSILON >= target;
        return settled(target, reached, current, required_weighted_points, config);
    }

    let needed = (required_weighted_points - locked_points) / f64::from(remaining_credits);
    let band = required_band(needed);

    let requirements: Vec<CourseRequirement> = remaining
        .iter()
        .map(|course| requirement_for(course, band, config))
        .collect();

    let reachable = needed <= MAX_GRADE_POINTS + EPSILON;
    let achievable_count = requirements.iter().filter(|req| req.achievable).count();
    let course_count = requirements.len() as f64;
    let achievable_ratio = if reachable {
        achievable_count as f64 / course_count
    } else {
        0.0
    };
    let achievable = reachable && achievable_count == requirements.len();

    let mean_effort = requirements.iter().map(|req| req.effort).sum::<f64>() / course_count;
    let cie_quality = remaining
        .iter()
        .map(|course| percent(course.cie.total(), course.course.cie_max))
        .sum::<f64>()
        / course_count;

    let cie_quality_factor = config.cie_quality_factor(cie_quality);
    let difficulty_factor = config.difficulty_factor(mean_effort);
    let rarity_factor = config.rarity_factor(target, cie_quality);
    let cap = config.cap_for(target, cie_quality);
    let floor = if achievable {
        config.floor_for(target, cie_quality)
    } else {
        None
    };

    let mut probability =
        achievable_ratio * cie_quality_factor * difficulty_factor * rarity_factor * 100.0;
    if let Some(floor) = floor {
        probability = probability.max(floor);
    }
    probability = probability.min(cap).clamp(0.0, 100.0);

    let effort_level = EffortLevel::from_score(mean_effort);

    debug!(
        target,
        needed_points = needed,
        achievable,
        probability,
        remaining = requirements.len(),
        "target forecast computed"
    );

    ProbabilityResult {
        target,
        achievable,
        probability: probability.round() as u8,
        effort_level,
        effort_description: effort_level.description(),
        effort_score: round2(mean_effort),
        study_hours_estimate: config.study_hours(mean_effort, requirements.len()),
        required_grade_points: round2(needed),
        required_weighted_points: round2(required_weighted_points),
        course_requirements: requirements,
        factors: ProbabilityFactors {
            achievable_ratio,
            cie_quality: round2(cie_quality),
            cie_quality_factor,
            difficulty_factor,
            rarity_factor,
            cap,
            floor,
        },
    }
}

/// Result when nothing is left to play for.
fn settled(
    target: f64,
    achievable: bool,
    current: f64,
    required_weighted_points: f64,
    config: &ProbabilityConfig,
) -> ProbabilityResult {
    let effort_level = EffortLevel::from_score(0.0);
    ProbabilityResult {
        target,
        achievable,
        probability: if achievable { 100 } else { 0 },
        effort_level,
        effort_description: effort_level.description(),
        effort_score: 0.0,
        study_hours_estimate: config.study_hours(0.0, 0),
        required_grade_points: current,
        required_weighted_points: round2(required_weighted_points),
        course_requirements: Vec::new(),
        factors: ProbabilityFactors {
            achievable_ratio: if achievable { 1.0 } else { 0.0 },
            cie_quality: 0.0,
            cie_quality_factor: 0.0,
            difficulty_factor: 0.0,
            rarity_factor: 0.0,
            cap: 100.0,
            floor: None,
        },
    }
}

/// Lowest passing band whose points cover `needed`; O when nothing does.
fn required_band(needed: f64) -> &'static GradeBand {
    let points = (needed - EPSILON).ceil().clamp(0.0, MAX_GRADE_POINTS) as u8;
    lowest_band_with_points(points.max(MIN_REQUIRED_POINTS)).unwrap_or(&GRADE_BANDS[0])
}

fn requirement_for(
    course: &CourseEvaluation,
    band: &GradeBand,
    config: &ProbabilityConfig,
) -> CourseRequirement {
    let definition = &course.course;
    let current_cie = course.cie.total();
    let see_max = definition.see_max;

    let (required_see, required_see_percent) = if see_max > 0.0 {
        let weighted_cie = weighted(current_cie, definition.cie_max);
        let raw = (f64::from(band.min) - weighted_cie) * see_max / COMPONENT_WEIGHT;
        let min_see = see_max * MIN_SEE_PERCENT / 100.0;
        (raw.clamp(min_see, see_max).ceil(), percent(raw, see_max))
    } else {
        (0.0, f64::INFINITY)
    };

    let effort = config.effort_for(required_see_percent);

    CourseRequirement {
        code: definition.code.clone(),
        title: definition.title.clone(),
        current_cie: round2(current_cie),
        required_see,
        required_see_percent: round2(required_see_percent),
        required_grade: band.grade,
        difficulty: Difficulty::from_percent(required_see_percent),
        effort,
        achievable: required_see_percent <= 100.0,
    }
}
