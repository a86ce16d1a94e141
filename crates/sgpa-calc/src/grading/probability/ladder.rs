use super::{estimate, ProbabilityConfig, ProbabilityResult};
use crate::grading::engine::CourseEvaluation;
use serde::Serialize;

/// One rung of the standard target ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SgpaTarget {
    pub value: f64,
    pub label: &'static str,
    pub description: &'static str,
}

/// Ascending by value.
pub const TARGETS: [SgpaTarget; 7] = [
    SgpaTarget { value: 8.0, label: "8.0+ SGPA", description: "Good Performance" },
    SgpaTarget { value: 8.5, label: "8.5+ SGPA", description: "Very Good Performance" },
    SgpaTarget { value: 9.0, label: "9.0+ SGPA", description: "Excellent Performance" },
    SgpaTarget { value: 9.15, label: "9.15+ SGPA", description: "Outstanding Performance" },
    SgpaTarget { value: 9.45, label: "9.45+ SGPA", description: "Exceptional Performance" },
    SgpaTarget { value: 9.75, label: "9.75+ SGPA", description: "Near Perfect Performance" },
    SgpaTarget { value: 10.0, label: "10.0 SGPA", description: "Perfect Score" },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LadderEntry {
    pub target: SgpaTarget,
    pub result: ProbabilityResult,
}

/// Forecasts for every target, most probable first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityLadder {
    pub targets: Vec<LadderEntry>,
    pub highest_probable: LadderEntry,
    /// First achievable entry in probability order, else the least probable one.
    pub lowest_achievable: LadderEntry,
    pub courses_analyzed: usize,
    pub total_courses: usize,
}

/// Run the forecast for each target. `None` until at least one course has CIE marks.
///
/// Each probability is capped by the one for the next easier target, so reaching a
/// higher SGPA never reads as likelier than reaching a lower one.
pub fn ladder(
    courses: &[CourseEvaluation],
    config: &ProbabilityConfig,
) -> Option<ProbabilityLadder> {
    let courses_analyzed = courses.iter().filter(|course| course.cie_entered).count();
    if courses_analyzed == 0 {
        return None;
    }

    let mut ceiling = u8::MAX;
    let mut targets: Vec<LadderEntry> = TARGETS
        .iter()
        .map(|target| {
            let mut result = estimate(courses, target.value, config);
            result.probability = result.probability.min(ceiling);
            ceiling = result.probability;
            LadderEntry {
                target: *target,
                result,
            }
        })
        .collect();
    targets.sort_by(|a, b| b.result.probability.cmp(&a.result.probability));

    let highest_probable = targets.first()?.clone();
    let lowest_achievable = targets
        .iter()
        .find(|entry| entry.result.achievable)
        .or_else(|| targets.last())?
        .clone();

    Some(ProbabilityLadder {
        targets,
        highest_probable,
        lowest_achievable,
        courses_analyzed,
        total_courses: courses.len(),
    })
}
