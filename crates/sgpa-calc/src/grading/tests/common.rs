use crate::grading::{
    Breakdown, CieMarks, CourseDefinition, CourseEvaluation, CourseType, GradingEngine,
    ProbabilityConfig, SeeMarks, TOTAL_CIE_KEY,
};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn course(
    code: &str,
    course_type: CourseType,
    credits: u32,
    max: f64,
) -> CourseDefinition {
    CourseDefinition {
        code: code.to_string(),
        title: format!("{code} course"),
        credits,
        course_type,
        cie_max: max,
        see_max: max,
        cie_breakdown: None,
        see_breakdown: None,
    }
}

pub(super) fn theory_course() -> CourseDefinition {
    course("EC112TA", CourseType::Theory, 3, 100.0)
}

pub(super) fn integrated_course() -> CourseDefinition {
    CourseDefinition {
        cie_breakdown: Some(Breakdown::new(100.0, 50.0)),
        see_breakdown: Some(Breakdown::new(100.0, 50.0)),
        ..course("PY221IC", CourseType::Integrated, 4, 150.0)
    }
}

/// quiz 8 + 9, tests 45/40/30, EL 35: reduces to 86 under the theory rubric.
pub(super) fn sample_theory_marks() -> CieMarks {
    CieMarks::new()
        .with("quiz1", 8.0)
        .with("quiz2", 9.0)
        .with("test1", 45.0)
        .with("test2", 40.0)
        .with("test3", 30.0)
        .with("expLearning", 35.0)
}

pub(super) fn total_cie(total: f64) -> CieMarks {
    CieMarks::new().with(TOTAL_CIE_KEY, total)
}

pub(super) fn no_see() -> SeeMarks {
    SeeMarks::default()
}

pub(super) fn engine() -> GradingEngine {
    GradingEngine::new(ProbabilityConfig::default())
}

/// Evaluate a theory course of `credits` with the CIE total typed directly.
pub(super) fn theory_with_cie(
    code: &str,
    credits: u32,
    cie: f64,
    see: SeeMarks,
) -> CourseEvaluation {
    let definition = course(code, CourseType::Theory, credits, 100.0);
    engine().evaluate(&definition, &total_cie(cie), &see)
}
