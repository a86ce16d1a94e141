//! CIE rubric reducers.
//!
//! Each reducer turns the raw component marks of one course type into its normalized
//! CIE subtotal. The weights come from the first-year scheme and are fixed; they are
//! not configuration. Every result is clamped to `[0, ceiling]` for its rubric.

use super::domain::{Breakdown, IntegratedSplit, Rubric};
use super::marks::CieMarks;
use serde::Serialize;

pub const THEORY_CIE_CEILING: f64 = 100.0;
pub const MATHS_CIE_CEILING: f64 = 100.0;
pub const LAB_CIE_CEILING: f64 = 50.0;
pub const ENGLISH_CIE_CEILING: f64 = 50.0;
pub const CAEG_CIE_CEILING: f64 = 50.0;
pub const FOIC_CIE_CEILING: f64 = 50.0;
pub const YOGA_CIE_CEILING: f64 = 50.0;
/// Kannada components add up to 50 (5 + 25 + 20); the clamp only guards over-entry.
pub const KANNADA_CIE_CEILING: f64 = 50.0;
pub const INTEGRATED_THEORY_CEILING: f64 = 100.0;
pub const INTEGRATED_LAB_CEILING: f64 = 50.0;

/// Reduced CIE for one course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum CieTotal {
    Single {
        total: f64,
    },
    /// Integrated courses keep their parts apart; pass rules test each one.
    Split {
        theory: f64,
        lab: f64,
        /// Parts were apportioned from a `totalCIE` override rather than reduced.
        estimated: bool,
    },
}

impl CieTotal {
    pub fn total(&self) -> f64 {
        match self {
            CieTotal::Single { total } => *total,
            CieTotal::Split { theory, lab, .. } => theory + lab,
        }
    }
}

/// Reduce raw marks under `rubric`.
///
/// A non-blank `totalCIE` entry short-circuits the rubric: the typed total is used as
/// is (clamped to the rubric ceiling). For integrated courses the total is apportioned
/// over the CIE breakdown so the per-part rules still have something to work with.
pub fn reduce(rubric: &Rubric, marks: &CieMarks) -> CieTotal {
    if let Some(total) = marks.total_override() {
        return apportion_override(rubric, total);
    }

    let total = match rubric {
        Rubric::Theory => theory_cie(marks),
        Rubric::Lab => lab_cie(marks),
        Rubric::English => english_cie(marks),
        Rubric::Caeg => caeg_cie(marks),
        Rubric::Foic => foic_cie(marks),
        Rubric::Yoga => yoga_cie(marks),
        Rubric::Maths => maths_cie(marks),
        Rubric::Kannada => kannada_cie(marks),
        Rubric::Integrated(_) => {
            let (theory, lab) = integrated_cie(marks);
            return CieTotal::Split {
                theory,
                lab,
                estimated: false,
            };
        }
        Rubric::Ungraded => 0.0,
    };

    CieTotal::Single { total }
}

/// Stated CIE ceiling of a rubric (theory + lab for integrated courses).
pub fn ceiling(rubric: &Rubric) -> f64 {
    match rubric {
        Rubric::Theory => THEORY_CIE_CEILING,
        Rubric::Lab => LAB_CIE_CEILING,
        Rubric::English => ENGLISH_CIE_CEILING,
        Rubric::Caeg => CAEG_CIE_CEILING,
        Rubric::Foic => FOIC_CIE_CEILING,
        Rubric::Yoga => YOGA_CIE_CEILING,
        Rubric::Maths => MATHS_CIE_CEILING,
        Rubric::Kannada => KANNADA_CIE_CEILING,
        Rubric::Integrated(_) => INTEGRATED_THEORY_CEILING + INTEGRATED_LAB_CEILING,
        Rubric::Ungraded => 0.0,
    }
}

fn apportion_override(rubric: &Rubric, total: f64) -> CieTotal {
    let total = clamp(total, ceiling(rubric));
    match rubric {
        Rubric::Integrated(IntegratedSplit { cie, .. }) => {
            let (theory, lab) = split_by(total, cie);
            CieTotal::Split {
                theory: clamp(theory, INTEGRATED_THEORY_CEILING),
                lab: clamp(lab, INTEGRATED_LAB_CEILING),
                estimated: true,
            }
        }
        _ => CieTotal::Single { total },
    }
}

fn split_by(total: f64, breakdown: &Breakdown) -> (f64, f64) {
    let whole = breakdown.total();
    if whole <= 0.0 {
        return (0.0, 0.0);
    }
    (
        total * breakdown.theory / whole,
        total * breakdown.lab / whole,
    )
}

/// quiz1 + quiz2 (20) + best two of three tests (/100 → /40) + experiential learning (40).
pub fn theory_cie(marks: &CieMarks) -> f64 {
    let quizzes = marks.value("quiz1") + marks.value("quiz2");
    let tests = best_of(&[marks.value("test1"), marks.value("test2"), marks.value("test3")], 2);
    let tests = scale(tests, 100.0, 40.0);
    let experiential = marks.value("expLearning");

    clamp(quizzes + tests + experiential, THEORY_CIE_CEILING)
}

/// Record + test + innovative experiment.
pub fn lab_cie(marks: &CieMarks) -> f64 {
    let total = marks.value("labRecord") + marks.value("labTest") + marks.value("innovativeExp");
    clamp(total, LAB_CIE_CEILING)
}

/// Best two of three CIEs (each /12 → /50, summed /100 → /20) + modules (10) + EL (20).
pub fn english_cie(marks: &CieMarks) -> f64 {
    let mut cies = [marks.value("cie1"), marks.value("cie2"), marks.value("cie3")];
    sort_descending(&mut cies);
    let converted = scale(cies[0], 12.0, 50.0) + scale(cies[1], 12.0, 50.0);
    let reduced = scale(converted, 100.0, 20.0);

    clamp(
        reduced + marks.value("modules") + marks.value("expLearning"),
        ENGLISH_CIE_CEILING,
    )
}

/// Better manual CIE + lab CIE (/100 → /20) + lab record (/80 → /20) + EL (/20 → /10).
pub fn caeg_cie(marks: &CieMarks) -> f64 {
    let best_manual = marks.value("manualCie1").max(marks.value("manualCie2"));
    let manual_and_lab = scale(best_manual + marks.value("labCie"), 100.0, 20.0);
    let record = scale(marks.value("labRecord"), 80.0, 20.0);
    let experiential = scale(marks.value("expLearning"), 20.0, 10.0);

    clamp(manual_and_lab + record + experiential, CAEG_CIE_CEILING)
}

/// Mean of two quizzes (10) + both tests (/100 → /20) + EL (/40 → /20).
pub fn foic_cie(marks: &CieMarks) -> f64 {
    let quizzes = (marks.value("quiz1") + marks.value("quiz2")) / 2.0;
    let tests = scale(marks.value("test1") + marks.value("test2"), 100.0, 20.0);
    let experiential = scale(marks.value("expLearning"), 40.0, 20.0);

    clamp(quizzes + tests + experiential, FOIC_CIE_CEILING)
}

/// Quiz (10) + test (/40 → /30) + EL (10).
pub fn yoga_cie(marks: &CieMarks) -> f64 {
    let test = scale(marks.value("test"), 40.0, 30.0);
    clamp(
        marks.value("quiz") + test + marks.value("expLearning"),
        YOGA_CIE_CEILING,
    )
}

/// Theory layout with EL capped at 20 and a separate MATLAB component (20).
pub fn maths_cie(marks: &CieMarks) -> f64 {
    let quizzes = marks.value("quiz1") + marks.value("quiz2");
    let tests = best_of(&[marks.value("test1"), marks.value("test2"), marks.value("test3")], 2);
    let tests = scale(tests, 100.0, 40.0);

    clamp(
        quizzes + tests + marks.value("expLearning") + marks.value("matlab"),
        MATHS_CIE_CEILING,
    )
}

/// quiz1 + quiz2 + both tests (each /25, /50 → /25) + EL (20).
pub fn kannada_cie(marks: &CieMarks) -> f64 {
    let quizzes = marks.value("quiz1") + marks.value("quiz2");
    let tests = best_of(&[marks.value("test1"), marks.value("test2")], 2);
    let tests = scale(tests, 50.0, 25.0);

    clamp(
        quizzes + tests + marks.value("expLearning"),
        KANNADA_CIE_CEILING,
    )
}

/// Theory part under the theory rubric (100) and lab part as record + test (50).
pub fn integrated_cie(marks: &CieMarks) -> (f64, f64) {
    let theory = theory_cie(marks);
    let lab = clamp(
        marks.value("labRecord") + marks.value("labTest"),
        INTEGRATED_LAB_CEILING,
    );
    (theory, lab)
}

/// Sum of the `n` largest values.
fn best_of(values: &[f64], n: usize) -> f64 {
    let mut sorted = values.to_vec();
    sort_descending(&mut sorted);
    sorted.iter().take(n).sum()
}

fn sort_descending(values: &mut [f64]) {
    values.sort_by(|a, b| b.total_cmp(a));
}

/// Rescale `value` out of `from` onto `to`. A zero or negative source maximum yields 0.
fn scale(value: f64, from: f64, to: f64) -> f64 {
    if from <= 0.0 {
        return 0.0;
    }
    value / from * to
}

fn clamp(value: f64, ceiling: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, ceiling.max(0.0))
}
