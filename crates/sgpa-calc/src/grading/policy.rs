use super::domain::{CourseDefinition, Rubric};
use super::marks::SeeMarks;
use super::rubric::CieTotal;
use super::scoring::{combine, percent};

/// Minimum CIE percentage, per part for integrated courses.
pub const MIN_CIE_PERCENT: f64 = 40.0;
/// Minimum SEE percentage, per part for integrated courses.
pub const MIN_SEE_PERCENT: f64 = 35.0;
/// Minimum weighted final score.
pub const MIN_AGGREGATE: f64 = 40.0;

/// Decide pass/fail. Every threshold is inclusive and all of them must hold.
///
/// Missing SEE counts as 0, so a course with CIE only is provisionally failing.
pub fn check_pass(
    course: &CourseDefinition,
    rubric: &Rubric,
    cie: &CieTotal,
    see: &SeeMarks,
) -> bool {
    match rubric {
        Rubric::Ungraded => false,
        Rubric::Integrated(split) => {
            let (cie_theory, cie_lab) = match cie {
                CieTotal::Split { theory, lab, .. } => (*theory, *lab),
                CieTotal::Single { total } => (*total, 0.0),
            };
            let see_theory = see.theory();
            let see_lab = see.lab();

            let cie_pass = percent(cie_theory, split.cie.theory) >= MIN_CIE_PERCENT
                && percent(cie_lab, split.cie.lab) >= MIN_CIE_PERCENT;
            let see_pass = percent(see_theory, split.see.theory) >= MIN_SEE_PERCENT
                && percent(see_lab, split.see.lab) >= MIN_SEE_PERCENT;
            let aggregate = combine(
                cie_theory + cie_lab,
                see_theory + see_lab,
                course.cie_max,
                course.see_max,
            );

            cie_pass && see_pass && aggregate >= MIN_AGGREGATE
        }
        _ => {
            let total_cie = cie.total();
            let see = see.see();
            let aggregate = combine(total_cie, see, course.cie_max, course.see_max);

            percent(total_cie, course.cie_max) >= MIN_CIE_PERCENT
                && percent(see, course.see_max) >= MIN_SEE_PERCENT
                && aggregate >= MIN_AGGREGATE
        }
    }
}
