use super::bands::{grade_details, Grade};
use super::domain::{CourseDefinition, Rubric};
use super::marks::{CieMarks, SeeMarks};
use super::policy::check_pass;
use super::probability::{self, ProbabilityConfig, ProbabilityLadder, ProbabilityResult};
use super::required::{required_see, required_see_integrated, RequiredSeeTable};
use super::rubric::{reduce, CieTotal};
use super::scoring::{combine, round2};
use super::sgpa::{calculate_sgpa, Credited};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome for one course, always recomputed in full from the current marks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResult {
    pub total_cie: f64,
    pub score: f64,
    pub grade: Grade,
    pub points: u8,
    pub is_pass: bool,
}

/// Course plus the marks entered for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub course: CourseDefinition,
    #[serde(default)]
    pub cie: CieMarks,
    #[serde(default)]
    pub see: SeeMarks,
}

/// Everything the engine derived for a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseEvaluation {
    pub course: CourseDefinition,
    pub rubric: Rubric,
    pub cie: CieTotal,
    pub cie_entered: bool,
    pub see_entered: bool,
    pub result: CourseResult,
    /// Present while SEE is still missing and some CIE is in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_see: Option<RequiredSeeTable>,
}

impl Credited for CourseEvaluation {
    fn credits(&self) -> u32 {
        self.course.credits
    }

    fn result(&self) -> &CourseResult {
        &self.result
    }
}

/// Per-course evaluations and the semester SGPA.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterReport {
    pub courses: Vec<CourseEvaluation>,
    pub sgpa: f64,
    pub total_credits: u32,
}

/// Reduce, combine, check and grade one course.
pub fn grade_course(
    course: &CourseDefinition,
    cie_marks: &CieMarks,
    see: &SeeMarks,
) -> CourseEvaluation {
    let rubric = course.rubric();
    let cie = reduce(&rubric, cie_marks);
    let see_entered = see.is_entered(&rubric);

    let see_total = match rubric {
        Rubric::Integrated(_) => see.theory() + see.lab(),
        _ => see.see(),
    };
    let final_score = combine(cie.total(), see_total, course.cie_max, course.see_max);
    let is_pass = check_pass(course, &rubric, &cie, see);
    let details = grade_details(final_score, is_pass);

    let required = if see_entered {
        None
    } else {
        required_table(course, &rubric, &cie)
    };

    debug!(
        code = %course.code,
        cie = cie.total(),
        score = final_score,
        grade = %details.grade,
        is_pass,
        "course evaluated"
    );

    CourseEvaluation {
        course: course.clone(),
        rubric,
        cie,
        cie_entered: cie_marks.has_entries(),
        see_entered,
        result: CourseResult {
            total_cie: round2(cie.total()),
            score: round2(final_score),
            grade: details.grade,
            points: details.points,
            is_pass,
        },
        required_see: required,
    }
}

fn required_table(
    course: &CourseDefinition,
    rubric: &Rubric,
    cie: &CieTotal,
) -> Option<RequiredSeeTable> {
    match (rubric, cie) {
        (Rubric::Ungraded, _) => None,
        (Rubric::Integrated(split), CieTotal::Split { theory, lab, .. }) => {
            required_see_integrated(*theory, *lab, split).map(RequiredSeeTable::Integrated)
        }
        _ => required_see(cie.total(), course.cie_max, course.see_max)
            .map(RequiredSeeTable::Simple),
    }
}

/// Stateless evaluator holding the forecast tuning table.
#[derive(Debug, Clone, Default)]
pub struct GradingEngine {
    probability: ProbabilityConfig,
}

impl GradingEngine {
    pub fn new(probability: ProbabilityConfig) -> Self {
        Self { probability }
    }

    pub fn evaluate(
        &self,
        course: &CourseDefinition,
        cie: &CieMarks,
        see: &SeeMarks,
    ) -> CourseEvaluation {
        grade_course(course, cie, see)
    }

    pub fn evaluate_semester(&self, entries: &[CourseEntry]) -> SemesterReport {
        let courses: Vec<CourseEvaluation> = entries
            .iter()
            .map(|entry| grade_course(&entry.course, &entry.cie, &entry.see))
            .collect();
        let sgpa = calculate_sgpa(&courses);
        let total_credits = courses.iter().map(|course| course.course.credits).sum();

        debug!(courses = courses.len(), total_credits, sgpa, "semester evaluated");

        SemesterReport {
            courses,
            sgpa,
            total_credits,
        }
    }

    /// Chance of reaching `target` given the courses evaluated so far.
    pub fn forecast(&self, courses: &[CourseEvaluation], target: f64) -> ProbabilityResult {
        probability::estimate(courses, target, &self.probability)
    }

    /// Forecast across the standard target ladder; `None` until some CIE is entered.
    pub fn forecast_ladder(&self, courses: &[CourseEvaluation]) -> Option<ProbabilityLadder> {
        probability::ladder(courses, &self.probability)
    }
}
