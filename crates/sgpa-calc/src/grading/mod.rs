mod bands;
mod catalog;
mod domain;
mod engine;
mod marks;
mod policy;
mod probability;
mod required;
pub mod rubric;
mod scoring;
mod sgpa;
mod sheet;

pub use bands::{grade_details, passing_bands, Grade, GradeBand, GradeDetails, GRADE_BANDS};
pub use catalog::{CatalogError, CourseCatalog};
pub use domain::{
    Breakdown, CourseDefinition, CourseType, IntegratedSplit, Rubric,
    DEFAULT_INTEGRATED_BREAKDOWN, INTEGRATED_CIE_MAX,
};
pub use engine::{
    grade_course, CourseEntry, CourseEvaluation, CourseResult, GradingEngine, SemesterReport,
};
pub use marks::{CieMarks, MarkValue, SeeMarks, TOTAL_CIE_KEY};
pub use policy::{check_pass, MIN_AGGREGATE, MIN_CIE_PERCENT, MIN_SEE_PERCENT};
pub use probability::{
    estimate, ladder, recommend, CourseRequirement, Difficulty, EffortLevel, EffortStep,
    FloorBoost, LadderEntry, ProbabilityCap, ProbabilityConfig, ProbabilityFactors,
    ProbabilityLadder, ProbabilityResult, QualityStep, RarityStep, Recommendation,
    RecommendationKind, SgpaTarget, TARGETS,
};
pub use required::{
    required_see, required_see_integrated, IntegratedRequiredSee, RequiredSee,
    RequiredSeeTable, SeeNote,
};
pub use rubric::{reduce, CieTotal};
pub use scoring::{combine, round2};
pub use sgpa::{calculate_sgpa, Credited};
pub use sheet::{MarkSheet, SheetRow};

#[cfg(test)]
mod tests;
