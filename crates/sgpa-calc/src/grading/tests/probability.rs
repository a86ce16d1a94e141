use super::common::*;
use crate::grading::{
    recommend, CieMarks, CourseCatalog, CourseEvaluation, Difficulty, EffortLevel, Grade,
    GradingEngine, ProbabilityCap, ProbabilityConfig, RecommendationKind, SeeMarks,
};

fn strong_pair() -> Vec<CourseEvaluation> {
    vec![
        theory_with_cie("EC112TA", 3, 90.0, no_see()),
        theory_with_cie("EE112TA", 3, 90.0, no_see()),
    ]
}

fn weak_pair() -> Vec<CourseEvaluation> {
    vec![
        theory_with_cie("EC112TA", 3, 30.0, no_see()),
        theory_with_cie("EE112TA", 3, 30.0, no_see()),
    ]
}

#[test]
fn strong_cie_gets_floor_for_nine() {
    let result = engine().forecast(&strong_pair(), 9.0);

    assert!(result.achievable);
    assert_eq!(result.probability, 68);
    assert_eq!(result.effort_level, EffortLevel::High);
    assert_eq!(result.study_hours_estimate, 28);
    assert_close(result.required_grade_points, 9.0);
    assert_close(result.required_weighted_points, 54.0);

    let floor = result.factors.floor.expect("floor boost applies");
    assert_close(floor, 65.0 + 10.0 / 3.0);
    assert_close(result.factors.achievable_ratio, 1.0);
    assert_close(result.factors.cie_quality, 90.0);

    let requirement = &result.course_requirements[0];
    assert_eq!(requirement.required_grade, Grade::APlus);
    assert_eq!(requirement.required_see, 70.0);
    assert_eq!(requirement.difficulty, Difficulty::Moderate);
    assert_eq!(requirement.effort, 70.0);
    assert!(requirement.achievable);
}

#[test]
fn perfect_score_is_capped_and_harder() {
    let nine = engine().forecast(&strong_pair(), 9.0);
    let ten = engine().forecast(&strong_pair(), 10.0);

    assert_eq!(ten.probability, 28);
    assert!(ten.probability < nine.probability);
    assert!(ten.factors.floor.is_none());
    assert_eq!(ten.factors.cap, 75.0);
    assert_eq!(ten.course_requirements[0].required_grade, Grade::O);
    assert_eq!(ten.course_requirements[0].difficulty, Difficulty::Hard);
}

#[test]
fn weak_cie_makes_targets_unreachable() {
    let result = engine().forecast(&weak_pair(), 8.0);

    assert!(!result.achievable);
    assert_eq!(result.probability, 0);
    assert_eq!(result.effort_level, EffortLevel::Maximum);
    let requirement = &result.course_requirements[0];
    assert_eq!(requirement.difficulty, Difficulty::Impossible);
    assert!(!requirement.achievable);
    assert_close(requirement.required_see_percent, 110.0);
    assert_eq!(requirement.required_see, 100.0);
}

#[test]
fn locked_failure_can_put_target_out_of_reach() {
    let courses = vec![
        theory_with_cie("MA211TC", 4, 90.0, SeeMarks::simple(0.0)),
        theory_with_cie("HS111EL", 1, 90.0, no_see()),
    ];
    let result = engine().forecast(&courses, 9.0);

    assert!(!result.achievable);
    assert_eq!(result.probability, 0);
    assert_close(result.required_grade_points, 45.0);
    assert_eq!(result.course_requirements.len(), 1);
    assert_eq!(result.course_requirements[0].required_grade, Grade::O);
}

#[test]
fn fully_graded_semester_is_certain_either_way() {
    let courses = vec![theory_with_cie("EC112TA", 3, 86.0, SeeMarks::simple(90.0))];

    let reached = engine().forecast(&courses, 9.0);
    assert!(reached.achievable);
    assert_eq!(reached.probability, 100);
    assert!(reached.course_requirements.is_empty());

    let missed = engine().forecast(&courses, 9.5);
    assert!(!missed.achievable);
    assert_eq!(missed.probability, 0);
}

#[test]
fn no_credits_means_no_chance() {
    let catalog = CourseCatalog::first_year();
    let placeholder = catalog.get("SELECT").expect("placeholder");
    let courses = vec![engine().evaluate(placeholder, &total_cie(30.0), &no_see())];

    let result = engine().forecast(&courses, 8.0);
    assert!(!result.achievable);
    assert_eq!(result.probability, 0);
}

#[test]
fn custom_caps_bound_the_result() {
    let config = ProbabilityConfig {
        caps: vec![ProbabilityCap {
            min_target: 0.0,
            cap: 50.0,
            elite_cap: 50.0,
        }],
        ..ProbabilityConfig::default()
    };
    let engine = GradingEngine::new(config);

    let result = engine.forecast(&strong_pair(), 9.0);
    assert_eq!(result.probability, 50);
}

#[test]
fn inverted_bounds_are_flagged_and_still_forecast() {
    let config = ProbabilityConfig {
        rarity_floor: 0.99,
        difficulty_min: 0.9,
        difficulty_max: 0.5,
        ..ProbabilityConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err("difficulty_min must not exceed difficulty_max")
    );
    assert!(ProbabilityConfig::default().validate().is_ok());

    let result = GradingEngine::new(config).forecast(&strong_pair(), 9.0);
    assert!(result.probability <= 100);
}

#[test]
fn partial_json_override_keeps_defaults() {
    let config: ProbabilityConfig =
        serde_json::from_str(r#"{"elite_cie_quality": 80.0}"#).expect("config");
    assert_eq!(config.elite_cie_quality, 80.0);
    assert_eq!(config.effort_steps, ProbabilityConfig::default().effort_steps);
}

#[test]
fn effort_and_difficulty_bands() {
    assert_eq!(EffortLevel::from_score(19.9), EffortLevel::Minimal);
    assert_eq!(EffortLevel::from_score(20.0), EffortLevel::Light);
    assert_eq!(EffortLevel::from_score(74.0), EffortLevel::High);
    assert_eq!(EffortLevel::from_score(90.0), EffortLevel::Maximum);

    assert_eq!(Difficulty::from_percent(100.0), Difficulty::VeryHard);
    assert_eq!(Difficulty::from_percent(100.5), Difficulty::Impossible);
    assert_eq!(Difficulty::from_percent(45.0), Difficulty::VeryEasy);
    assert_eq!(Difficulty::from_percent(45.1), Difficulty::Easy);
}

#[test]
fn ladder_needs_some_cie() {
    let evaluation = engine().evaluate(&theory_course(), &CieMarks::new(), &no_see());
    assert!(engine().forecast_ladder(&[evaluation]).is_none());
}

#[test]
fn ladder_never_rates_a_harder_target_above_an_easier_one() {
    let ladder = engine().forecast_ladder(&strong_pair()).expect("ladder");

    let order: Vec<(f64, u8)> = ladder
        .targets
        .iter()
        .map(|entry| (entry.target.value, entry.result.probability))
        .collect();
    assert_eq!(
        order,
        vec![
            (8.0, 64),
            (8.5, 49),
            (9.0, 49),
            (9.15, 49),
            (9.45, 49),
            (9.75, 31),
            (10.0, 28)
        ]
    );
    assert_eq!(engine().forecast(&strong_pair(), 9.0).probability, 68);
    assert_eq!(ladder.highest_probable.target.value, 8.0);
    assert_eq!(ladder.lowest_achievable.target.value, 8.0);
    assert_eq!(ladder.courses_analyzed, 2);
    assert_eq!(ladder.total_courses, 2);
}

#[test]
fn ladder_without_achievable_target_reports_last_entry() {
    let ladder = engine().forecast_ladder(&weak_pair()).expect("ladder");
    assert!(ladder.targets.iter().all(|entry| entry.result.probability == 0));
    assert_eq!(ladder.highest_probable.target.value, 8.0);
    assert_eq!(ladder.lowest_achievable.target.value, 10.0);
}

#[test]
fn recommendation_follows_best_target() {
    let strong = engine().forecast_ladder(&strong_pair());
    let advice = recommend(strong.as_ref());
    assert_eq!(advice.title, "Good Progress");
    assert_eq!(advice.kind, RecommendationKind::Info);
    assert!(advice.message.contains("8.0+ SGPA"));
    assert!(advice.message.contains("Moderate effort"));

    let weak = engine().forecast_ladder(&weak_pair());
    let advice = recommend(weak.as_ref());
    assert_eq!(advice.title, "Focus Required");
    assert_eq!(advice.kind, RecommendationKind::Warning);

    let advice = recommend(None);
    assert_eq!(advice.title, "Enter CIE Marks First");
    assert_eq!(advice.kind, RecommendationKind::Info);
}
