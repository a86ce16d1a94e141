use super::common::*;
use crate::grading::{
    CieMarks, CieTotal, CourseCatalog, CourseEntry, CourseType, Grade, RequiredSeeTable,
    SeeMarks,
};

#[test]
fn theory_example_grades_a_plus() {
    let evaluation = engine().evaluate(
        &theory_course(),
        &sample_theory_marks(),
        &SeeMarks::simple(90.0),
    );

    assert_eq!(evaluation.result.total_cie, 86.0);
    assert_eq!(evaluation.result.score, 88.0);
    assert_eq!(evaluation.result.grade, Grade::APlus);
    assert_eq!(evaluation.result.points, 9);
    assert!(evaluation.result.is_pass);
    assert!(evaluation.see_entered);
    assert!(evaluation.required_see.is_none());
}

#[test]
fn integrated_example_fails_on_theory_cie() {
    let marks = CieMarks::new()
        .with("quiz1", 10.0)
        .with("quiz2", 10.0)
        .with("expLearning", 15.0)
        .with("labRecord", 25.0)
        .with("labTest", 20.0);
    let evaluation = engine().evaluate(
        &integrated_course(),
        &marks,
        &SeeMarks::integrated(100.0, 50.0),
    );

    assert_eq!(
        evaluation.cie,
        CieTotal::Split {
            theory: 35.0,
            lab: 45.0,
            estimated: false
        }
    );
    assert!(!evaluation.result.is_pass);
    assert_eq!(evaluation.result.grade, Grade::F);
    assert_eq!(evaluation.result.points, 0);
    assert!(evaluation.result.score > 40.0);
}

#[test]
fn cie_only_course_offers_required_see_table() {
    let evaluation = engine().evaluate(&theory_course(), &sample_theory_marks(), &no_see());

    assert!(!evaluation.see_entered);
    assert!(!evaluation.result.is_pass);
    match evaluation.required_see {
        Some(RequiredSeeTable::Simple(rows)) => {
            assert_eq!(rows.len(), 7);
            assert_eq!(rows[0].required, 94.0);
        }
        other => panic!("expected simple table, got {other:?}"),
    }
}

#[test]
fn integrated_course_offers_split_table() {
    let evaluation = engine().evaluate(&integrated_course(), &total_cie(120.0), &no_see());
    match evaluation.required_see {
        Some(RequiredSeeTable::Integrated(rows)) => {
            assert_eq!(rows[0].required_theory, 100.0);
            assert_eq!(rows[0].required_lab, 50.0);
        }
        other => panic!("expected integrated table, got {other:?}"),
    }
}

#[test]
fn empty_marks_have_no_table() {
    let evaluation = engine().evaluate(&theory_course(), &CieMarks::new(), &no_see());
    assert!(!evaluation.cie_entered);
    assert!(evaluation.required_see.is_none());
    assert_eq!(evaluation.result.grade, Grade::F);
}

#[test]
fn placeholder_course_is_ungraded() {
    let catalog = CourseCatalog::first_year();
    let placeholder = catalog.get("SELECT").expect("placeholder");
    let evaluation = engine().evaluate(placeholder, &total_cie(40.0), &SeeMarks::simple(40.0));

    assert!(!evaluation.result.is_pass);
    assert_eq!(evaluation.result.score, 0.0);
    assert!(evaluation.required_see.is_none());
}

#[test]
fn semester_report_aggregates_sgpa() {
    let catalog = CourseCatalog::first_year();
    let entry = |credits: u32, cie: f64, see: f64| CourseEntry {
        course: course(&format!("C{credits}"), CourseType::Theory, credits, 100.0),
        cie: total_cie(cie),
        see: SeeMarks::simple(see),
    };
    let placeholder = CourseEntry {
        course: catalog.get("SELECT").expect("placeholder").clone(),
        cie: CieMarks::new(),
        see: SeeMarks::default(),
    };

    let report = engine().evaluate_semester(&[
        entry(4, 70.0, 70.0),
        entry(3, 30.0, 90.0),
        entry(1, 95.0, 95.0),
        placeholder,
    ]);

    assert_eq!(report.total_credits, 8);
    assert_eq!(report.sgpa, 5.25);
    let grades: Vec<Grade> = report
        .courses
        .iter()
        .map(|course| course.result.grade)
        .collect();
    assert_eq!(grades, vec![Grade::A, Grade::F, Grade::O, Grade::F]);
}

#[test]
fn evaluation_serializes_camel_case() {
    let evaluation = engine().evaluate(
        &theory_course(),
        &sample_theory_marks(),
        &SeeMarks::simple(90.0),
    );
    let json = serde_json::to_value(&evaluation).expect("json");
    assert_eq!(json["result"]["totalCie"], 86.0);
    assert_eq!(json["result"]["grade"], "A+");
    assert_eq!(json["result"]["isPass"], true);
    assert_eq!(json["course"]["type"], "Theory");
}
