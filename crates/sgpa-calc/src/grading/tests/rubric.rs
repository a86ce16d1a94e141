use super::common::*;
use crate::grading::rubric::{
    caeg_cie, ceiling, english_cie, foic_cie, integrated_cie, kannada_cie, lab_cie, maths_cie,
    theory_cie, yoga_cie,
};
use crate::grading::{
    reduce, Breakdown, CieMarks, CieTotal, CourseType, IntegratedSplit, Rubric, TOTAL_CIE_KEY,
};

#[test]
fn theory_rubric_matches_worked_example() {
    assert_close(theory_cie(&sample_theory_marks()), 86.0);
}

#[test]
fn lab_rubric_sums_components() {
    let marks = CieMarks::new()
        .with("labRecord", 20.0)
        .with("labTest", 15.0)
        .with("innovativeExp", 10.0);
    assert_close(lab_cie(&marks), 45.0);
}

#[test]
fn english_rubric_uses_best_two_cies() {
    let marks = CieMarks::new()
        .with("cie1", 12.0)
        .with("cie2", 6.0)
        .with("cie3", 10.0)
        .with("modules", 8.0)
        .with("expLearning", 15.0);
    // (50 + 41.67) / 100 * 20 = 18.33
    assert_close(english_cie(&marks), 18.0 + 1.0 / 3.0 + 8.0 + 15.0);
}

#[test]
fn caeg_rubric_takes_better_manual_cie() {
    let marks = CieMarks::new()
        .with("manualCie1", 30.0)
        .with("manualCie2", 40.0)
        .with("labCie", 45.0)
        .with("labRecord", 60.0)
        .with("expLearning", 16.0);
    assert_close(caeg_cie(&marks), 17.0 + 15.0 + 8.0);
}

#[test]
fn foic_rubric_averages_quizzes() {
    let marks = CieMarks::new()
        .with("quiz1", 8.0)
        .with("quiz2", 6.0)
        .with("test1", 40.0)
        .with("test2", 35.0)
        .with("expLearning", 30.0);
    assert_close(foic_cie(&marks), 7.0 + 15.0 + 15.0);
}

#[test]
fn yoga_rubric_scales_test() {
    let marks = CieMarks::new()
        .with("quiz", 8.0)
        .with("test", 32.0)
        .with("expLearning", 9.0);
    assert_close(yoga_cie(&marks), 41.0);
}

#[test]
fn maths_rubric_adds_matlab() {
    let marks = CieMarks::new()
        .with("quiz1", 10.0)
        .with("quiz2", 9.0)
        .with("test1", 40.0)
        .with("test2", 45.0)
        .with("test3", 50.0)
        .with("expLearning", 18.0)
        .with("matlab", 17.0);
    assert_close(maths_cie(&marks), 19.0 + 38.0 + 18.0 + 17.0);
}

#[test]
fn kannada_rubric_halves_tests() {
    let marks = CieMarks::new()
        .with("quiz1", 3.0)
        .with("quiz2", 2.0)
        .with("test1", 20.0)
        .with("test2", 22.0)
        .with("expLearning", 18.0);
    assert_close(kannada_cie(&marks), 5.0 + 21.0 + 18.0);
}

#[test]
fn integrated_rubric_returns_parts_separately() {
    let marks = sample_theory_marks()
        .with("labRecord", 20.0)
        .with("labTest", 18.0);
    let (theory, lab) = integrated_cie(&marks);
    assert_close(theory, 86.0);
    assert_close(lab, 38.0);
}

#[test]
fn every_rubric_stays_within_its_ceiling() {
    let keys = [
        "quiz", "quiz1", "quiz2", "test", "test1", "test2", "test3", "expLearning", "matlab",
        "labRecord", "labTest", "innovativeExp", "cie1", "cie2", "cie3", "modules",
        "manualCie1", "manualCie2", "labCie",
    ];
    let mut huge = CieMarks::new();
    let mut negative = CieMarks::new();
    for key in keys {
        huge.insert(key, 10_000.0);
        negative.insert(key, -50.0);
    }

    let types = [
        CourseType::Theory,
        CourseType::Lab,
        CourseType::Integrated,
        CourseType::English,
        CourseType::Caeg,
        CourseType::Foic,
        CourseType::Yoga,
        CourseType::Maths,
        CourseType::Kannada,
    ];
    for course_type in types {
        let rubric = course("ANY", course_type, 3, 100.0).rubric();
        let limit = ceiling(&rubric);

        let high = reduce(&rubric, &huge).total();
        assert!(high <= limit + TOLERANCE, "{course_type} reduced to {high} > {limit}");
        assert!(high > 0.0, "{course_type} should credit positive marks");

        let low = reduce(&rubric, &negative).total();
        assert!(low >= 0.0, "{course_type} reduced to {low}");
    }
}

#[test]
fn integrated_parts_clamp_individually() {
    let marks = CieMarks::new()
        .with("quiz1", 500.0)
        .with("labRecord", 80.0)
        .with("labTest", 80.0);
    let (theory, lab) = integrated_cie(&marks);
    assert_close(theory, 100.0);
    assert_close(lab, 50.0);
}

#[test]
fn total_override_replaces_components() {
    let marks = sample_theory_marks().with(TOTAL_CIE_KEY, "72");
    let total = reduce(&Rubric::Theory, &marks);
    assert_eq!(total, CieTotal::Single { total: 72.0 });
}

#[test]
fn total_override_is_clamped() {
    let total = reduce(&Rubric::Lab, &total_cie(80.0));
    assert_close(total.total(), 50.0);
}

#[test]
fn integrated_override_is_apportioned_and_marked_estimated() {
    let rubric = integrated_course().rubric();
    match reduce(&rubric, &total_cie(120.0)) {
        CieTotal::Split {
            theory,
            lab,
            estimated,
        } => {
            assert_close(theory, 80.0);
            assert_close(lab, 40.0);
            assert!(estimated);
        }
        other => panic!("expected split CIE, got {other:?}"),
    }
}

#[test]
fn integrated_override_respects_part_ceilings() {
    let rubric = Rubric::Integrated(IntegratedSplit {
        cie: Breakdown::new(140.0, 10.0),
        see: Breakdown::new(100.0, 50.0),
        assumed: false,
    });
    match reduce(&rubric, &total_cie(150.0)) {
        CieTotal::Split { theory, lab, .. } => {
            assert_close(theory, 100.0);
            assert_close(lab, 10.0);
        }
        other => panic!("expected split CIE, got {other:?}"),
    }
}

#[test]
fn ungraded_courses_reduce_to_zero() {
    assert_close(reduce(&Rubric::Ungraded, &sample_theory_marks()).total(), 0.0);
}
