use crate::grading::{CatalogError, CourseCatalog, CourseType, Rubric};

const CSV: &str = "\
code,title,credits,type,cie_max,see_max,cie_theory,cie_lab,see_theory,see_lab
CS101, Programming Basics ,3,theory,100,100,,,,
CS102,\"Systems, Combined\",4,Lab,150,150,100,50,100,50
HS101,Yoga Practice,1,Yoga,50,50,,,,
";

#[test]
fn built_in_catalog_starts_with_placeholder() {
    let catalog = CourseCatalog::first_year();
    assert_eq!(catalog.len(), 38);

    let first = catalog.iter().next().expect("placeholder row");
    assert_eq!(first.code, "SELECT");
    assert_eq!(first.credits, 0);
    assert_eq!(first.course_type, CourseType::None);
    assert_eq!(first.rubric(), Rubric::Ungraded);
}

#[test]
fn built_in_integrated_courses_carry_breakdowns() {
    let catalog = CourseCatalog::first_year();
    let integrated: Vec<_> = catalog
        .iter()
        .filter(|course| course.is_effectively_integrated())
        .collect();

    assert!(!integrated.is_empty());
    for course in integrated {
        assert_eq!(course.cie_max, 150.0, "{}", course.code);
        assert!(course.cie_breakdown.is_some(), "{}", course.code);
        assert!(course.see_breakdown.is_some(), "{}", course.code);
    }
}

#[test]
fn lookup_ignores_case_and_whitespace() {
    let catalog = CourseCatalog::first_year();
    let course = catalog.get(" ma211tc ").expect("maths course");
    assert_eq!(course.code, "MA211TC");
    assert_eq!(course.course_type, CourseType::Maths);
    assert!(catalog.get("NOPE000").is_none());
}

#[test]
fn require_reports_unknown_codes() {
    let catalog = CourseCatalog::first_year();
    match catalog.require("NOPE000") {
        Err(CatalogError::UnknownCourse(code)) => assert_eq!(code, "NOPE000"),
        other => panic!("expected unknown course, got {other:?}"),
    }
}

#[test]
fn imports_csv_with_optional_breakdowns() {
    let catalog = CourseCatalog::from_reader(CSV.as_bytes()).expect("catalog");
    assert_eq!(catalog.len(), 3);

    let basics = catalog.get("CS101").expect("CS101");
    assert_eq!(basics.title, "Programming Basics");
    assert_eq!(basics.course_type, CourseType::Theory);
    assert!(basics.cie_breakdown.is_none());

    let combined = catalog.get("cs102").expect("CS102");
    assert_eq!(combined.title, "Systems, Combined");
    assert_eq!(combined.course_type, CourseType::Lab);
    assert!(combined.is_effectively_integrated());
    let breakdown = combined.cie_breakdown.expect("breakdown");
    assert_eq!(breakdown.theory, 100.0);
    assert_eq!(breakdown.lab, 50.0);
}

#[test]
fn rejects_unknown_course_type() {
    let csv = "\
code,title,credits,type,cie_max,see_max,cie_theory,cie_lab,see_theory,see_lab
XX1,Mystery,3,Seminar,100,100,,,,
";
    match CourseCatalog::from_reader(csv.as_bytes()) {
        Err(CatalogError::UnknownType { code, label }) => {
            assert_eq!(code, "XX1");
            assert_eq!(label, "Seminar");
        }
        other => panic!("expected unknown type, got {other:?}"),
    }
}

#[test]
fn rejects_half_a_breakdown() {
    let csv = "\
code,title,credits,type,cie_max,see_max,cie_theory,cie_lab,see_theory,see_lab
XX2,Half,4,Integrated,150,150,100,,100,50
";
    assert!(matches!(
        CourseCatalog::from_reader(csv.as_bytes()),
        Err(CatalogError::IncompleteBreakdown { side: "CIE", .. })
    ));
}

#[test]
fn rejects_duplicate_codes() {
    let csv = "\
code,title,credits,type,cie_max,see_max,cie_theory,cie_lab,see_theory,see_lab
XX3,One,3,Theory,100,100,,,,
xx3,Two,3,Theory,100,100,,,,
";
    assert!(matches!(
        CourseCatalog::from_reader(csv.as_bytes()),
        Err(CatalogError::DuplicateCourse(code)) if code == "xx3"
    ));
}

#[test]
fn malformed_numbers_surface_as_csv_errors() {
    let csv = "\
code,title,credits,type,cie_max,see_max,cie_theory,cie_lab,see_theory,see_lab
XX4,Broken,three,Theory,100,100,,,,
";
    assert!(matches!(
        CourseCatalog::from_reader(csv.as_bytes()),
        Err(CatalogError::Csv(_))
    ));
}
