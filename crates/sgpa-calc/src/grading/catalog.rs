use super::domain::{Breakdown, CourseDefinition, CourseType};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use CourseType::{Caeg, English, Foic, Integrated, Kannada, Lab, Maths, Theory, Yoga};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read course catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid course catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("course {code} has unknown type {label:?}")]
    UnknownType { code: String, label: String },
    #[error("course {code} gives only one side of its {side} breakdown")]
    IncompleteBreakdown { code: String, side: &'static str },
    #[error("course {0} is listed more than once")]
    DuplicateCourse(String),
    #[error("course {0} is not in the catalog")]
    UnknownCourse(String),
}

/// Ordered list of course definitions with lookup by code.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCatalog {
    courses: Vec<CourseDefinition>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<CourseDefinition>) -> Result<Self, CatalogError> {
        for (index, course) in courses.iter().enumerate() {
            if courses[..index]
                .iter()
                .any(|earlier| earlier.code.eq_ignore_ascii_case(&course.code))
            {
                return Err(CatalogError::DuplicateCourse(course.code.clone()));
            }
        }
        Ok(Self { courses })
    }

    /// Import a catalog from CSV with the header
    /// `code,title,credits,type,cie_max,see_max,cie_theory,cie_lab,see_theory,see_lab`.
    /// Breakdown cells may be left blank.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut courses = Vec::new();

        for record in csv_reader.deserialize::<CatalogRow>() {
            courses.push(record?.into_definition()?);
        }

        debug!(courses = courses.len(), "course catalog imported");
        Self::new(courses)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Case-insensitive lookup.
    pub fn get(&self, code: &str) -> Option<&CourseDefinition> {
        let code = code.trim();
        self.courses
            .iter()
            .find(|course| course.code.eq_ignore_ascii_case(code))
    }

    pub fn require(&self, code: &str) -> Result<&CourseDefinition, CatalogError> {
        self.get(code)
            .ok_or_else(|| CatalogError::UnknownCourse(code.trim().to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseDefinition> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// First-year courses of both cycles across every stream, with the `SELECT`
    /// placeholder row first.
    pub fn first_year() -> Self {
        let courses = FIRST_YEAR
            .iter()
            .map(|seed| seed.definition())
            .collect();
        Self { courses }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    code: String,
    title: String,
    credits: u32,
    #[serde(rename = "type")]
    course_type: String,
    cie_max: f64,
    see_max: f64,
    #[serde(default, deserialize_with = "empty_cell_as_none")]
    cie_theory: Option<f64>,
    #[serde(default, deserialize_with = "empty_cell_as_none")]
    cie_lab: Option<f64>,
    #[serde(default, deserialize_with = "empty_cell_as_none")]
    see_theory: Option<f64>,
    #[serde(default, deserialize_with = "empty_cell_as_none")]
    see_lab: Option<f64>,
}

impl CatalogRow {
    fn into_definition(self) -> Result<CourseDefinition, CatalogError> {
        let course_type =
            CourseType::from_label(&self.course_type).ok_or_else(|| CatalogError::UnknownType {
                code: self.code.clone(),
                label: self.course_type.clone(),
            })?;
        let cie_breakdown = breakdown(&self.code, "CIE", self.cie_theory, self.cie_lab)?;
        let see_breakdown = breakdown(&self.code, "SEE", self.see_theory, self.see_lab)?;

        Ok(CourseDefinition {
            code: self.code,
            title: self.title,
            credits: self.credits,
            course_type,
            cie_max: self.cie_max,
            see_max: self.see_max,
            cie_breakdown,
            see_breakdown,
        })
    }
}

fn breakdown(
    code: &str,
    side: &'static str,
    theory: Option<f64>,
    lab: Option<f64>,
) -> Result<Option<Breakdown>, CatalogError> {
    match (theory, lab) {
        (Some(theory), Some(lab)) => Ok(Some(Breakdown::new(theory, lab))),
        (None, None) => Ok(None),
        _ => Err(CatalogError::IncompleteBreakdown {
            code: code.to_string(),
            side,
        }),
    }
}

fn empty_cell_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<String>::deserialize(deserializer)?;
    match cell.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse::<f64>().map(Some).map_err(serde::de::Error::custom),
    }
}

struct Seed {
    code: &'static str,
    title: &'static str,
    credits: u32,
    course_type: CourseType,
    cie_max: f64,
    see_max: f64,
}

impl Seed {
    fn definition(&self) -> CourseDefinition {
        let split = (self.course_type == CourseType::Integrated)
            .then_some(Breakdown::new(100.0, 50.0));
        CourseDefinition {
            code: self.code.to_string(),
            title: self.title.to_string(),
            credits: self.credits,
            course_type: self.course_type,
            cie_max: self.cie_max,
            see_max: self.see_max,
            cie_breakdown: split,
            see_breakdown: split,
        }
    }
}

const fn seed(
    code: &'static str,
    title: &'static str,
    credits: u32,
    course_type: CourseType,
) -> Seed {
    let (cie_max, see_max) = match course_type {
        CourseType::Integrated => (150.0, 150.0),
        CourseType::Theory | CourseType::Maths => (100.0, 100.0),
        CourseType::None => (0.0, 0.0),
        _ => (50.0, 50.0),
    };
    Seed {
        code,
        title,
        credits,
        course_type,
        cie_max,
        see_max,
    }
}

const FIRST_YEAR: &[Seed] = &[
    seed("SELECT", "Select a Course", 0, CourseType::None),
    // Semester I, chemistry cycle (CS, BT, CD, CY, CI)
    seed("MA211TC", "Fundamentals of Linear Algebra, Calculus and Statistics", 4, Maths),
    seed("CM211IA", "Chemistry of Smart Materials And Devices", 4, Integrated),
    seed("ME112GL", "Computer Aided Engineering Graphics", 3, Caeg),
    seed("XX113XTX", "Engineering Science Course - I", 3, Theory),
    seed("XX115XIX", "Programming Languages Course", 3, Integrated),
    seed("HS111EL", "Communicative English-I", 1, English),
    seed("HS114TC", "Fundamentals of Indian Constitution", 1, Foic),
    seed("HS115YL", "Scientific Foundations of Health-Yoga Practice", 1, Yoga),
    // Semester II, physics cycle (CS, BT, CD, CY, CI)
    seed("MA221TC", "Number Theory, Vector Calculus and Computational Methods", 4, Maths),
    seed("PY221IC", "Quantum Physics for Engineers", 4, Integrated),
    seed("CS222IA", "Principles of Programming Using C", 3, Integrated),
    seed("XX123XTX", "Engineering Science Course-II", 3, Theory),
    seed("CI124TA", "AI Foundations for Engineers", 3, Theory),
    seed("HS121EL", "Communicative English-II", 1, English),
    seed("HS12XKB", "Samskrutika Kannada/ Balake Kannada", 1, Kannada),
    seed("ME121DL", "IDEA LAB", 1, Lab),
    // Semester I, physics cycle (EC, EE, ET)
    seed("MA211TA", "Fundamentals of Linear Algebra, Calculus and Numerical Methods", 4, Maths),
    seed("PY211IA", "Condensed Matter Physics for Engineers", 4, Integrated),
    seed("PY211IE", "Physics of Electrical & Electronic Materials", 4, Integrated),
    seed("EC112TA", "Basic Electronics", 3, Theory),
    seed("EE112TA", "Elements of Electrical Engineering", 3, Theory),
    seed("CI114TA", "AI Foundations for Engineers", 3, Theory),
    seed("ME111DL", "IDEA LAB", 1, Lab),
    // Semester II, chemistry cycle (EC, EE, ET)
    seed("MA221TA", "Vector Calculus, Laplace Transform and Numerical Methods", 4, Maths),
    seed("CM221IB", "Chemistry of functional materials", 4, Integrated),
    seed("ME122GL", "Computer Aided Engineering Graphics", 3, Caeg),
    // Semester I, physics cycle (AS, CH, IM, ME)
    seed(
        "MA211TB",
        "Fundamentals of Linear Algebra, Calculus and Differential Equations",
        4,
        Maths,
    ),
    seed("PY211IB", "Classical Physics for Engineers", 4, Integrated),
    seed("ME112TA", "Elements of Mechanical Engineering", 3, Theory),
    // Semester II, chemistry cycle (AS, CH, IM, ME)
    seed("MA221TB", "Vector Calculus and Computational Methods", 4, Maths),
    seed("CM221IC", "Chemistry of Engineering materials", 4, Integrated),
    // Semester I, physics cycle (CV)
    seed("MA211TD", "Applied Mathematics – I", 4, Maths),
    seed("PY211ID", "Applied Physics for Engineers", 4, Integrated),
    seed("CV112TA", "Engineering Mechanics", 3, Theory),
    // Semester II, chemistry cycle (CV)
    seed("MA221TD", "Applied Mathematics – II", 4, Maths),
    seed("CM221ID", "Engineering And Environmental Chemistry", 4, Integrated),
    // Shared across streams
    seed("XX125XIX", "Programming Languages Course", 3, Integrated),
];
