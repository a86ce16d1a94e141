use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Course categories from the first-year scheme. Each grades CIE with its own rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    Theory,
    Lab,
    Integrated,
    English,
    #[serde(rename = "CAEG")]
    Caeg,
    #[serde(rename = "FOIC")]
    Foic,
    Yoga,
    Maths,
    Kannada,
    None,
}

impl CourseType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Lab => "Lab",
            Self::Integrated => "Integrated",
            Self::English => "English",
            Self::Caeg => "CAEG",
            Self::Foic => "FOIC",
            Self::Yoga => "Yoga",
            Self::Maths => "Maths",
            Self::Kannada => "Kannada",
            Self::None => "None",
        }
    }

    /// Parses catalog labels, ignoring case and surrounding whitespace.
    pub fn from_label(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let kind = match normalized.as_str() {
            "theory" => Self::Theory,
            "lab" => Self::Lab,
            "integrated" => Self::Integrated,
            "english" => Self::English,
            "caeg" => Self::Caeg,
            "foic" => Self::Foic,
            "yoga" => Self::Yoga,
            "maths" | "math" => Self::Maths,
            "kannada" => Self::Kannada,
            "none" | "" => Self::None,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Theory/lab split of a CIE or SEE maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub theory: f64,
    pub lab: f64,
}

impl Breakdown {
    pub const fn new(theory: f64, lab: f64) -> Self {
        Self { theory, lab }
    }

    pub fn total(&self) -> f64 {
        self.theory + self.lab
    }
}

/// Split assumed when an integrated course record carries no breakdown.
///
/// Not a syllabus value: a malformed record silently grades against 100/50.
pub const DEFAULT_INTEGRATED_BREAKDOWN: Breakdown = Breakdown::new(100.0, 50.0);

/// CIE maximum that marks a course as integrated regardless of its type label.
pub const INTEGRATED_CIE_MAX: f64 = 150.0;

/// Static description of a course as published in the scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDefinition {
    pub code: String,
    pub title: String,
    pub credits: u32,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub cie_max: f64,
    pub see_max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cie_breakdown: Option<Breakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub see_breakdown: Option<Breakdown>,
}

impl CourseDefinition {
    /// A course is graded under the theory+lab rubric when it is typed Integrated or
    /// when its CIE maximum is 150, whatever its type label says.
    pub fn is_effectively_integrated(&self) -> bool {
        self.course_type == CourseType::Integrated || self.cie_max == INTEGRATED_CIE_MAX
    }

    /// Resolves which reducer and pass rule apply to this course.
    pub fn rubric(&self) -> Rubric {
        if self.is_effectively_integrated() {
            return Rubric::Integrated(self.integrated_split());
        }

        match self.course_type {
            CourseType::Theory => Rubric::Theory,
            CourseType::Lab => Rubric::Lab,
            CourseType::English => Rubric::English,
            CourseType::Caeg => Rubric::Caeg,
            CourseType::Foic => Rubric::Foic,
            CourseType::Yoga => Rubric::Yoga,
            CourseType::Maths => Rubric::Maths,
            CourseType::Kannada => Rubric::Kannada,
            CourseType::Integrated | CourseType::None => Rubric::Ungraded,
        }
    }

    fn integrated_split(&self) -> IntegratedSplit {
        let assumed = self.cie_breakdown.is_none() || self.see_breakdown.is_none();
        if assumed {
            warn!(
                code = %self.code,
                "integrated course has no CIE/SEE breakdown; assuming theory 100 / lab 50"
            );
        }

        IntegratedSplit {
            cie: self.cie_breakdown.unwrap_or(DEFAULT_INTEGRATED_BREAKDOWN),
            see: self.see_breakdown.unwrap_or(DEFAULT_INTEGRATED_BREAKDOWN),
            assumed,
        }
    }
}

/// Breakdowns an integrated course is graded against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntegratedSplit {
    pub cie: Breakdown,
    pub see: Breakdown,
    /// True when at least one side fell back to [`DEFAULT_INTEGRATED_BREAKDOWN`].
    pub assumed: bool,
}

/// One variant per CIE rubric; the integrated variant carries its split so downstream
/// stages never re-derive it from course metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rubric", rename_all = "snake_case")]
pub enum Rubric {
    Theory,
    Lab,
    English,
    Caeg,
    Foic,
    Yoga,
    Maths,
    Kannada,
    Integrated(IntegratedSplit),
    /// Placeholder rows (type None). Nothing to reduce and never a pass.
    Ungraded,
}

impl Rubric {
    pub fn is_integrated(&self) -> bool {
        matches!(self, Rubric::Integrated(_))
    }
}
