use super::catalog::{CatalogError, CourseCatalog};
use super::engine::CourseEntry;
use super::marks::{CieMarks, SeeMarks};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Marks a student entered, keyed by course code.
///
/// ```json
/// {"courses": [{"code": "MA211TC", "cie": {"quiz1": 9}, "see": {"see": 72}}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkSheet {
    pub courses: Vec<SheetRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    pub code: String,
    #[serde(default)]
    pub cie: CieMarks,
    #[serde(default)]
    pub see: SeeMarks,
}

impl MarkSheet {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Attach each row to its catalog definition, keeping sheet order.
    pub fn resolve(&self, catalog: &CourseCatalog) -> Result<Vec<CourseEntry>, CatalogError> {
        self.courses
            .iter()
            .map(|row| {
                let course = catalog.require(&row.code)?;
                Ok(CourseEntry {
                    course: course.clone(),
                    cie: row.cie.clone(),
                    see: row.see.clone(),
                })
            })
            .collect()
    }
}
