use chrono::{DateTime, Utc};
use serde::Serialize;
use sgpa_calc::config::AppConfig;
use sgpa_calc::error::AppError;
use sgpa_calc::grading::{CourseCatalog, MarkSheet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// JSON wrapper stamped with the time the output was produced.
#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    generated_at: DateTime<Utc>,
    data: &'a T,
}

pub(crate) fn print_json<T: Serialize>(data: &T) -> Result<(), AppError> {
    let envelope = Envelope {
        generated_at: Utc::now(),
        data,
    };
    let json = serde_json::to_string_pretty(&envelope).map_err(AppError::Output)?;
    println!("{json}");
    Ok(())
}

/// `--catalog` wins over `SGPA_CATALOG_PATH`; with neither, the built-in catalog is used.
pub(crate) fn load_catalog(
    config: &AppConfig,
    override_path: Option<PathBuf>,
) -> Result<CourseCatalog, AppError> {
    match override_path.or_else(|| config.catalog.path.clone()) {
        Some(path) => {
            let catalog = CourseCatalog::from_path(&path)?;
            info!(path = %path.display(), courses = catalog.len(), "loaded course catalog");
            Ok(catalog)
        }
        None => {
            let catalog = CourseCatalog::first_year();
            info!(courses = catalog.len(), "using built-in first-year catalog");
            Ok(catalog)
        }
    }
}

pub(crate) fn read_sheet(path: &Path) -> Result<MarkSheet, AppError> {
    let file = File::open(path)?;
    let sheet = MarkSheet::from_reader(BufReader::new(file)).map_err(AppError::Sheet)?;
    info!(path = %path.display(), courses = sheet.courses.len(), "loaded mark sheet");
    Ok(sheet)
}
