use crate::infra::{load_catalog, print_json, read_sheet};
use clap::Args;
use serde::Serialize;
use sgpa_calc::config::AppConfig;
use sgpa_calc::error::AppError;
use sgpa_calc::grading::{
    recommend, required_see, CourseEvaluation, GradingEngine, ProbabilityLadder,
    ProbabilityResult, Recommendation, RequiredSee, RequiredSeeTable, SemesterReport,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// CSV catalog to use instead of the built-in first-year catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct GradeArgs {
    /// Mark sheet (JSON) to grade
    #[arg(long)]
    pub(crate) sheet: PathBuf,
    /// CSV catalog to resolve course codes against
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RequiredArgs {
    /// CIE total already earned
    #[arg(long)]
    pub(crate) cie: f64,
    #[arg(long, default_value_t = 100.0)]
    pub(crate) cie_max: f64,
    #[arg(long, default_value_t = 100.0)]
    pub(crate) see_max: f64,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Mark sheet (JSON) with the marks entered so far
    #[arg(long)]
    pub(crate) sheet: PathBuf,
    /// Forecast a single target SGPA instead of the full ladder
    #[arg(long)]
    pub(crate) target: Option<f64>,
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_catalog(config: &AppConfig, args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(config, args.catalog)?;

    if args.json {
        let courses: Vec<_> = catalog.iter().collect();
        return print_json(&courses);
    }

    println!(
        "{:<10} {:>3}  {:<10} {:>5} {:>5}  Title",
        "Code", "Cr", "Type", "CIE", "SEE"
    );
    for course in catalog.iter() {
        println!(
            "{:<10} {:>3}  {:<10} {:>5} {:>5}  {}",
            course.code,
            course.credits,
            course.course_type.label(),
            course.cie_max,
            course.see_max,
            course.title
        );
    }
    Ok(())
}

pub(crate) fn run_grade(config: &AppConfig, args: GradeArgs) -> Result<(), AppError> {
    let engine = GradingEngine::new(config.probability.clone());
    let report = evaluate_sheet(&engine, config, &args.sheet, args.catalog)?;

    if args.json {
        return print_json(&report);
    }

    render_report(&report);
    Ok(())
}

#[derive(Serialize)]
struct RequiredOutput {
    cie: f64,
    cie_max: f64,
    see_max: f64,
    requirements: Option<Vec<RequiredSee>>,
}

pub(crate) fn run_required(args: RequiredArgs) -> Result<(), AppError> {
    let requirements = required_see(args.cie, args.cie_max, args.see_max);

    if args.json {
        return print_json(&RequiredOutput {
            cie: args.cie,
            cie_max: args.cie_max,
            see_max: args.see_max,
            requirements,
        });
    }

    match requirements {
        Some(rows) => {
            println!(
                "SEE needed with CIE {:.2} / {} (SEE out of {})",
                args.cie, args.cie_max, args.see_max
            );
            render_simple_rows(&rows, args.see_max, "");
        }
        None => println!("Enter a CIE total above zero to see required SEE marks."),
    }
    Ok(())
}

#[derive(Serialize)]
struct LadderOutput {
    ladder: Option<ProbabilityLadder>,
    recommendation: Recommendation,
}

pub(crate) fn run_predict(config: &AppConfig, args: PredictArgs) -> Result<(), AppError> {
    let engine = GradingEngine::new(config.probability.clone());
    let report = evaluate_sheet(&engine, config, &args.sheet, args.catalog)?;

    if let Some(target) = args.target {
        let result = engine.forecast(&report.courses, target);
        info!(target, probability = result.probability, "forecast ready");
        if args.json {
            return print_json(&result);
        }
        render_forecast(&result);
        return Ok(());
    }

    let ladder = engine.forecast_ladder(&report.courses);
    let recommendation = recommend(ladder.as_ref());

    if args.json {
        return print_json(&LadderOutput {
            ladder,
            recommendation,
        });
    }

    match &ladder {
        Some(ladder) => render_ladder(ladder),
        None => println!("No CIE marks entered yet."),
    }
    println!("\n{}", recommendation.title);
    println!("  {}", recommendation.message);
    Ok(())
}

fn evaluate_sheet(
    engine: &GradingEngine,
    config: &AppConfig,
    sheet_path: &Path,
    catalog_path: Option<PathBuf>,
) -> Result<SemesterReport, AppError> {
    let catalog = load_catalog(config, catalog_path)?;
    let sheet = read_sheet(sheet_path)?;
    let entries = sheet.resolve(&catalog)?;
    let report = engine.evaluate_semester(&entries);
    info!(courses = report.courses.len(), sgpa = report.sgpa, "mark sheet graded");
    Ok(report)
}

fn render_report(report: &SemesterReport) {
    for evaluation in &report.courses {
        render_course(evaluation);
    }
    println!(
        "\nSGPA {:.2} over {} credits",
        report.sgpa, report.total_credits
    );
}

fn render_course(evaluation: &CourseEvaluation) {
    let result = &evaluation.result;
    let status = if result.is_pass {
        "PASS"
    } else if evaluation.see_entered {
        "FAIL"
    } else {
        "SEE pending"
    };
    println!(
        "{:<10} CIE {:>6.2}  score {:>6.2}  {:<2} ({:>2})  {}",
        evaluation.course.code,
        result.total_cie,
        result.score,
        result.grade,
        result.points,
        status
    );

    match &evaluation.required_see {
        Some(RequiredSeeTable::Simple(rows)) => {
            render_simple_rows(rows, evaluation.course.see_max, "    ");
        }
        Some(RequiredSeeTable::Integrated(rows)) => {
            for row in rows {
                let note = row.note.map(|note| note.message()).unwrap_or("");
                println!(
                    "    {:<2} theory {:>5} + lab {:>5} = {:>5}  {}",
                    row.grade, row.required_theory, row.required_lab, row.required, note
                );
            }
        }
        None => {}
    }
}

fn render_simple_rows(rows: &[RequiredSee], see_max: f64, indent: &str) {
    for row in rows {
        let note = row.note.map(|note| note.message()).unwrap_or("");
        println!(
            "{indent}{:<2} needs {:>5} / {}  {}",
            row.grade, row.required, see_max, note
        );
    }
}

fn render_forecast(result: &ProbabilityResult) {
    println!(
        "Target {:.2}: {}% ({})",
        result.target,
        result.probability,
        if result.achievable {
            "achievable"
        } else {
            "not achievable"
        }
    );
    println!("  {}", result.effort_description);
    println!(
        "  ~{} study hours, {:.2} grade points needed per remaining credit",
        result.study_hours_estimate, result.required_grade_points
    );
    for requirement in &result.course_requirements {
        println!(
            "  {:<10} CIE {:>6.2}  {:<2} needs SEE {:>5} ({:.0}%)  {}",
            requirement.code,
            requirement.current_cie,
            requirement.required_grade,
            requirement.required_see,
            requirement.required_see_percent,
            requirement.difficulty.label()
        );
    }
}

fn render_ladder(ladder: &ProbabilityLadder) {
    println!(
        "Analyzed {} of {} courses",
        ladder.courses_analyzed, ladder.total_courses
    );
    for entry in &ladder.targets {
        println!(
            "  {:<11} {:>3}%  {:<14} ~{:>3} h  {}",
            entry.target.label,
            entry.result.probability,
            if entry.result.achievable {
                "achievable"
            } else {
                "out of reach"
            },
            entry.result.study_hours_estimate,
            entry.result.effort_description
        );
    }
}
