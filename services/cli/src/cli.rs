use crate::commands::{
    run_catalog, run_grade, run_predict, run_required, CatalogArgs, GradeArgs, PredictArgs,
    RequiredArgs,
};
use clap::{Parser, Subcommand};
use sgpa_calc::config::AppConfig;
use sgpa_calc::error::AppError;
use sgpa_calc::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "sgpa",
    about = "Grade first-year CIE/SEE marks, compute SGPA and forecast target SGPAs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the course catalog
    Catalog(CatalogArgs),
    /// Grade a mark sheet and compute the SGPA
    Grade(GradeArgs),
    /// SEE marks needed for each grade given a CIE total
    Required(RequiredArgs),
    /// Forecast the chance of reaching a target SGPA
    Predict(PredictArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    debug!(environment = ?config.environment, command = ?cli.command, "starting");

    match cli.command {
        Command::Catalog(args) => run_catalog(&config, args),
        Command::Grade(args) => run_grade(&config, args),
        Command::Required(args) => run_required(args),
        Command::Predict(args) => run_predict(&config, args),
    }
}
