mod cli;
mod commands;
mod infra;

use sgpa_calc::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
