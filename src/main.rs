use std::process::ExitCode;

use photo_sort::cli;

mod app;
mod logging;

fn main() -> ExitCode {
    // Usage errors exit with status 2 inside clap.
    let args = cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(app::exit_code(&e)),
    }
}
