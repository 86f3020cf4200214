//! Binary entrypoint for the `campaignctl` CLI.

use std::process::ExitCode;

use campaignctl::error::AppError;

fn main() -> ExitCode {
    match campaignctl::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(message)) => {
            eprint!("{message}");
            ExitCode::FAILURE
        }
        Err(err) => {
            for violation in err.violations() {
                eprintln!("{violation}");
            }
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
