//! wordpass binary entry point.

use std::process::ExitCode;

use wordpass::cli;
use wordpass::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::from(cli::EXIT_FATAL)
        }
    }
}
