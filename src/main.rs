use std::process::ExitCode;

use prepare_metadata::{cli, ui::output};

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(output::format_error_chain(&err));
            ExitCode::FAILURE
        }
    }
}
