//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match tandoor_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            #[expect(
                clippy::print_stderr,
                reason = "report fatal errors to the terminal before exiting"
            )]
            {
                eprintln!("tandoor: {err}");
            }
            ExitCode::FAILURE
        }
    }
}
