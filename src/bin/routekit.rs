use routekit::cli::{run_cli, Outcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run_cli() {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::NoMatch) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
