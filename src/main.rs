use std::process::ExitCode;

fn main() -> ExitCode {
    match scanmate::app::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
