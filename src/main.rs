//! Binary entrypoint for the `parcel-track` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match parcel_track::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
