//! Avail - Booking availability inspection CLI

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = avail_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
