//! Linear address to page table indices calculator.
//!
//! ```text
//! linear <hex address>
//! ```
//!
//! Prints the PML4, PDPT and PD indices and the page offset of the address
//! for 4 KiB and for 2 MiB pages. Set `LINEAR_LOG` to adjust stderr logging.

mod cli;
mod logger;

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = logger::StderrLogger::init(logger::level_from_env()) {
        eprintln!("failed to install logger: {e}");
    }

    let mut out = io::stdout().lock();
    let result = cli::run(env::args_os().skip(1), &mut out)
        .and_then(|outcome| out.flush().map(|()| outcome));

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            log::error!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
