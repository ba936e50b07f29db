//! `lvlog` binary: log one leveled line from the command line.
//!
//! Usage:
//!   lvlog info "service started"
//!   lvlog --output-level warn --flags date,time warn "disk almost full"
//!   lvlog fatal "cannot continue"        (exits with status 1)

use clap::Parser;
use lvlog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
