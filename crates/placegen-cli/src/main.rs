//! Placeholder sprite generator
//!
//! Writes solid-color stand-in sprites under `resources/sprites/` in the
//! current directory. Takes no options.

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use placegen_cli::commands;

/// Generate solid-color placeholder sprites under resources/sprites/
#[derive(Parser)]
#[command(name = "generate-placeholder-sprites")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let Cli {} = Cli::parse();

    match commands::generate::run(Path::new(".")) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
