//! Generate command implementation
//!
//! Writes every manifest sprite under the output root and reports each file
//! as it lands.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use placegen_backend_texture::{generate_all, PngConfig};
use placegen_spec::{manifest, SpriteSpec};

/// First summary line printed after a successful run.
pub const SUCCESS_MESSAGE: &str = "Placeholder sprites created successfully!";

/// Second summary line printed after a successful run.
pub const REPLACE_HINT: &str = "Replace these with actual game sprites when available.";

/// Run the generate command against the built-in manifest, printing to stdout.
///
/// # Arguments
/// * `out_root` - Directory the `resources/sprites/` tree is written under
///
/// # Returns
/// Exit code: 0 success
pub fn run(out_root: &Path) -> Result<ExitCode> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(out_root, &manifest(), &mut out)
}

/// Run the generate command for `sprites`, writing progress to `out`.
pub fn run_with<W: Write>(
    out_root: &Path,
    sprites: &[SpriteSpec],
    out: &mut W,
) -> Result<ExitCode> {
    generate_all(out_root, sprites, &PngConfig::default(), |sprite| {
        writeln!(out, "Created placeholder: {}", sprite.path)
    })
    .context("placeholder generation failed")?;

    writeln!(out)?;
    writeln!(out, "{}", SUCCESS_MESSAGE.green())?;
    writeln!(out, "{}", REPLACE_HINT)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
