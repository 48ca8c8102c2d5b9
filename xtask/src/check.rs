use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step;

/// Bare-metal target the driver must keep building for.
const EMBEDDED_TARGET: &str = "thumbv7em-none-eabihf";

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    step::required("Host build (all targets)", &["check", "--workspace", "--all-targets"])?;

    // no_std: the library crates must not pull in std unless asked to.
    step::required(
        "platform (no_std)",
        &["check", "-p", "platform", "--target", EMBEDDED_TARGET],
    )?;
    step::required(
        "unicornhathd (no_std)",
        &["check", "-p", "unicornhathd", "--target", EMBEDDED_TARGET],
    )?;
    step::required(
        "unicornhathd (no_std + defmt)",
        &[
            "check",
            "-p",
            "unicornhathd",
            "--target",
            EMBEDDED_TARGET,
            "--features",
            "defmt",
        ],
    )?;

    let clippy = step::cargo(
        "Clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )?;
    if clippy.success() {
        println!("{}", format!("  ✓ Clippy passed in {:.2}s", clippy.secs).green());
    } else {
        // Reported, not fatal.
        eprintln!("{}", "  ⚠ Clippy warnings found".yellow().bold());
        eprintln!();
        eprintln!("{}", clippy.stderr());
    }
    println!();

    let fmt = step::cargo("Formatting", &["fmt", "--all", "--check"])?;
    if fmt.success() {
        println!("{}", "  ✓ Formatting check passed".green());
    } else {
        eprintln!("{}", "  ⚠ Formatting issues found".yellow().bold());
        eprintln!("     Run 'cargo fmt --all' to fix");
    }
    println!();

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
