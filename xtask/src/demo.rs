use anyhow::Result;
use colored::Colorize;

use crate::step;

const ARGS: &[&str] = &[
    "run",
    "-p",
    "unicornhathd",
    "--example",
    "rainbow",
    "--features",
    "std,tracing",
];

/// Run the rainbow example against the mock bus with trace logging.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "🌈 Running rainbow demo...".cyan().bold());
    println!();

    // Inherited by the cargo child and from there by the example.
    std::env::set_var("RUST_LOG", "trace");
    let demo = step::required("Rainbow demo", ARGS)?;

    print!("{}", demo.stdout());
    eprint!("{}", demo.stderr().dimmed());
    Ok(())
}
