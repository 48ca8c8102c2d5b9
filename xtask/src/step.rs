use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// Outcome of one cargo invocation.
pub struct Step {
    pub output: Output,
    pub secs: f64,
}

impl Step {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }
}

/// Run `cargo <args>` and time it.
pub fn cargo(label: &str, args: &[&str]) -> Result<Step> {
    println!("{}", format!("  {label}...").cyan());
    let start = Instant::now();
    let output = Command::new("cargo")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;
    Ok(Step {
        output,
        secs: start.elapsed().as_secs_f64(),
    })
}

/// Like [`cargo`], but a failure prints stderr and aborts the task.
pub fn required(label: &str, args: &[&str]) -> Result<Step> {
    let step = cargo(label, args)?;
    if !step.success() {
        eprintln!("{}", format!("  ✗ {label} failed").red().bold());
        eprintln!();
        eprintln!("{}", step.stderr());
        anyhow::bail!("{label} failed");
    }
    println!("{}", format!("  ✓ {label} passed in {:.2}s", step.secs).green());
    println!();
    Ok(step)
}
