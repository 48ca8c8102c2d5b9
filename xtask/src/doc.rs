use anyhow::Result;
use colored::Colorize;

use crate::step;

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let mut args = vec!["doc", "--workspace", "--no-deps", "--features", "unicornhathd/std"];
    if open {
        args.push("--open");
    }
    step::required("Documentation build", &args)?;

    if !open {
        println!(
            "   {}",
            "Open target/doc/unicornhathd/index.html in your browser".dimmed()
        );
        println!("   {}", "Or run 'cargo run -p xtask -- doc --open'".dimmed());
        println!();
    }

    Ok(())
}
