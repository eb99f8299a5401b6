//! CLI frontend for Patternquiz, the design-pattern guessing game.

mod play;

use std::process;

use clap::Parser;

/// Running `pq` with no arguments starts the interactive session right away.
#[derive(Parser)]
#[command(
    name = "pq",
    about = "Patternquiz — think of a design pattern, answer yes/no, let it guess",
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = play::run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
