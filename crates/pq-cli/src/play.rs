//! The interactive game loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use pq_core::{QuizError, Session, Turn, patterns};

/// Walk the built-in tree over stdin/stdout until the session ends or the
/// input stream closes.
///
/// Invalid input re-issues the same prompt from inside the loop, so
/// arbitrarily long streams of bad answers run in constant memory.
pub fn run() -> Result<(), String> {
    let mut session = Session::new(patterns::tree());

    println!("{}", "Start".bold());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        let Some(question) = session.current() else {
            break;
        };
        print!("{} (yes/no) ", question.text);
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF: a closed stream quits the game
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.answer(&line) {
            Ok(Turn::Advanced) => {}
            Ok(Turn::Restarted) => {
                println!("Resetting game...");
                println!("{}", "Start".bold());
            }
            Ok(Turn::Ended) => println!("{}", "End".bold()),
            Err(QuizError::InvalidAnswer(_)) => {
                println!("{}", "Invalid answer. Please answer 'yes' or 'no'.".yellow());
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(())
}
