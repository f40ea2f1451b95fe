//! Simple interactive CLI mode
//!
//! Line-oriented assistant without TUI: one guess token per line.

use crate::core::GuessWord;
use crate::output::formatters::colorize_guess;
use crate::output::{print_candidates, print_letter_stats, print_recommendations};
use crate::solver::Assistant;
use colored::Colorize;
use std::io::{self, Write};

/// Show the full candidate list only when it is this short
const CANDIDATE_DISPLAY_LIMIT: usize = 20;

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum Input<'s> {
    Quit,
    NewGame,
    Undo,
    Letters,
    Guess(&'s str),
}

fn classify(line: &str) -> Input<'_> {
    match line {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "undo" | "u" => Input::Undo,
        "letters" | "l" => Input::Letters,
        token => Input::Guess(token),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(assistant: &Assistant<'_>) -> Result<(), String> {
    let rules = assistant.rules();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Assistant - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type each word you entered into Wordle, with its feedback:");
    println!(
        "  - Put '{}' after a green letter (correct position)",
        rules.correct_marker()
    );
    println!(
        "  - Put '{}' after a yellow letter (wrong position)",
        rules.present_marker()
    );
    println!("  - Leave gray letters unmarked");
    println!(
        "  Example: a{}bou{}t\n",
        rules.present_marker(),
        rules.correct_marker()
    );
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess, 'letters' for the letter table\n");

    let mut guesses: Vec<GuessWord> = Vec::new();
    show_state(assistant, &guesses, false);

    loop {
        let prompt = format!("Guess {}", guesses.len() + 1);
        let line = get_user_input(&prompt)?;

        match classify(&line) {
            Input::Quit => {
                println!("\n👋 Good luck!\n");
                return Ok(());
            }
            Input::NewGame => {
                guesses.clear();
                println!("\n🔄 New game started!\n");
                show_state(assistant, &guesses, false);
            }
            Input::Undo => {
                if let Some(removed) = guesses.pop() {
                    println!(
                        "✓ Removed {} (type {} to restore it)\n",
                        colorize_guess(&removed),
                        removed.encode(rules)
                    );
                    show_state(assistant, &guesses, false);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            Input::Letters => show_state(assistant, &guesses, true),
            Input::Guess("") => {}
            Input::Guess(token) => match assistant.parse_guess(token) {
                Ok(guess) => {
                    guesses.push(guess);
                    show_state(assistant, &guesses, false);
                }
                Err(e) => println!("{} {e}\n", "❌ Invalid guess:".red()),
            },
        }
    }
}

fn show_state(assistant: &Assistant<'_>, guesses: &[GuessWord], show_letters: bool) {
    let analysis = assistant.analyze(guesses);

    println!("────────────────────────────────────────────────────────────");
    if guesses.is_empty() {
        println!("No guesses yet: {} words possible", analysis.candidates.len());
    } else {
        let board: Vec<String> = guesses.iter().map(colorize_guess).collect();
        println!("Board: {}", board.join("  "));
        println!("{} candidates remaining", analysis.candidates.len());
    }
    println!("────────────────────────────────────────────────────────────");

    if !guesses.is_empty() && analysis.candidates.len() <= CANDIDATE_DISPLAY_LIMIT {
        print_candidates(&analysis.candidates);
        if analysis.candidates.is_empty() {
            println!("Type 'undo' to go back, or 'new' to start over.");
        }
    }

    if analysis.candidates.len() == 1 {
        println!(
            "\n🎯 The answer must be {}",
            analysis.candidates[0].text().to_uppercase().green().bold()
        );
    }

    print_recommendations(&analysis.recommendations);

    if show_letters {
        print_letter_stats(&analysis.stats, analysis.candidates.len());
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
