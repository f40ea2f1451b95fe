//! Display functions for command results

use super::formatters::{
    colorize_guess, colorize_known_letter, create_progress_bar, letters_in_mask, status_label,
};
use crate::commands::SolveReport;
use crate::core::{GuessWord, Rules, Word};
use crate::solver::{LetterStats, LetterStatus, Recommendation};
use colored::Colorize;

/// Print the guesses entered so far, colored like the game board
pub fn print_guesses(guesses: &[GuessWord]) {
    println!("{}", "[Input words]".bright_cyan().bold());
    for guess in guesses {
        println!("{}", colorize_guess(guess));
    }
}

/// Print the words that can still be the answer
pub fn print_candidates(candidates: &[&Word]) {
    println!(
        "\n{} {}",
        "[Solution candidates]".bright_cyan().bold(),
        format!("({})", candidates.len()).bright_black()
    );

    if candidates.is_empty() {
        println!(
            "{}",
            "No word matches every guess. Check the markers in your input.".red()
        );
        return;
    }

    for word in candidates {
        println!("{word}");
    }
}

/// Print the ranked next-guess suggestions
pub fn print_recommendations(recommendations: &[Recommendation<'_>]) {
    println!(
        "\n{}",
        "[Words that contain many unused and frequently occurring letters]"
            .bright_cyan()
            .bold()
    );

    if recommendations.is_empty() {
        println!("{}", "No suggestion: no word reveals anything new.".yellow());
        return;
    }

    for (rank, r) in recommendations.iter().enumerate() {
        let marker = if r.is_candidate {
            "●".green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{:>3}. {} {} {}",
            rank + 1,
            marker,
            r.word.text().bright_white().bold(),
            format!("{:>3}", r.score).bright_yellow()
        );
    }
    println!("{}", "     ● = could be the answer".bright_black());
}

/// Print the per-letter status, frequency and score table
pub fn print_letter_stats(stats: &LetterStats, candidate_count: usize) {
    println!("\n{}", "[Letters]".bright_cyan().bold());
    println!("  letter  status    freq  score");

    for (letter, stat) in stats.iter() {
        let bar = create_progress_bar(stat.frequency as f64, candidate_count as f64, 20);
        println!(
            "  {}       {:<8} {:>5}  {:>5}  {}",
            colorize_known_letter(letter, stat.status),
            status_label(stat.status),
            stat.frequency,
            stat.score,
            bar.green()
        );
    }

    println!(
        "\n  Known absent: {}",
        letters_in_mask(stats.mask_with(LetterStatus::Absent)).bright_black()
    );
    println!(
        "  Still unused: {}",
        letters_in_mask(stats.mask_with(LetterStatus::Unused))
    );
    if stats.is_exhausted() {
        println!("  {}", "Every remaining letter scores zero.".yellow());
    }
}

/// Explain how guesses are encoded on the command line
pub fn print_usage(rules: &Rules) {
    let (correct, present) = (rules.correct_marker(), rules.present_marker());
    println!(
        "The command line arguments should be the words entered into Wordle.\n\
         Add a '{correct}' after the letter that is green in Wordle.\n\
         Add a '{present}' after the letter that is yellow in Wordle.\n\
         For example, if the answer is 'grade' and you typed 'shine' and 'about', \
         run `wordle_assist 'shine{correct}' 'a{present}bout'`."
    );
}

/// Print the result of a one-shot solve
pub fn print_solve_report(report: &SolveReport<'_>, rules: &Rules) {
    if report.guesses.is_empty() {
        print_usage(rules);
    } else {
        print_guesses(&report.guesses);
        print_candidates(&report.analysis.candidates);
    }

    print_recommendations(&report.analysis.recommendations);

    if report.show_letters {
        print_letter_stats(&report.analysis.stats, report.analysis.candidates.len());
    }
}
