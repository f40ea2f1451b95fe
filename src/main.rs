//! Wordle Assistant - CLI
//!
//! Pass the words you played, with feedback markers, and get the remaining
//! candidates plus the most informative next guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::TypedValueParser};
use log::debug;
use wordle_assist::{
    commands::{SolveConfig, run_simple, solve_guesses},
    core::{DEFAULT_CORRECT_MARKER, DEFAULT_PRESENT_MARKER, DEFAULT_WORD_LENGTH, Rules, Word},
    output::print_solve_report,
    solver::{Assistant, DEFAULT_RECOMMENDATIONS, Recommender},
    wordlists::source_from_name,
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Narrow Wordle candidates from feedback and suggest informative next guesses",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesses with feedback, e.g. `shine*` `a+bout` ('*' = green, '+' = yellow)
    guesses: Vec<String>,

    /// Also print the per-letter status/frequency/score table
    #[arg(short, long)]
    letters: bool,

    /// Wordlist: 'embedded' (default) or path to a text file or JSON array
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of recommendations to show
    #[arg(
        short = 'n',
        long,
        global = true,
        default_value_t = DEFAULT_RECOMMENDATIONS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    top: usize,

    /// Marker placed after a green letter
    #[arg(long, global = true, default_value_t = DEFAULT_CORRECT_MARKER)]
    correct_marker: char,

    /// Marker placed after a yellow letter
    #[arg(long, global = true, default_value_t = DEFAULT_PRESENT_MARKER)]
    present_marker: char,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode
    Play,

    /// Simple CLI mode (enter one guess per line)
    Simple,
}

/// Load the dictionary from the -w flag
fn load_dictionary(wordlist: &str, rules: Rules) -> Result<Vec<Word>> {
    let source = source_from_name(wordlist, rules);
    let words = source
        .get_words()
        .with_context(|| format!("Could not load dictionary {}", source.describe()))?;
    debug!("dictionary {}: {} words", source.describe(), words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rules = Rules::new(DEFAULT_WORD_LENGTH, cli.correct_marker, cli.present_marker)
        .context("Invalid marker configuration")?;
    let dictionary = load_dictionary(&cli.wordlist, rules)?;
    let assistant = Assistant::new(rules, &dictionary, Recommender::new(cli.top));

    match cli.command {
        None => run_solve_command(cli.guesses, cli.letters, &assistant),
        Some(Commands::Simple) => run_simple(&assistant).map_err(|e| anyhow::anyhow!(e)),
        Some(Commands::Play) => run_play_command(&assistant),
    }
}

fn run_solve_command(guesses: Vec<String>, letters: bool, assistant: &Assistant<'_>) -> Result<()> {
    let mut config = SolveConfig::new(guesses);
    config.show_letters = letters;

    let report = solve_guesses(config, assistant).context("Invalid guess")?;
    print_solve_report(&report, assistant.rules());
    Ok(())
}

fn run_play_command(assistant: &Assistant<'_>) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(assistant);
    run_tui(app)
}
