//! Wordle Belief - CLI
//!
//! Daily Wordle-style puzzle with TUI and line modes. The board shows the
//! player's own letter beliefs until the round ends.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use wordle_belief::{
    calendar,
    commands::{compare_words, run_simple},
    config::GameConfig,
    game::GameSession,
    output::print_comparison,
    storage::JsonFileStore,
    wordlists::{ALLOWED, WordList, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_belief",
    about = "Daily word puzzle where the board shows what you believe",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play a fixed day instead of today's puzzle
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    day: Option<i64>,

    /// Play a random day
    #[arg(long, global = true, conflicts_with = "day")]
    random_day: bool,

    /// Answer list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Where to keep game state (overrides the config file)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Number of guesses per round (overrides the config file)
    #[arg(long, global = true)]
    max_rounds: Option<usize>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show the ground-truth colors of a guess against any solution
    Compare {
        /// Guessed word
        guess: String,

        /// Solution to compare against
        solution: String,
    },
}

fn setup_logging(verbose: bool, log_file: Option<&PathBuf>, to_stderr: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact();

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        let subscriber = builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("Failed to set subscriber")?;
    } else if to_stderr {
        let subscriber = builder.with_writer(std::io::stderr).finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("Failed to set subscriber")?;
    }
    Ok(())
}

/// Load the answer list based on the -w flag
///
/// - "embedded": the lists compiled into the binary
/// - "<path>": answers from a file, accepted guesses are the file plus the
///   embedded allowed list
fn load_wordlist(mode: &str) -> Result<WordList> {
    match mode {
        "embedded" => Ok(WordList::embedded()),
        path => {
            let answers = load_from_file(path)?;
            WordList::new(answers, words_from_slice(ALLOWED))
                .with_context(|| format!("Failed to build word list from {path}"))
        }
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(state_file) = &cli.state_file {
        config.state_file.clone_from(state_file);
    }
    if let Some(max_rounds) = cli.max_rounds {
        config.max_rounds = max_rounds;
    }
    config.validate()?;
    Ok(config)
}

/// Resolve which day to play and whether it follows the calendar
fn choose_day(cli: &Cli, config: &GameConfig, wordlist: &WordList) -> (i64, bool) {
    if let Some(day) = cli.day {
        (day, false)
    } else if cli.random_day {
        let day = rand::rng().random_range(0..wordlist.answer_count() as i64);
        (day, false)
    } else {
        (calendar::today_index(config.start_date), true)
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let is_tui = matches!(command, Commands::Play);
    setup_logging(cli.verbose, cli.log_file.as_ref(), !is_tui)?;

    match command {
        Commands::Compare { guess, solution } => {
            let result = compare_words(&guess, &solution)?;
            print_comparison(&result);
            Ok(())
        }
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_belief::interactive::{App, run_tui};

    let config = load_config(cli)?;
    let wordlist = load_wordlist(&cli.wordlist)?;
    let (day, follow_calendar) = choose_day(cli, &config, &wordlist);
    info!(day, state_file = %config.state_file.display(), "Starting TUI");

    let store = JsonFileStore::open(&config.state_file);
    let session = GameSession::new(&wordlist, store, day, config.max_rounds);
    let app = App::new(session, &config, follow_calendar);
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let wordlist = load_wordlist(&cli.wordlist)?;
    let (day, follow_calendar) = choose_day(cli, &config, &wordlist);
    info!(day, state_file = %config.state_file.display(), "Starting line mode");

    let store = JsonFileStore::open(&config.state_file);
    let mut session = GameSession::new(&wordlist, store, day, config.max_rounds);
    run_simple(&mut session, &config, follow_calendar).map_err(|e| anyhow::anyhow!(e))
}
