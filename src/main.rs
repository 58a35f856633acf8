//! Wordle autoplay - CLI
//!
//! Plays Wordle against a chosen answer, either with the constraint-filtering
//! solver or with guesses typed at the terminal, and suggests guesses for games
//! played elsewhere.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use wordle_autoplay::{
    commands::{
        AnswerChoice, BenchmarkConfig, PlayOutcome, pick_answer, run_assist, run_benchmark,
        run_play, solve_word,
    },
    core::{ScoringMode, Vocabulary},
    game::{Evaluator, GameConfig},
    output::{print_benchmark_result, print_solve_report},
    solver::Solver,
    wordlists,
};

#[derive(Parser)]
#[command(
    name = "wordle_autoplay",
    about = "Wordle answer evaluator and constraint-filtering solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'builtin' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = wordlists::BUILTIN)]
    wordlist: String,

    /// Feedback rules for repeated letters: simple (default) or canonical
    #[arg(short, long, global = true, default_value = "simple")]
    scoring: String,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the solver play against an answer
    Solve {
        /// The secret answer
        word: Option<String>,

        /// Pick the answer at random from the word list
        #[arg(short, long, conflicts_with = "word")]
        random: bool,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },

    /// Guess the answer yourself
    Play {
        /// The secret answer (ask someone else to pick it!)
        word: Option<String>,

        /// Pick the answer at random from the word list
        #[arg(short, long, conflicts_with = "word")]
        random: bool,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },

    /// Suggest guesses for a game played elsewhere from its reported feedback
    Assist,

    /// Run the solver against every word in the list
    Benchmark {
        /// Only test the first N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Turn the answer arguments into a choice; never falls back to a default word
fn answer_choice(word: Option<String>, random: bool, seed: Option<u64>) -> Result<AnswerChoice> {
    match (word, random) {
        (Some(word), false) => Ok(AnswerChoice::Given(word)),
        (None, true) => Ok(AnswerChoice::Random { seed }),
        _ => bail!("give an answer WORD or pass --random"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let scoring = ScoringMode::from_name(&cli.scoring)
        .with_context(|| format!("unknown scoring mode '{}'", cli.scoring))?;
    let game = GameConfig::default().with_scoring(scoring);

    let vocabulary = wordlists::resolve(&cli.wordlist)
        .with_context(|| format!("could not load word list '{}'", cli.wordlist))?;
    log::debug!("vocabulary has {} words", vocabulary.len());

    match cli.command {
        Commands::Solve { word, random, seed } => {
            run_solve_command(&vocabulary, answer_choice(word, random, seed)?, game)
        }
        Commands::Play { word, random, seed } => {
            run_play_command(&vocabulary, answer_choice(word, random, seed)?, game)
        }
        Commands::Assist => run_assist_command(&vocabulary, scoring),
        Commands::Benchmark { limit } => run_benchmark_command(&vocabulary, limit, game),
    }
}

fn run_solve_command(
    vocabulary: &Vocabulary,
    choice: AnswerChoice,
    game: GameConfig,
) -> Result<()> {
    let answer = pick_answer(vocabulary, &choice)?;
    let report = solve_word(vocabulary, &answer, game).context("solve failed")?;
    print_solve_report(&answer, &report);
    Ok(())
}

fn run_play_command(
    vocabulary: &Vocabulary,
    choice: AnswerChoice,
    game: GameConfig,
) -> Result<()> {
    let answer = pick_answer(vocabulary, &choice)?;
    let mut evaluator = Evaluator::with_config(vocabulary.clone(), &answer, game)?;

    let outcome = run_play(&mut evaluator, io::stdin().lock(), io::stdout().lock())?;
    log::info!("play finished: {outcome:?}");

    if outcome == PlayOutcome::Quit {
        println!("The answer was {}.", evaluator.reveal());
    }
    Ok(())
}

fn run_assist_command(vocabulary: &Vocabulary, scoring: ScoringMode) -> Result<()> {
    let mut solver = Solver::new(vocabulary.clone(), scoring);
    let outcome = run_assist(&mut solver, io::stdin().lock(), io::stdout().lock())
        .context("assist session failed")?;
    log::info!("assist finished: {outcome:?}");
    Ok(())
}

fn run_benchmark_command(
    vocabulary: &Vocabulary,
    limit: Option<usize>,
    game: GameConfig,
) -> Result<()> {
    let total = limit.map_or(vocabulary.len(), |n| n.min(vocabulary.len()));
    println!("Running solver against {total} words...");

    let config = BenchmarkConfig {
        limit,
        game,
        show_progress: true,
    };
    let result = run_benchmark(vocabulary, config)?;
    print_benchmark_result(&result);
    Ok(())
}
