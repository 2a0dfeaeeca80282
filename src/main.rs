//! Hard Mode Wordle Solver - CLI
//!
//! Runs the letter-frequency hard-mode solver on one word, a random sample,
//! or the whole word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_hardmode::{
    commands::{
        SolveConfig, TestAllConfig, analyze_word, run_benchmark, run_test_all, sample_targets,
        solve_word,
    },
    core::Word,
    output::{
        print_analysis_result, print_benchmark_result, print_solve_result,
        print_test_all_statistics,
    },
    solver::{DEFAULT_MAX_ATTEMPTS, GameConfig, LETTER_FREQUENCIES},
    wordlists::{ANSWERS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_hardmode",
    about = "Hard Mode Wordle solver using letter-frequency scoring",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Attempts allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show scores and candidate counts per turn
        #[arg(short, long)]
        verbose: bool,

        /// Force the first guess instead of letting the solver choose
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Show a word's letter-frequency score and rank
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of top-ranked words to list
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Benchmark solver on a random sample of words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for reproducible samples
        #[arg(short, long)]
        seed: Option<u64>,

        /// Force the first guess instead of letting the solver choose
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Test solver on every word in the list (default)
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Force the first guess instead of letting the solver choose
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Play games one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(loader::words_from_slice(ANSWERS)),
        path => loader::load_from_file(path)
            .with_context(|| format!("failed to read word list {path}")),
    }
}

fn game_config(max_attempts: usize, first_word: Option<&str>) -> Result<GameConfig> {
    let opening = first_word
        .map(Word::new)
        .transpose()
        .context("invalid first word")?;
    Ok(GameConfig::default()
        .with_max_attempts(max_attempts)
        .with_opening(opening))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_str()),
    )
    .init();

    let words = load_wordlist(&cli.wordlist)?;
    log::info!("using {} words", words.len());

    let command = cli.command.unwrap_or(Commands::TestAll {
        limit: None,
        first_word: None,
        sequential: false,
    });

    match command {
        Commands::Solve {
            word,
            verbose,
            first_word,
        } => {
            let config = SolveConfig {
                target: word,
                game: game_config(cli.max_attempts, first_word.as_deref())?,
            };
            let result = solve_word(config, &words, &LETTER_FREQUENCIES)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&word, &words, &LETTER_FREQUENCIES, top)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark {
            count,
            seed,
            first_word,
        } => {
            let config = game_config(cli.max_attempts, first_word.as_deref())?;
            let targets = sample_targets(&words, count, seed);

            println!("Running benchmark on {} random words...", targets.len());
            let result = run_benchmark(&words, &targets, &LETTER_FREQUENCIES, &config);
            print_benchmark_result(&result);
        }
        Commands::TestAll {
            limit,
            first_word,
            sequential,
        } => {
            println!("\n{}", "═".repeat(70));
            println!(" Hard Mode Wordle Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} words", words.len());
            if let Some(word) = &first_word {
                println!("Forced first word: {word}");
            }
            println!();

            let config = TestAllConfig {
                limit,
                game: game_config(cli.max_attempts, first_word.as_deref())?,
                parallel: !sequential,
                show_progress: true,
            };
            let stats = run_test_all(&words, &LETTER_FREQUENCIES, &config);
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
