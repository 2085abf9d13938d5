//! Hangman - CLI
//!
//! Console Hangman with TUI and line modes, plus a solver that can play
//! rounds on its own.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    art::LifeArt,
    commands::{SolveConfig, run_benchmark, run_simple, solve_word},
    core::{DEFAULT_LIVES, GameConfig, MAX_LIVES, SecretWord},
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyType},
    wordlists::{WORDS, loader::words_from_slice},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Lives per round (1-26); the gallows drawing is spread over them
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_LIVES,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_LIVES))
    )]
    lives: u32,

    /// Seed for word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Solver strategy: frequency (default), entropy, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Show the secret word when the round starts
        #[arg(long)]
        reveal: bool,
    },

    /// Simple CLI mode (line-based, no TUI)
    Simple {
        /// Show the secret word when the round starts
        #[arg(long)]
        reveal: bool,
    },

    /// Let the solver play a specific secret word
    Solve {
        /// The secret word
        word: String,

        /// Show candidate counts for each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Let the solver play every word in the list
    Benchmark {
        /// Limit number of words to play
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the word list based on the -w flag
///
/// - "embedded": words compiled into the binary
/// - "<path>": custom list from file
fn load_words(wordlist_mode: &str) -> Result<Vec<SecretWord>> {
    use hangman::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let words = load_words(&cli.wordlist)?;
    tracing::info!(words = words.len(), source = %cli.wordlist, "word list loaded");

    let config = GameConfig::new(words, LifeArt::default(), cli.lives)?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { reveal: false });

    match command {
        Commands::Play { reveal } => run_play_command(&config, &cli.strategy, rng, reveal),
        Commands::Simple { reveal } => {
            let mut rng = rng;
            run_simple(&config, &mut rng, reveal)
        }
        Commands::Solve { word, verbose } => {
            run_solve_command(&config, &cli.strategy, word, verbose)
        }
        Commands::Benchmark { limit } => {
            run_benchmark_command(&config, &cli.strategy, limit);
            Ok(())
        }
    }
}

fn run_play_command(
    config: &GameConfig,
    strategy_name: &str,
    rng: StdRng,
    reveal: bool,
) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(config, StrategyType::from_name(strategy_name), rng, reveal)?;
    run_tui(app)
}

fn run_solve_command(
    config: &GameConfig,
    strategy_name: &str,
    word: String,
    verbose: bool,
) -> Result<()> {
    let solver = Solver::new(StrategyType::from_name(strategy_name), config.word_list());
    let solve_config = SolveConfig {
        target: word,
        lives: config.initial_lives(),
    };

    let result = solve_word(solve_config, &solver)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, strategy_name: &str, limit: Option<usize>) {
    let strategy = StrategyType::from_name(strategy_name);
    println!(
        "Running {} benchmark on {} words with {} lives...",
        strategy.name(),
        limit.map_or(config.word_list().len(), |n| n.min(config.word_list().len())),
        config.initial_lives()
    );

    let solver = Solver::new(strategy, config.word_list());
    let words = config.word_list();
    let targets = &words[..limit.unwrap_or(words.len()).min(words.len())];

    let result = run_benchmark(&solver, targets, config.initial_lives(), true);
    print_benchmark_result(&result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_play() {
        let cli = Cli::try_parse_from(["hangman"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.lives, DEFAULT_LIVES);
        assert_eq!(cli.wordlist, "embedded");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["hangman", "solve", "otter", "--lives", "3", "-s", "entropy"])
                .unwrap();
        assert_eq!(cli.lives, 3);
        assert_eq!(cli.strategy, "entropy");
        assert!(matches!(cli.command, Some(Commands::Solve { ref word, .. }) if word == "otter"));
    }

    #[test]
    fn lives_flag_bounded() {
        let cli = Cli::try_parse_from(["hangman", "--lives", "26"]).unwrap();
        assert_eq!(cli.lives, MAX_LIVES);

        assert!(Cli::try_parse_from(["hangman", "--lives", "0"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "--lives", "27"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "simple", "--lives", "2000000000"]).is_err());
    }

    #[test]
    fn embedded_words_load() {
        let words = load_words("embedded").unwrap();
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn missing_word_file_errors() {
        assert!(load_words("/no/such/list.txt").is_err());
    }

    #[test]
    fn empty_word_file_rejected() {
        let path = std::env::temp_dir().join(format!("hangman-empty-{}.txt", std::process::id()));
        std::fs::write(&path, "\n\n").unwrap();
        let words = load_words(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        let result = GameConfig::new(words, LifeArt::default(), DEFAULT_LIVES);
        assert!(result.is_err());
    }
}
