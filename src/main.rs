//! Dominion simulator - Main Binary
//!
//! Play a single game with full logging, or battle strategies against each
//! other over many seeded games.

use clap::{Parser, Subcommand, ValueEnum};
use dominion_sim::{
    game::{Game, GameOptions, PriorityStrategy, VerbosityLevel},
    loader::BoardLoader,
    tournament::{run_battle_with_options, Strategy},
    DominionError, Result,
};
use std::path::{Path, PathBuf};

/// Built-in strategies
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyType {
    /// Always chooses the first option (for testing)
    Zero,
    /// Makes random choices
    Random,
    /// Money-density heuristic
    BigMoney,
}

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

/// Strategy selection shared by both subcommands
#[derive(clap::Args, Debug)]
struct Players {
    /// Player 1 strategy
    #[arg(long, value_enum, default_value = "big-money")]
    p1: StrategyType,

    /// Player 2 strategy
    #[arg(long, value_enum, default_value = "big-money")]
    p2: StrategyType,

    /// JSON priority-list strategy for player 1 (overrides --p1)
    #[arg(long, value_name = "STRATEGY_FILE")]
    p1_file: Option<PathBuf>,

    /// JSON priority-list strategy for player 2 (overrides --p2)
    #[arg(long, value_name = "STRATEGY_FILE")]
    p2_file: Option<PathBuf>,

    /// Start with Shelters instead of Estates
    #[arg(long)]
    shelters: bool,

    /// Round limit before the game is called
    #[arg(long)]
    max_turns: Option<u32>,
}

impl Players {
    fn strategies(&self) -> Result<Vec<Strategy>> {
        Ok(vec![
            resolve_strategy(self.p1, self.p1_file.as_deref())?,
            resolve_strategy(self.p2, self.p2_file.as_deref())?,
        ])
    }

    fn options(&self, seed: u64) -> GameOptions {
        let options = GameOptions::default().with_seed(seed).with_shelters(self.shelters);
        match self.max_turns {
            Some(max_turns) => options.with_max_turns(max_turns),
            None => options,
        }
    }
}

fn resolve_strategy(kind: StrategyType, file: Option<&Path>) -> Result<Strategy> {
    if let Some(path) = file {
        let content = std::fs::read_to_string(path)?;
        let strategy: PriorityStrategy = serde_json::from_str(&content)
            .map_err(|e| DominionError::SerializationError(format!("{}: {e}", path.display())))?;
        return Ok(Strategy::Priority(strategy));
    }
    Ok(match kind {
        StrategyType::Zero => Strategy::Zero,
        StrategyType::Random => Strategy::Random,
        StrategyType::BigMoney => Strategy::BigMoney,
    })
}

#[derive(Parser)]
#[command(name = "dominion")]
#[command(about = "Dominion simulator - AI vs AI games and battles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and print its log
    Play {
        /// Board file (one kingdom card per line, `Event: ...` for landscapes)
        #[arg(value_name = "BOARD")]
        board: PathBuf,

        #[command(flatten)]
        players: Players,

        /// Set random seed for deterministic games
        #[arg(long)]
        seed: Option<u64>,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,
    },

    /// Run many games in parallel and report win rates
    Battle {
        /// Board file
        #[arg(value_name = "BOARD")]
        board: PathBuf,

        #[command(flatten)]
        players: Players,

        /// Number of games to play
        #[arg(long, short = 'g', default_value_t = 1000)]
        games: usize,

        /// Master seed; every game derives its own seed from it
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            board,
            players,
            seed,
            verbosity,
        } => run_play(&board, &players, seed, verbosity.into()),
        Commands::Battle {
            board,
            players,
            games,
            seed,
            json,
        } => run_battle_command(&board, &players, games, seed, json),
    }
}

fn run_play(board_path: &Path, players: &Players, seed: Option<u64>, verbosity: VerbosityLevel) -> Result<()> {
    let board = BoardLoader::load_from_file(board_path)?;
    let seed = seed.unwrap_or_else(rand::random);
    if verbosity >= VerbosityLevel::Minimal {
        println!("=== Dominion ===");
        println!("Board: {}", board_path.display());
        println!("Kingdom: {}", board.kingdom.join(", "));
        println!("Using seed: {seed}\n");
    }

    let controllers = players
        .strategies()?
        .iter()
        .enumerate()
        .map(|(idx, strategy)| strategy.build(seed.wrapping_add(idx as u64 + 1)))
        .collect::<Result<Vec<_>>>()?;
    let options = players.options(seed).with_verbosity(verbosity);
    let mut game = Game::new(controllers, &board, &options)?;
    let result = game.run_game()?;

    if verbosity >= VerbosityLevel::Minimal {
        println!("\n=== Final Scores ===");
        let metrics = &result.metrics;
        for (idx, name) in metrics.player_names.iter().enumerate() {
            println!(
                "  {name}: {} VP in {} turns",
                metrics.final_vp[idx], metrics.turns_taken[idx]
            );
        }
    }
    Ok(())
}

fn run_battle_command(board_path: &Path, players: &Players, games: usize, seed: u64, json: bool) -> Result<()> {
    let board = BoardLoader::load_from_file(board_path)?;
    let strategies = players.strategies()?;
    if !json {
        println!("=== Dominion - Battle Mode ===\n");
        println!("Board: {}", board_path.display());
        println!(
            "Strategies: {}",
            strategies.iter().map(Strategy::name).collect::<Vec<_>>().join(" vs ")
        );
        println!("Running {games} games with seed {seed}\n");
    }

    let report = run_battle_with_options(&board, &strategies, games, &players.options(seed))?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
