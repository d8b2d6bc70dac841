//! Battle mode: many seeded games between fixed strategies, in parallel
//!
//! Games run concurrently with rayon. Every game derives its seeds from the
//! master seed and its own index, and results are tallied in game order, so
//! the same master seed always yields the same report regardless of how the
//! games were scheduled across threads.

use crate::game::{
    BigMoneyController, Game, GameOptions, PlayerController, PriorityController, PriorityStrategy,
    RandomController, ZeroController,
};
use crate::loader::Board;
use crate::{DominionError, Result};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// A strategy that can build a fresh controller for every game
#[derive(Debug, Clone)]
pub enum Strategy {
    Zero,
    Random,
    BigMoney,
    /// Big Money plus copies of one kingdom card
    BigMoneyWith { card: String, copies: usize },
    Priority(PriorityStrategy),
}

impl Strategy {
    pub fn name(&self) -> String {
        match self {
            Strategy::Zero => "Zero".to_string(),
            Strategy::Random => "Random".to_string(),
            Strategy::BigMoney => "Big Money".to_string(),
            Strategy::BigMoneyWith { card, .. } => format!("Big Money + {card}"),
            Strategy::Priority(strategy) => strategy.name.clone(),
        }
    }

    /// Build a controller; `seed` feeds controllers that randomize
    pub fn build(&self, seed: u64) -> Result<Box<dyn PlayerController>> {
        Ok(match self {
            Strategy::Zero => Box::new(ZeroController::new()),
            Strategy::Random => Box::new(RandomController::with_seed(seed)),
            Strategy::BigMoney => Box::new(BigMoneyController::new()),
            Strategy::BigMoneyWith { card, copies } => {
                Box::new(BigMoneyController::with_support(card, *copies)?)
            }
            Strategy::Priority(strategy) => Box::new(PriorityController::new(strategy)?),
        })
    }
}

/// Aggregated results of a battle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleReport {
    pub strategies: Vec<String>,
    pub games: usize,
    /// Wins per strategy, same order as `strategies`
    pub wins: Vec<usize>,
    pub draws: usize,
    /// Games that aborted with an error (logged and skipped)
    pub failures: usize,
    /// Average rounds over completed games
    pub average_rounds: f64,
    pub elapsed_secs: f64,
}

impl BattleReport {
    pub fn completed(&self) -> usize {
        self.wins.iter().sum::<usize>() + self.draws
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DominionError::SerializationError(e.to_string()))
    }
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let completed = self.completed();
        let percent = |n: usize| {
            if completed == 0 {
                0.0
            } else {
                100.0 * n as f64 / completed as f64
            }
        };

        writeln!(f, "=== Battle Complete ===")?;
        writeln!(f, "Games played: {completed} of {}", self.games)?;
        if self.failures > 0 {
            writeln!(f, "Failed games: {}", self.failures)?;
        }
        writeln!(f, "Average rounds: {:.1}", self.average_rounds)?;
        writeln!(f, "Elapsed time: {:.2}s", self.elapsed_secs)?;
        writeln!(f)?;
        writeln!(f, "=== Win Rates ===")?;
        for (name, wins) in self.strategies.iter().zip(&self.wins) {
            writeln!(f, "  {name}: {wins} ({:.1}%)", percent(*wins))?;
        }
        write!(f, "  Draws: {} ({:.1}%)", self.draws, percent(self.draws))
    }
}

/// Outcome of one completed game: winning strategy index and rounds played
type GameOutcome = (Option<usize>, u32);

/// Run `games` games between `strategies` with the default options
pub fn run_battle(board: &Board, strategies: &[Strategy], games: usize, seed: u64) -> Result<BattleReport> {
    run_battle_with_options(board, strategies, games, &GameOptions::default().with_seed(seed))
}

/// Run a battle; `options.seed` is the master seed
///
/// Seat order rotates from game to game so no strategy always goes first.
pub fn run_battle_with_options(
    board: &Board,
    strategies: &[Strategy],
    games: usize,
    options: &GameOptions,
) -> Result<BattleReport> {
    if !(2..=6).contains(&strategies.len()) {
        return Err(DominionError::InvalidAction(format!(
            "a battle needs 2-6 strategies, got {}",
            strategies.len()
        )));
    }
    // Surface unknown cards once, up front, instead of failing every game
    for strategy in strategies {
        strategy.build(0)?;
    }

    let start = Instant::now();
    let outcomes: Vec<Result<GameOutcome>> = (0..games)
        .into_par_iter()
        .map(|game_idx| play_one(board, strategies, game_idx, options))
        .collect();

    let mut wins = vec![0; strategies.len()];
    let mut draws = 0;
    let mut failures = 0;
    let mut total_rounds = 0u64;
    for (game_idx, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok((winner, rounds)) => {
                total_rounds += u64::from(rounds);
                match winner {
                    Some(strategy) => wins[strategy] += 1,
                    None => draws += 1,
                }
            }
            Err(e) => {
                eprintln!("Warning: Game {game_idx} failed: {e}");
                failures += 1;
            }
        }
    }

    let completed = games - failures;
    Ok(BattleReport {
        strategies: strategies.iter().map(Strategy::name).collect(),
        games,
        wins,
        draws,
        failures,
        average_rounds: if completed == 0 {
            0.0
        } else {
            total_rounds as f64 / completed as f64
        },
        elapsed_secs: start.elapsed().as_secs_f64(),
    })
}

fn play_one(board: &Board, strategies: &[Strategy], game_idx: usize, options: &GameOptions) -> Result<GameOutcome> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(options.seed.wrapping_add(game_idx as u64));
    let game_seed: u64 = rng.gen();

    let n = strategies.len();
    let seats: Vec<usize> = (0..n).map(|seat| (seat + game_idx) % n).collect();
    let controllers = seats
        .iter()
        .map(|&strategy| strategies[strategy].build(rng.gen()))
        .collect::<Result<Vec<_>>>()?;

    let mut game = Game::new(controllers, board, &options.clone().with_seed(game_seed))?;
    let result = game.run_game()?;
    Ok((result.winner.map(|player| seats[player.index()]), result.metrics.rounds))
}
