//! Performance benchmarks for the Dominion engine
//!
//! Measures full-game throughput with Criterion.rs in two modes:
//!
//! 1. **Single** - one Big Money mirror game per iteration
//! 2. **Battle** - a batch of games through the parallel battle runner
//!
//! Build with `--no-default-features` to compile the verbose logging away.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dominion_sim::{
    game::{BigMoneyController, Game, GameOptions, PlayerController, RandomController},
    loader::Board,
    tournament::{run_battle, Strategy},
    Result,
};
use std::time::{Duration, Instant};

/// Metrics collected during one game
#[derive(Debug, Clone)]
struct GameMetrics {
    rounds: u32,
    duration: Duration,
}

impl GameMetrics {
    fn games_per_sec(&self) -> f64 {
        1.0 / self.duration.as_secs_f64()
    }

    fn rounds_per_sec(&self) -> f64 {
        self.rounds as f64 / self.duration.as_secs_f64()
    }
}

fn bench_board() -> Board {
    Board::with_kingdom(&[
        "Smithy", "Village", "Market", "Laboratory", "Festival", "Militia", "Moat", "Cellar",
        "Gardens", "Witch",
    ])
}

fn run_game_with_metrics(board: &Board, seed: u64, random: bool) -> Result<GameMetrics> {
    let start = Instant::now();
    let controllers: Vec<Box<dyn PlayerController>> = if random {
        vec![
            Box::new(RandomController::with_seed(seed)),
            Box::new(RandomController::with_seed(seed + 1)),
        ]
    } else {
        vec![Box::new(BigMoneyController::new()), Box::new(BigMoneyController::new())]
    };
    let mut game = Game::new(controllers, board, &GameOptions::default().with_seed(seed))?;
    let result = game.run_game()?;
    Ok(GameMetrics {
        rounds: result.metrics.rounds,
        duration: start.elapsed(),
    })
}

/// Benchmark: one game per iteration
fn bench_single_game(c: &mut Criterion) {
    let board = bench_board();
    let mut group = c.benchmark_group("game_execution");
    group.sample_size(50);

    let seed = 42u64;
    println!("\nWarmup game (seed {seed}):");
    if let Ok(metrics) = run_game_with_metrics(&board, seed, false) {
        println!("  Rounds: {}", metrics.rounds);
        println!("  Duration: {:?}", metrics.duration);
        println!("  Games/sec: {:.2}", metrics.games_per_sec());
        println!("  Rounds/sec: {:.2}", metrics.rounds_per_sec());
    }

    group.bench_with_input(BenchmarkId::new("big_money", seed), &seed, |b, &seed| {
        b.iter(|| run_game_with_metrics(&board, black_box(seed), false).expect("Game should complete"));
    });
    group.bench_with_input(BenchmarkId::new("random", seed), &seed, |b, &seed| {
        b.iter(|| run_game_with_metrics(&board, black_box(seed), true).expect("Game should complete"));
    });

    group.finish();
}

/// Benchmark: 100 games through the rayon battle runner
fn bench_battle(c: &mut Criterion) {
    let board = bench_board();
    let strategies = [Strategy::BigMoney, Strategy::Random];
    let mut group = c.benchmark_group("battle");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));

    group.bench_function(BenchmarkId::new("parallel", 100), |b| {
        b.iter(|| run_battle(&board, &strategies, 100, black_box(7)).expect("Battle should complete"));
    });

    group.finish();
}

criterion_group!(benches, bench_single_game, bench_battle);
criterion_main!(benches);
