//! Game state, turn engine and player decision interface

pub mod actions;
pub mod big_money_controller;
pub mod choice_guard;
pub mod controller;
pub mod engine;
pub mod game_loop;
pub mod logger;
pub mod phase;
pub mod priority_controller;
pub mod random_controller;
pub mod state;
pub mod supply;
pub mod zero_controller;

pub use big_money_controller::BigMoneyController;
pub use choice_guard::{guard_count, guard_pick, CardPick, Guarded};
pub use controller::{
    BuyChoice, Confirm, GameStateView, GovernorOption, PlayerController, Prompt, StewardOption,
    TopCardFate, TopdeckSource, TorturerOption, WatchtowerChoice,
};
pub use engine::{GainDestination, Game};
pub use game_loop::{GameEndReason, GameMetrics, GameOptions, GameResult, VerbosityLevel};
pub use logger::{GameLogger, LogEntry, OutputMode};
pub use phase::{Phase, TurnStructure};
pub use priority_controller::{BuyRule, PriorityController, PriorityStrategy};
pub use random_controller::RandomController;
pub use state::{GameState, DEFAULT_MAX_TURNS};
pub use supply::{Pile, Supply};
pub use zero_controller::ZeroController;
