//! Camel race engine
//!
//! This crate provides the core rules for a camel racing board game:
//! - A track of tiles holding camel stacks and spectator markers
//! - The movement engine that splits and restacks camels
//! - Ticket pools and wager queues with their payouts
//! - The round and game lifecycle behind a single turn entry point
//!
//! # Architecture
//!
//! The engine is platform-agnostic and fully deterministic for a given seed.
//! It can be compiled to:
//! - Native Rust for simulations and drivers
//! - WebAssembly for a browser front end (feature `wasm`)
//!
//! # Modules
//!
//! - [`bounded`]: Fixed-capacity stack and queue
//! - [`camel`]: Camel colors and orientation
//! - [`board`]: The track, spectator markers, standings
//! - [`movement`]: Moving camels and their riders
//! - [`dice`]: Dice and the per-round dice pool
//! - [`ledger`]: Tickets and wagers
//! - [`player`]: Player state
//! - [`game`]: Game state machine

pub mod actions;
pub mod board;
pub mod bounded;
pub mod camel;
pub mod config;
pub mod dice;
pub mod game;
pub mod ledger;
pub mod movement;
pub mod player;
pub mod view;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{Command, GameEvent};
pub use board::{Board, PlayerId, Spectator, Standings, Tile, BOARD_SIZE, FINISH_TILE};
pub use bounded::{BoundedQueue, BoundedStack};
pub use camel::{Camel, CamelColor, Orientation, N_CAMELS, N_REGULAR};
pub use config::{ConfigError, GameConfig};
pub use dice::{DicePool, Die, Roll};
pub use game::{Game, GameError, GamePhase};
pub use ledger::{Ticket, TicketLedger, TicketPayout, Wager, WagerLedger, WagerPayout, WagerSide};
pub use movement::{Deflection, Movement};
pub use player::{Player, WagerCard};
pub use view::GameView;
