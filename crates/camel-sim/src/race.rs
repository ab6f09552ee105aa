//! Headless race runner.

use camel_core::{Command, ConfigError, Game, GameConfig, GameError, GameEvent, PlayerId};
use thiserror::Error;
use tracing::{debug, info};

/// Rounds after which a race is abandoned
const MAX_ROUNDS: u32 = 200;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine rejected a turn: {0}")]
    Game(#[from] GameError),

    #[error("Race did not finish after {0} rounds")]
    Stalled(u32),
}

/// Outcome of one race
#[derive(Debug, Clone, PartialEq)]
pub struct RaceReport {
    pub seed: u64,
    pub rounds: u32,
    pub turns: u32,
    pub winner: PlayerId,
    pub standings: Vec<(PlayerId, i32)>,
}

/// Play a race where every turn is a roll by the next player in rotation
pub fn run_race(config: GameConfig) -> Result<(Game, RaceReport), SimError> {
    let mut game = Game::new(config)?;
    let players = game.players().len() as PlayerId;
    let mut next_player: PlayerId = 0;

    while !game.is_over() {
        if game.round() > MAX_ROUNDS {
            return Err(SimError::Stalled(MAX_ROUNDS));
        }
        if game.needs_scoring() {
            for event in game.complete_round()? {
                if let GameEvent::RoundScored { round, standings, .. } = event {
                    debug!(
                        round,
                        leader = %standings.leader,
                        second = %standings.second,
                        "round scored"
                    );
                }
            }
            continue;
        }

        game.apply_turn(next_player, Command::Roll)?;
        next_player = (next_player + 1) % players;
    }

    let standings = game.final_standings();
    let (winner, points) = standings[0];
    info!(seed = game.seed(), winner, points, rounds = game.round(), "race complete");

    let report = RaceReport {
        seed: game.seed(),
        rounds: game.round(),
        turns: game.turn(),
        winner,
        standings,
    };
    Ok((game, report))
}
