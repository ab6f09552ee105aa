//! Read-only snapshot of a game for renderers and front ends.

use crate::board::Tile;
use crate::camel::CamelColor;
use crate::dice::Roll;
use crate::game::{Game, GamePhase};
use crate::ledger::{Ticket, Wager, WagerSide};
use crate::player::Player;
use serde::Serialize;

/// Borrowed view of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView<'a> {
    pub round: u32,
    pub turn: u32,
    pub finished: bool,
    pub phase: GamePhase,
    pub seed: u64,
    /// Track from start to finish, stacks bottom to top
    pub tiles: &'a [Tile],
    pub players: &'a [Player],
    /// Ticket pools in regular color order
    pub tickets: Vec<&'a [Ticket]>,
    /// Leader wagers in placement order
    pub leader_wagers: Vec<Wager>,
    /// Trailer wagers in placement order
    pub trailer_wagers: Vec<Wager>,
    /// Rolls this round in roll order
    pub dice: &'a [Roll],
}

impl Game {
    /// Snapshot the game for display
    pub fn snapshot(&self) -> GameView<'_> {
        GameView {
            round: self.round(),
            turn: self.turn(),
            finished: self.is_finished(),
            phase: self.phase(),
            seed: self.seed(),
            tiles: self.board().tiles(),
            players: self.players(),
            tickets: CamelColor::REGULAR
                .iter()
                .map(|&color| self.tickets().pool(color))
                .collect(),
            leader_wagers: self.wagers().queue(WagerSide::Leader).iter().copied().collect(),
            trailer_wagers: self.wagers().queue(WagerSide::Trailer).iter().copied().collect(),
            dice: self.dice().rolls(),
        }
    }
}

impl GameView<'_> {
    /// Serialize for a front end
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
