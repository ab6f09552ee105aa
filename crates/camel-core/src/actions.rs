//! Commands players can issue and the events they produce.

use crate::board::{PlayerId, Standings};
use crate::camel::{CamelColor, Orientation};
use crate::dice::Roll;
use crate::ledger::{TicketPayout, WagerPayout, WagerSide};
use crate::movement::Movement;
use serde::{Deserialize, Serialize};

/// Everything a player can do on their turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Draw a die from the pyramid and move its camel
    Roll,
    /// Take the best remaining ticket of a color
    TakeTicket(CamelColor),
    /// Play a wager card on the race winner or loser
    PlaceWager { color: CamelColor, side: WagerSide },
    /// Put this round's spectator marker on an empty tile
    PlaceSpectator {
        tile: usize,
        orientation: Orientation,
    },
}

/// Events that occur as a result of commands and scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A die came out of the pyramid
    DiceRolled { player: PlayerId, roll: Roll },

    /// A camel (and its riders) moved
    CamelMoved(Movement),

    /// A spectator marker deflected a camel and scored for its owner
    SpectatorTriggered { owner: PlayerId, tile: usize },

    /// A ticket was taken
    TicketTaken {
        player: PlayerId,
        color: CamelColor,
        amount: u32,
    },

    /// A wager card was played
    WagerPlaced {
        player: PlayerId,
        color: CamelColor,
        side: WagerSide,
    },

    /// A spectator marker went on the board
    SpectatorPlaced {
        player: PlayerId,
        tile: usize,
        orientation: Orientation,
    },

    /// A camel crossed the finish line
    RaceFinished { leader: CamelColor },

    /// Round standings were settled and tickets paid
    RoundScored {
        round: u32,
        standings: Standings,
        payouts: Vec<TicketPayout>,
    },

    /// Wager queues were settled at game end
    WagersScored {
        winner: CamelColor,
        loser: CamelColor,
        payouts: Vec<WagerPayout>,
    },

    /// A new round began
    RoundStarted { round: u32 },

    /// The game is over
    GameOver { winner: PlayerId, points: i32 },
}
