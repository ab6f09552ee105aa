//! Core game state machine.
//!
//! This module contains the `Game` aggregate: the turn dispatcher, the round
//! lifecycle and end-of-game scoring.

use crate::actions::{Command, GameEvent};
use crate::board::{Board, PlayerId, Spectator, Standings};
use crate::camel::{CamelColor, Orientation};
use crate::config::{ConfigError, GameConfig};
use crate::dice::DicePool;
use crate::ledger::{TicketLedger, TicketPayout, Wager, WagerLedger, WagerPayout, WagerSide};
use crate::movement::Movement;
use crate::player::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use thiserror::Error;
use tracing::{debug, info};

/// Points for rolling a die
const ROLL_REWARD: i32 = 1;

/// Points for the owner of a spectator marker each time it triggers
const SPECTATOR_REWARD: i32 = 1;

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ready for the next command
    AwaitingCommand,
    /// Final scoring is done
    GameOver { winner: PlayerId },
}

/// Errors that can occur when applying commands.
///
/// A command that fails leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("No player with id {0}")]
    UnknownPlayer(PlayerId),

    #[error("Every die has been rolled this round")]
    DicePoolFull,

    #[error("No {0:?} tickets left")]
    TicketUnavailable(CamelColor),

    #[error("Wild camel {0:?} cannot be backed")]
    WildColor(CamelColor),

    #[error("No unused {0:?} wager card in hand")]
    WagerCardUnavailable(CamelColor),

    #[error("Wager queue is full")]
    WagerQueueFull,

    #[error("Spectator already placed this round")]
    SpectatorAlreadyPlaced,

    #[error("Cannot place a spectator on tile {0}")]
    InvalidLocation(usize),

    #[error("The race has finished and must be scored")]
    RaceFinished,

    #[error("The round is still in progress")]
    RoundInProgress,

    #[error("Game is over")]
    GameOver,
}

/// The complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    tickets: TicketLedger,
    wagers: WagerLedger,
    dice: DicePool,
    /// Current round (starts at 1)
    round: u32,
    /// Commands applied so far
    turn: u32,
    /// Set the moment a camel reaches the finish line
    finished: bool,
    phase: GamePhase,
    /// Seed the RNG was built from (for deterministic replays)
    seed: u64,
    rng: StdRng,
}

impl Game {
    /// Create a new game with camels on their random starting tiles
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::starting_with_rng(&mut rng);
        Ok(Self::assemble(&config, board, seed, rng))
    }

    /// Create a game on a prepared board
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        if !board.is_complete() {
            return Err(ConfigError::IncompleteBoard);
        }
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let rng = StdRng::seed_from_u64(seed);
        Ok(Self::assemble(&config, board, seed, rng))
    }

    fn assemble(config: &GameConfig, board: Board, seed: u64, rng: StdRng) -> Self {
        let players: Vec<Player> = (0..config.player_count).map(Player::new).collect();
        info!(players = players.len(), seed, "new game");

        Self {
            board,
            wagers: WagerLedger::new(players.len()),
            players,
            tickets: TicketLedger::new(),
            dice: DicePool::new(),
            round: 1,
            turn: 0,
            finished: false,
            phase: GamePhase::AwaitingCommand,
            seed,
            rng,
        }
    }

    // ==================== Queries ====================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by ID
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(id as usize)
            .ok_or(GameError::UnknownPlayer(id))
    }

    pub fn tickets(&self) -> &TicketLedger {
        &self.tickets
    }

    pub fn wagers(&self) -> &WagerLedger {
        &self.wagers
    }

    pub fn dice(&self) -> &DicePool {
        &self.dice
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether a camel has crossed the finish line
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether final scoring has been done
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Get the winner if the game is over
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::GameOver { winner } => Some(winner),
            GamePhase::AwaitingCommand => None,
        }
    }

    /// Whether the driver should call [`Game::complete_round`] now
    pub fn needs_scoring(&self) -> bool {
        !self.is_over() && (self.finished || self.dice.is_full())
    }

    /// Leader and runner-up among the regular camels
    pub fn standings(&self) -> Standings {
        match self.board.standings() {
            Some(standings) => standings,
            None => panic!("regular camels missing from the board"),
        }
    }

    /// The regular camel in last place
    pub fn last_place(&self) -> CamelColor {
        match self.board.last_place() {
            Some(color) => color,
            None => panic!("regular camels missing from the board"),
        }
    }

    /// Player ids with their points, best first (lower id wins ties)
    pub fn final_standings(&self) -> Vec<(PlayerId, i32)> {
        let mut table: Vec<(PlayerId, i32)> =
            self.players.iter().map(|p| (p.id, p.points)).collect();
        table.sort_by_key(|&(id, points)| (Reverse(points), id));
        table
    }

    /// Whether `player` may put their marker on `tile` right now
    pub fn can_place_spectator(&self, player: PlayerId, tile: usize) -> bool {
        self.player(player).is_some_and(|p| !p.used_spectator)
            && self.board.can_place_spectator(tile)
    }

    // ==================== Turn Dispatch ====================

    /// Apply a command for a player
    pub fn apply_turn(
        &mut self,
        player: PlayerId,
        command: Command,
    ) -> Result<Vec<GameEvent>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.finished {
            return Err(GameError::RaceFinished);
        }
        if self.player(player).is_none() {
            return Err(GameError::UnknownPlayer(player));
        }

        let events = match command {
            Command::Roll => self.roll(player)?,
            Command::TakeTicket(color) => self.take_ticket(player, color)?,
            Command::PlaceWager { color, side } => self.place_wager(player, color, side)?,
            Command::PlaceSpectator { tile, orientation } => {
                self.place_spectator(player, tile, orientation)?
            }
        };

        self.turn += 1;
        Ok(events)
    }

    fn roll(&mut self, player: PlayerId) -> Result<Vec<GameEvent>, GameError> {
        let roll = self.dice.roll(&mut self.rng).ok_or(GameError::DicePoolFull)?;
        debug!(player, camel = %roll.color, spaces = roll.spaces, "dice rolled");

        let mut events = vec![GameEvent::DiceRolled { player, roll }];
        let movement = self.move_camel(roll.color, roll.spaces);
        self.player_mut(player)?.score(ROLL_REWARD);

        if let Some(deflection) = movement.deflection {
            events.push(GameEvent::SpectatorTriggered {
                owner: deflection.owner,
                tile: deflection.tile,
            });
        }
        let finished = movement.finished;
        events.push(GameEvent::CamelMoved(movement));
        if finished {
            events.push(GameEvent::RaceFinished {
                leader: self.standings().leader,
            });
        }

        Ok(events)
    }

    fn take_ticket(
        &mut self,
        player: PlayerId,
        color: CamelColor,
    ) -> Result<Vec<GameEvent>, GameError> {
        if color.is_wild() {
            return Err(GameError::WildColor(color));
        }
        let amount = self
            .tickets
            .take(color, player)
            .ok_or(GameError::TicketUnavailable(color))?;

        Ok(vec![GameEvent::TicketTaken {
            player,
            color,
            amount,
        }])
    }

    fn place_wager(
        &mut self,
        player: PlayerId,
        color: CamelColor,
        side: WagerSide,
    ) -> Result<Vec<GameEvent>, GameError> {
        if color.is_wild() {
            return Err(GameError::WildColor(color));
        }
        if !self.player_mut(player)?.has_card(color) {
            return Err(GameError::WagerCardUnavailable(color));
        }
        if !self.wagers.place(side, Wager { player, color }) {
            return Err(GameError::WagerQueueFull);
        }
        self.player_mut(player)?.use_card(color);

        Ok(vec![GameEvent::WagerPlaced {
            player,
            color,
            side,
        }])
    }

    fn place_spectator(
        &mut self,
        player: PlayerId,
        tile: usize,
        orientation: Orientation,
    ) -> Result<Vec<GameEvent>, GameError> {
        if self.player_mut(player)?.used_spectator {
            return Err(GameError::SpectatorAlreadyPlaced);
        }
        let spectator = Spectator {
            owner: player,
            orientation,
        };
        if !self.board.place_spectator(tile, spectator) {
            return Err(GameError::InvalidLocation(tile));
        }
        self.player_mut(player)?.used_spectator = true;

        Ok(vec![GameEvent::SpectatorPlaced {
            player,
            tile,
            orientation,
        }])
    }

    // ==================== Movement ====================

    /// Move a camel and apply the consequences: the marker owner's point and
    /// the finish flag.
    pub fn move_camel(&mut self, color: CamelColor, spaces: i32) -> Movement {
        let movement = self.board.move_camel(color, spaces);

        if let Some(deflection) = movement.deflection {
            if let Some(owner) = self.players.get_mut(deflection.owner as usize) {
                owner.score(SPECTATOR_REWARD);
            }
        }
        if movement.finished && !self.finished {
            self.finished = true;
            info!(camel = %color, round = self.round, "race finished");
        }

        movement
    }

    // ==================== Scoring ====================

    /// Pay every claimed ticket for these standings
    pub fn score_tickets(&mut self, standings: Standings) -> Vec<TicketPayout> {
        let payouts = self.tickets.payouts(standings.leader, standings.second);
        for payout in &payouts {
            if let Some(player) = self.players.get_mut(payout.player as usize) {
                player.score(payout.delta);
            }
            debug!(
                player = payout.player,
                camel = %payout.color,
                delta = payout.delta,
                "ticket paid"
            );
        }
        payouts
    }

    /// Settle both wager queues. Queues are empty afterwards, so a second call
    /// pays nothing.
    pub fn score_wagers(&mut self, winner: CamelColor, loser: CamelColor) -> Vec<WagerPayout> {
        let payouts = self.wagers.settle(winner, loser);
        for payout in &payouts {
            if let Some(player) = self.players.get_mut(payout.player as usize) {
                player.score(payout.delta);
            }
            debug!(player = payout.player, side = ?payout.side, delta = payout.delta, "wager paid");
        }
        payouts
    }

    /// Start the next round: dice back in the pyramid, markers off the
    /// board, tickets back in their pools. Wager hands are kept.
    pub fn end_round(&mut self) {
        self.round += 1;
        self.dice.clear();
        self.board.clear_spectators();
        for player in &mut self.players {
            player.start_round();
        }
        self.tickets.reset();
        info!(round = self.round, "round started");
    }

    /// Score the round once the dice pool is full or the race is over.
    ///
    /// Pays tickets, then either resets for the next round or, when the race
    /// has finished, settles the wagers and ends the game.
    pub fn complete_round(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.needs_scoring() {
            return Err(GameError::RoundInProgress);
        }

        let standings = self.standings();
        let payouts = self.score_tickets(standings);
        let mut events = vec![GameEvent::RoundScored {
            round: self.round,
            standings,
            payouts,
        }];

        if !self.finished {
            self.end_round();
            events.push(GameEvent::RoundStarted { round: self.round });
            return Ok(events);
        }

        let loser = self.last_place();
        let payouts = self.score_wagers(standings.leader, loser);
        events.push(GameEvent::WagersScored {
            winner: standings.leader,
            loser,
            payouts,
        });

        let (winner, points) = self.final_standings()[0];
        self.phase = GamePhase::GameOver { winner };
        info!(winner, points, rounds = self.round, "game over");
        events.push(GameEvent::GameOver { winner, points });

        Ok(events)
    }
}
