//! Player state.
//!
//! This module contains:
//! - Player struct with score and spectator flag
//! - WagerCard, the game-long hand of one card per regular color

use crate::board::PlayerId;
use crate::camel::{CamelColor, N_REGULAR};
use serde::{Deserialize, Serialize};

/// One wager card. Each can be played once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerCard {
    pub color: CamelColor,
    pub used: bool,
}

/// A single player's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat index
    pub id: PlayerId,
    /// Running score, can go negative
    pub points: i32,
    /// Whether the spectator marker has been placed this round
    pub used_spectator: bool,
    /// One card per regular color
    pub hand: [WagerCard; N_REGULAR],
}

impl Player {
    /// Create a new player with a full hand
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            points: 0,
            used_spectator: false,
            hand: CamelColor::REGULAR.map(|color| WagerCard { color, used: false }),
        }
    }

    /// Cards still available to play
    pub fn hand_size(&self) -> usize {
        self.hand.iter().filter(|c| !c.used).count()
    }

    pub fn has_card(&self, color: CamelColor) -> bool {
        self.hand.iter().any(|c| c.color == color && !c.used)
    }

    /// Mark the card of `color` as played. False if it is gone or never existed.
    pub fn use_card(&mut self, color: CamelColor) -> bool {
        match self.hand.iter_mut().find(|c| c.color == color && !c.used) {
            Some(card) => {
                card.used = true;
                true
            }
            None => false,
        }
    }

    /// Apply a score change
    pub fn score(&mut self, delta: i32) {
        self.points += delta;
    }

    /// Start-of-round reset. The wager hand carries over.
    pub fn start_round(&mut self) {
        self.used_spectator = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_hand() {
        let player = Player::new(2);
        assert_eq!(player.id, 2);
        assert_eq!(player.points, 0);
        assert!(!player.used_spectator);
        assert_eq!(player.hand_size(), N_REGULAR);

        let colors: Vec<CamelColor> = player.hand.iter().map(|c| c.color).collect();
        assert_eq!(colors, CamelColor::REGULAR.to_vec());
    }

    #[test]
    fn test_use_card_once() {
        let mut player = Player::new(0);
        assert!(player.has_card(CamelColor::Yellow));
        assert!(player.use_card(CamelColor::Yellow));
        assert!(!player.has_card(CamelColor::Yellow));
        assert_eq!(player.hand_size(), 4);

        assert!(!player.use_card(CamelColor::Yellow));
        assert!(player.has_card(CamelColor::Blue));
    }

    #[test]
    fn test_no_wild_cards() {
        let mut player = Player::new(0);
        assert!(!player.has_card(CamelColor::White));
        assert!(!player.use_card(CamelColor::Black));
    }

    #[test]
    fn test_empty_hand() {
        let mut player = Player::new(1);
        for color in CamelColor::REGULAR {
            assert!(player.use_card(color));
        }
        assert_eq!(player.hand_size(), 0);
    }

    #[test]
    fn test_round_keeps_hand() {
        let mut player = Player::new(0);
        player.used_spectator = true;
        player.use_card(CamelColor::Red);
        player.score(-3);

        player.start_round();
        assert!(!player.used_spectator);
        assert!(!player.has_card(CamelColor::Red));
        assert_eq!(player.points, -3);
    }
}
