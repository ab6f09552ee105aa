//! Dice and the per-round dice pool.
//!
//! There is one die per regular camel plus a grey die shared by the two wild
//! camels. Each die comes out at most once per round; the round ends once
//! `N_REGULAR` dice have been rolled, so one die always stays in the pyramid.

use crate::bounded::BoundedStack;
use crate::camel::{CamelColor, N_REGULAR};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Highest face on any die
pub const MAX_PIPS: i32 = 3;

/// A physical die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Moves the regular camel of this color forward
    Color(CamelColor),
    /// Moves one of the wild camels backward
    Grey,
}

impl Die {
    /// All six dice
    pub const ALL: [Die; 6] = [
        Die::Color(CamelColor::Red),
        Die::Color(CamelColor::Blue),
        Die::Color(CamelColor::Yellow),
        Die::Color(CamelColor::Green),
        Die::Color(CamelColor::Purple),
        Die::Grey,
    ];

    /// Throw this die: pick the camel it moves and a signed distance
    pub fn throw<R: Rng>(self, rng: &mut R) -> Roll {
        let pips = rng.gen_range(1..=MAX_PIPS);
        match self {
            Die::Color(color) => Roll {
                die: self,
                color,
                spaces: pips,
            },
            Die::Grey => {
                let color = if rng.gen_bool(0.5) {
                    CamelColor::White
                } else {
                    CamelColor::Black
                };
                Roll {
                    die: self,
                    color,
                    spaces: -pips,
                }
            }
        }
    }
}

/// Outcome of one die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub die: Die,
    /// Camel to move
    pub color: CamelColor,
    /// Signed distance, negative for the wild camels
    pub spaces: i32,
}

/// Dice rolled so far this round, in roll order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    rolls: BoundedStack<Roll>,
}

impl DicePool {
    pub fn new() -> Self {
        Self {
            rolls: BoundedStack::new(N_REGULAR),
        }
    }

    /// Dice that have not come out yet this round
    pub fn remaining(&self) -> Vec<Die> {
        Die::ALL
            .into_iter()
            .filter(|die| !self.rolls.iter().any(|r| r.die == *die))
            .collect()
    }

    /// Draw a die that has not been rolled this round and throw it.
    ///
    /// Returns `None` without drawing when the pool is already full.
    pub fn roll<R: Rng>(&mut self, rng: &mut R) -> Option<Roll> {
        if self.is_full() {
            return None;
        }
        let die = *self.remaining().choose(rng)?;
        let roll = die.throw(rng);
        self.record(roll).then_some(roll)
    }

    /// Store a roll. False when the pool is full.
    #[must_use]
    pub fn record(&mut self, roll: Roll) -> bool {
        self.rolls.push(roll)
    }

    /// Most recent roll
    pub fn last(&self) -> Option<&Roll> {
        self.rolls.peek()
    }

    pub fn rolls(&self) -> &[Roll] {
        self.rolls.as_slice()
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// The round is over once this is true
    pub fn is_full(&self) -> bool {
        self.rolls.is_full()
    }

    pub fn clear(&mut self) {
        self.rolls.clear();
    }
}

impl Default for DicePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_throw_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let roll = Die::Color(CamelColor::Green).throw(&mut rng);
            assert_eq!(roll.color, CamelColor::Green);
            assert!((1..=MAX_PIPS).contains(&roll.spaces));

            let grey = Die::Grey.throw(&mut rng);
            assert!(grey.color.is_wild());
            assert!((-MAX_PIPS..=-1).contains(&grey.spaces));
        }
    }

    #[test]
    fn test_grey_die_picks_both_wild_camels() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors: HashSet<CamelColor> = (0..100)
            .map(|_| Die::Grey.throw(&mut rng).color)
            .collect();
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn test_pool_rolls_each_die_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = DicePool::new();

        for _ in 0..N_REGULAR {
            assert!(pool.roll(&mut rng).is_some());
        }
        assert!(pool.is_full());
        assert_eq!(pool.remaining().len(), Die::ALL.len() - N_REGULAR);

        let dice: HashSet<Die> = pool.rolls().iter().map(|r| r.die).collect();
        assert_eq!(dice.len(), N_REGULAR);
    }

    #[test]
    fn test_full_pool_refuses_rolls() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = DicePool::new();
        while pool.roll(&mut rng).is_some() {}

        assert_eq!(pool.len(), N_REGULAR);
        let before = pool.clone();
        assert_eq!(pool.roll(&mut rng), None);
        assert_eq!(pool, before);
    }

    #[test]
    fn test_clear() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut pool = DicePool::new();
        pool.roll(&mut rng);
        assert!(pool.last().is_some());
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.remaining().len(), Die::ALL.len());
    }
}
