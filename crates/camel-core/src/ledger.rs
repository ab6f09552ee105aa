//! Ticket pools and wager queues.
//!
//! Tickets are bought during a round and paid out at the end of that round.
//! Wagers are placed at any time and paid out once, when the race ends, in
//! the order they were placed.

use crate::board::PlayerId;
use crate::bounded::{BoundedQueue, BoundedStack};
use crate::camel::{CamelColor, N_REGULAR};
use serde::{Deserialize, Serialize};

/// Face values of a ticket pool, in the order they are handed out
pub const TICKET_PAYOUTS: [u32; 4] = [5, 3, 2, 2];

/// Paid to holders of a second-place ticket
pub const SECOND_PLACE_PAYOUT: i32 = 1;

/// Lost by holders of any other ticket, and by every wrong wager
pub const WRONG_GUESS_PENALTY: i32 = 1;

/// Payouts for correct wagers, first correct one first
pub const WAGER_PAYOUTS: [i32; 5] = [8, 5, 3, 2, 1];

/// Payout of the `rank`-th correct wager (0-based). Everything past the
/// table earns the last entry.
pub fn wager_payout(rank: usize) -> i32 {
    WAGER_PAYOUTS[rank.min(WAGER_PAYOUTS.len() - 1)]
}

// ==================== Tickets ====================

/// A destination ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub color: CamelColor,
    /// Face value when the color leads the round
    pub amount: u32,
    /// Holder, if taken
    pub holder: Option<PlayerId>,
}

/// Score change from one ticket at round end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPayout {
    pub player: PlayerId,
    pub color: CamelColor,
    pub amount: u32,
    pub delta: i32,
}

/// One pool of tickets per regular color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLedger {
    pools: Vec<BoundedStack<Ticket>>,
}

impl TicketLedger {
    /// Every pool full and unclaimed
    pub fn new() -> Self {
        Self {
            pools: CamelColor::REGULAR.iter().map(|&c| Self::fresh_pool(c)).collect(),
        }
    }

    fn fresh_pool(color: CamelColor) -> BoundedStack<Ticket> {
        let mut pool = BoundedStack::new(TICKET_PAYOUTS.len());
        for amount in TICKET_PAYOUTS {
            let pushed = pool.push(Ticket {
                color,
                amount,
                holder: None,
            });
            debug_assert!(pushed);
        }
        pool
    }

    /// Tickets of one color in payout order. Empty for wild colors.
    pub fn pool(&self, color: CamelColor) -> &[Ticket] {
        color
            .regular_index()
            .map(|i| self.pools[i].as_slice())
            .unwrap_or(&[])
    }

    /// Best unclaimed ticket of a color, if any
    pub fn next_available(&self, color: CamelColor) -> Option<&Ticket> {
        self.pool(color).iter().find(|t| t.holder.is_none())
    }

    /// Give the best unclaimed ticket of `color` to `player`.
    ///
    /// Returns its face value, or `None` when the pool is exhausted or the
    /// color has no tickets.
    pub fn take(&mut self, color: CamelColor, player: PlayerId) -> Option<u32> {
        let pool = self.pools.get_mut(color.regular_index()?)?;
        let ticket = pool.iter_mut().find(|t| t.holder.is_none())?;
        ticket.holder = Some(player);
        Some(ticket.amount)
    }

    /// All claimed tickets across every color
    pub fn held(&self) -> impl Iterator<Item = &Ticket> {
        self.pools
            .iter()
            .flat_map(|pool| pool.iter())
            .filter(|t| t.holder.is_some())
    }

    /// Work out what every claimed ticket is worth for these standings
    pub fn payouts(&self, leader: CamelColor, second: CamelColor) -> Vec<TicketPayout> {
        self.held()
            .filter_map(|t| {
                let player = t.holder?;
                let delta = if t.color == leader {
                    t.amount as i32
                } else if t.color == second {
                    SECOND_PLACE_PAYOUT
                } else {
                    -WRONG_GUESS_PENALTY
                };
                Some(TicketPayout {
                    player,
                    color: t.color,
                    amount: t.amount,
                    delta,
                })
            })
            .collect()
    }

    /// Put every ticket back
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TicketLedger {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Wagers ====================

/// Which end of the race a wager backs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WagerSide {
    /// The camel that wins the race
    Leader,
    /// The camel that comes last
    Trailer,
}

/// A wager on the race outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wager {
    pub player: PlayerId,
    pub color: CamelColor,
}

/// Score change from one wager at game end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerPayout {
    pub side: WagerSide,
    pub player: PlayerId,
    pub color: CamelColor,
    pub delta: i32,
}

/// Leader and trailer wager queues
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerLedger {
    leader: BoundedQueue<Wager>,
    trailer: BoundedQueue<Wager>,
}

impl WagerLedger {
    /// Queues sized so every player can bet every card on one side
    pub fn new(player_count: usize) -> Self {
        let capacity = player_count * N_REGULAR;
        Self {
            leader: BoundedQueue::new(capacity),
            trailer: BoundedQueue::new(capacity),
        }
    }

    /// Queue a wager. False when that side is full.
    #[must_use]
    pub fn place(&mut self, side: WagerSide, wager: Wager) -> bool {
        self.queue_mut(side).push(wager)
    }

    pub fn queue(&self, side: WagerSide) -> &BoundedQueue<Wager> {
        match side {
            WagerSide::Leader => &self.leader,
            WagerSide::Trailer => &self.trailer,
        }
    }

    fn queue_mut(&mut self, side: WagerSide) -> &mut BoundedQueue<Wager> {
        match side {
            WagerSide::Leader => &mut self.leader,
            WagerSide::Trailer => &mut self.trailer,
        }
    }

    /// Drain both queues in placement order and compute every payout.
    ///
    /// On each side the k-th correct wager earns [`wager_payout`]`(k)` and
    /// every wrong one costs [`WRONG_GUESS_PENALTY`].
    pub fn settle(&mut self, winner: CamelColor, loser: CamelColor) -> Vec<WagerPayout> {
        let mut payouts = Vec::with_capacity(self.leader.len() + self.trailer.len());
        for (side, target) in [(WagerSide::Leader, winner), (WagerSide::Trailer, loser)] {
            let mut correct = 0;
            for wager in self.queue_mut(side).drain() {
                let delta = if wager.color == target {
                    correct += 1;
                    wager_payout(correct - 1)
                } else {
                    -WRONG_GUESS_PENALTY
                };
                payouts.push(WagerPayout {
                    side,
                    player: wager.player,
                    color: wager.color,
                    delta,
                });
            }
        }
        payouts
    }
}
