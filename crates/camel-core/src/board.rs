//! Race track representation.
//!
//! This module contains:
//! - The track of `BOARD_SIZE` tiles, each holding a camel stack
//! - Spectator markers and their placement rules
//! - Standings scans (leader, second place, last place)
//!
//! Movement lives in [`crate::movement`].

use crate::bounded::BoundedStack;
use crate::camel::{Camel, CamelColor, Orientation, N_CAMELS};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Player identifier (0-based seat index)
pub type PlayerId = u8;

/// Number of tiles on the track
pub const BOARD_SIZE: usize = 17;

/// Index of the finish line tile
pub const FINISH_TILE: usize = BOARD_SIZE - 1;

/// Regular camels start on one of these tiles
pub const REGULAR_START_TILES: std::ops::RangeInclusive<usize> = 0..=2;

/// Wild camels start on one of the three tiles before the finish
pub const WILD_START_TILES: std::ops::RangeInclusive<usize> = (FINISH_TILE - 3)..=(FINISH_TILE - 1);

/// A spectator marker placed by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spectator {
    /// Who placed it (scores when it triggers)
    pub owner: PlayerId,
    /// Which way it pushes a landing camel
    pub orientation: Orientation,
}

/// A single tile of the track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position on the track
    pub index: usize,
    /// Marker on this tile, if any
    pub spectator: Option<Spectator>,
    /// Camels on this tile, bottom to top
    pub camels: BoundedStack<Camel>,
}

impl Tile {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            spectator: None,
            camels: BoundedStack::new(N_CAMELS),
        }
    }

    /// Colors on this tile from bottom to top
    pub fn colors(&self) -> Vec<CamelColor> {
        self.camels.iter().map(|c| c.color).collect()
    }

    pub fn is_finish(&self) -> bool {
        self.index == FINISH_TILE
    }
}

/// Round standings among the regular camels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub leader: CamelColor,
    pub second: CamelColor,
}

/// The race track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a track with no camels and no markers
    pub fn empty() -> Self {
        Self {
            tiles: (0..BOARD_SIZE).map(Tile::new).collect(),
        }
    }

    /// Create the starting layout with a provided RNG.
    ///
    /// Each regular camel lands on a random tile in [`REGULAR_START_TILES`],
    /// each wild camel on a random tile in [`WILD_START_TILES`]. Camels
    /// sharing a tile stack in color order.
    pub fn starting_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut board = Self::empty();

        for color in CamelColor::ALL {
            let tile = if color.is_wild() {
                rng.gen_range(WILD_START_TILES)
            } else {
                rng.gen_range(REGULAR_START_TILES)
            };
            board.place_camel(Camel::new(color, tile));
        }

        board
    }

    // ==================== Setup ====================

    /// Put a camel on top of the stack at `camel.tile`.
    ///
    /// Panics if the tile does not exist or its stack is full, both of which
    /// mean the caller is building an impossible board.
    pub fn place_camel(&mut self, camel: Camel) {
        let tile = self
            .tiles
            .get_mut(camel.tile)
            .unwrap_or_else(|| panic!("tile {} is off the board", camel.tile));
        if !tile.camels.push(camel) {
            panic!("camel stack on tile {} overflowed", camel.tile);
        }
    }

    /// Whether every camel is on the board exactly once with a correct cached tile
    pub fn is_complete(&self) -> bool {
        let mut seen = [0usize; N_CAMELS];
        for tile in &self.tiles {
            for camel in &tile.camels {
                if camel.tile != tile.index {
                    return false;
                }
                seen[camel.color as usize] += 1;
            }
        }
        seen.iter().all(|&n| n == 1)
    }

    // ==================== Query Methods ====================

    /// All tiles, start to finish
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Get a tile by index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    /// Colors stacked on a tile, bottom to top
    pub fn stack(&self, index: usize) -> Vec<CamelColor> {
        self.tiles.get(index).map(Tile::colors).unwrap_or_default()
    }

    /// Tile index of a camel
    pub fn locate(&self, color: CamelColor) -> Option<usize> {
        self.camel(color).map(|c| c.tile)
    }

    /// Find a camel on the board
    pub fn camel(&self, color: CamelColor) -> Option<&Camel> {
        self.tiles
            .iter()
            .flat_map(|t| t.camels.iter())
            .find(|c| c.color == color)
    }

    /// Total camels across all stacks
    pub fn camel_count(&self) -> usize {
        self.tiles.iter().map(|t| t.camels.len()).sum()
    }

    /// Marker on a tile, if any
    pub fn spectator_at(&self, index: usize) -> Option<Spectator> {
        self.tiles.get(index).and_then(|t| t.spectator)
    }

    // ==================== Spectators ====================

    /// Check whether a marker may go on `index`.
    ///
    /// The tile must exist, not be the finish, carry no camels and no marker,
    /// and neither neighbour may carry a marker.
    pub fn can_place_spectator(&self, index: usize) -> bool {
        let Some(tile) = self.tiles.get(index) else {
            return false;
        };
        if tile.is_finish() || !tile.camels.is_empty() || tile.spectator.is_some() {
            return false;
        }
        let left = index.checked_sub(1).and_then(|i| self.spectator_at(i));
        let right = self.spectator_at(index + 1);
        left.is_none() && right.is_none()
    }

    /// Place a marker if legal. Returns false with no change otherwise.
    pub fn place_spectator(&mut self, index: usize, spectator: Spectator) -> bool {
        if !self.can_place_spectator(index) {
            return false;
        }
        self.tiles[index].spectator = Some(spectator);
        true
    }

    /// Remove every marker from the track
    pub fn clear_spectators(&mut self) {
        for tile in &mut self.tiles {
            tile.spectator = None;
        }
    }

    // ==================== Standings ====================

    /// Leader and runner-up among regular camels.
    ///
    /// Scans from the finish backward and each stack from the top down, so a
    /// camel riding on another is ahead of it.
    pub fn standings(&self) -> Option<Standings> {
        let mut ahead_first = self
            .tiles
            .iter()
            .rev()
            .flat_map(|t| t.camels.iter().rev())
            .map(|c| c.color)
            .filter(|c| !c.is_wild());

        let leader = ahead_first.next()?;
        let second = ahead_first.find(|c| *c != leader)?;
        Some(Standings { leader, second })
    }

    /// The regular camel in last place: the lowest one on the rearmost
    /// occupied tile that carries a regular camel.
    pub fn last_place(&self) -> Option<CamelColor> {
        let mut last = None;
        for tile in self.tiles.iter().rev() {
            for camel in tile.camels.iter().rev() {
                if !camel.color.is_wild() {
                    last = Some(camel.color);
                }
            }
        }
        last
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
