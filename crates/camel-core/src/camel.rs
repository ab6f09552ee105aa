//! Camels, their colors and their facing.
//!
//! Five regular camels race forward. Two wild camels run the track backward
//! and never count toward the round standings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total number of camels on the board
pub const N_CAMELS: usize = 7;

/// Number of regular (racing) camels
pub const N_REGULAR: usize = 5;

/// Camel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CamelColor {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
    /// Wild camel
    White,
    /// Wild camel
    Black,
}

impl CamelColor {
    /// Every camel, regular ones first
    pub const ALL: [CamelColor; N_CAMELS] = [
        CamelColor::Red,
        CamelColor::Blue,
        CamelColor::Yellow,
        CamelColor::Green,
        CamelColor::Purple,
        CamelColor::White,
        CamelColor::Black,
    ];

    /// Camels that race, hold tickets and take wagers
    pub const REGULAR: [CamelColor; N_REGULAR] = [
        CamelColor::Red,
        CamelColor::Blue,
        CamelColor::Yellow,
        CamelColor::Green,
        CamelColor::Purple,
    ];

    /// Camels moved by the grey die
    pub const WILD: [CamelColor; 2] = [CamelColor::White, CamelColor::Black];

    pub fn is_wild(self) -> bool {
        matches!(self, CamelColor::White | CamelColor::Black)
    }

    /// Position of a regular color in [`CamelColor::REGULAR`]
    pub fn regular_index(self) -> Option<usize> {
        match self {
            CamelColor::Red => Some(0),
            CamelColor::Blue => Some(1),
            CamelColor::Yellow => Some(2),
            CamelColor::Green => Some(3),
            CamelColor::Purple => Some(4),
            CamelColor::White | CamelColor::Black => None,
        }
    }

    /// Single-letter board symbol
    pub fn symbol(self) -> char {
        match self {
            CamelColor::Red => 'R',
            CamelColor::Blue => 'B',
            CamelColor::Yellow => 'Y',
            CamelColor::Green => 'G',
            CamelColor::Purple => 'P',
            CamelColor::White => 'W',
            CamelColor::Black => 'K',
        }
    }
}

impl fmt::Display for CamelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Direction of travel. Also used for spectator markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    /// +1 for forward, -1 for reverse
    pub fn sign(self) -> i32 {
        match self {
            Orientation::Forward => 1,
            Orientation::Reverse => -1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Orientation::Forward => '+',
            Orientation::Reverse => '-',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A camel on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camel {
    pub color: CamelColor,
    pub orientation: Orientation,
    /// Tile the camel stands on, kept in sync by the movement engine
    pub tile: usize,
}

impl Camel {
    /// A camel facing the default way for its color
    pub fn new(color: CamelColor, tile: usize) -> Self {
        let orientation = if color.is_wild() {
            Orientation::Reverse
        } else {
            Orientation::Forward
        };
        Self {
            color,
            orientation,
            tile,
        }
    }
}
