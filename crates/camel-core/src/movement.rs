//! Camel movement.
//!
//! A roll moves one camel together with everything riding on top of it.
//! Landing on a spectator marker adds one space when the marker faces the
//! same way as the camel and takes one away otherwise. The marker also
//! decides which side of the destination stack the group joins: forward
//! lands on top, reverse slides underneath.

use crate::board::{Board, PlayerId, Spectator, FINISH_TILE};
use crate::camel::{Camel, CamelColor, Orientation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A marker that changed a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deflection {
    /// Tile the marker sits on
    pub tile: usize,
    /// Player credited with the trigger
    pub owner: PlayerId,
    /// Which way the marker faced
    pub orientation: Orientation,
}

/// Result of moving a camel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Camel the roll was for
    pub color: CamelColor,
    /// Source tile
    pub from: usize,
    /// Destination tile after deflection and clamping
    pub to: usize,
    /// Camels that travelled, bottom to top
    pub moved: Vec<CamelColor>,
    /// Marker that deflected the move, if any
    pub deflection: Option<Deflection>,
    /// Whether the group reached the finish line
    pub finished: bool,
}

impl Board {
    /// Move `color` by `raw_spaces` (negative for backward), carrying every
    /// camel stacked above it.
    ///
    /// Panics if the camel is not on the board: that means camels have been
    /// lost or duplicated and the board can no longer be trusted.
    pub fn move_camel(&mut self, color: CamelColor, raw_spaces: i32) -> Movement {
        let camel = match self.camel(color) {
            Some(camel) => *camel,
            None => panic!("camel {color:?} is not on the board"),
        };
        let from = camel.tile;

        // Only a landing spot on the track can hold a marker
        let candidate = (from as i32).saturating_add(raw_spaces);
        let marker = usize::try_from(candidate)
            .ok()
            .and_then(|tile| Some((tile, self.spectator_at(tile)?)));

        let mut spaces = raw_spaces;
        let mut side = camel.orientation;
        let deflection = marker.map(|(tile, Spectator { owner, orientation })| {
            let step = if orientation == camel.orientation { 1 } else { -1 };
            spaces = spaces.saturating_add(step);
            side = orientation;
            Deflection {
                tile,
                owner,
                orientation,
            }
        });

        let target = (from as i32).saturating_add(spaces);
        let finished = target >= FINISH_TILE as i32;
        let to = clamp_to_track(target);

        let group = self.lift_group(from, color);
        let moved: Vec<CamelColor> = group.iter().map(|c| c.color).collect();

        match side {
            Orientation::Forward => self.land_on_top(to, group),
            Orientation::Reverse => self.land_underneath(to, group),
        }

        debug!(
            camel = %color,
            from,
            to,
            raw_spaces,
            deflected = deflection.is_some(),
            carried = moved.len() - 1,
            "camel moved"
        );

        Movement {
            color,
            from,
            to,
            moved,
            deflection,
            finished,
        }
    }

    /// Pop camels off `tile` down to and including `color`.
    ///
    /// The returned group is ordered bottom to top, the same way it stood.
    fn lift_group(&mut self, tile: usize, color: CamelColor) -> Vec<Camel> {
        let stack = &mut self.tile_mut(tile).camels;
        let mut group = Vec::with_capacity(stack.len());
        loop {
            match stack.pop() {
                Some(camel) => {
                    let found = camel.color == color;
                    group.push(camel);
                    if found {
                        break;
                    }
                }
                None => panic!("camel {color:?} vanished from tile {tile}"),
            }
        }
        group.reverse();
        group
    }

    fn land_on_top(&mut self, tile: usize, group: Vec<Camel>) {
        let stack = &mut self.tile_mut(tile).camels;
        for mut camel in group {
            camel.tile = tile;
            if !stack.push(camel) {
                panic!("camel stack on tile {tile} overflowed");
            }
        }
    }

    fn land_underneath(&mut self, tile: usize, group: Vec<Camel>) {
        let stack = &mut self.tile_mut(tile).camels;
        let mut lifted = Vec::with_capacity(stack.len());
        while let Some(camel) = stack.pop() {
            lifted.push(camel);
        }

        for mut camel in group {
            camel.tile = tile;
            if !stack.push(camel) {
                panic!("camel stack on tile {tile} overflowed");
            }
        }
        // lifted is top-first, restack it bottom-first
        while let Some(camel) = lifted.pop() {
            if !stack.push(camel) {
                panic!("camel stack on tile {tile} overflowed");
            }
        }
    }
}

fn clamp_to_track(index: i32) -> usize {
    index.clamp(0, FINISH_TILE as i32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;
    use crate::camel::N_CAMELS;
    use pretty_assertions::assert_eq;

    use CamelColor::*;

    /// Board with the given stacks (bottom to top); remaining camels go to tile 0
    fn board_with(stacks: &[(usize, &[CamelColor])]) -> Board {
        let mut board = Board::empty();
        let mut placed = Vec::new();
        for &(tile, colors) in stacks {
            for &color in colors {
                board.place_camel(Camel::new(color, tile));
                placed.push(color);
            }
        }
        for color in CamelColor::ALL {
            if !placed.contains(&color) {
                board.place_camel(Camel::new(color, 0));
            }
        }
        board
    }

    fn marker(tile: usize, orientation: Orientation, board: &mut Board) {
        assert!(board.place_spectator(
            tile,
            Spectator {
                owner: 3,
                orientation,
            }
        ));
    }

    #[test]
    fn test_single_camel_moves_forward() {
        let mut board = board_with(&[(2, &[Red])]);
        let movement = board.move_camel(Red, 3);

        assert_eq!(movement.from, 2);
        assert_eq!(movement.to, 5);
        assert_eq!(movement.moved, vec![Red]);
        assert!(movement.deflection.is_none());
        assert!(!movement.finished);
        assert_eq!(board.stack(5), vec![Red]);
        assert_eq!(board.locate(Red), Some(5));
    }

    #[test]
    fn test_partial_stack_split() {
        let mut board = board_with(&[(3, &[Green, Blue, Red, Yellow]), (5, &[Purple])]);
        let movement = board.move_camel(Blue, 2);

        assert_eq!(movement.moved, vec![Blue, Red, Yellow]);
        assert_eq!(board.stack(3), vec![Green]);
        assert_eq!(board.stack(5), vec![Purple, Blue, Red, Yellow]);
        for color in [Blue, Red, Yellow] {
            assert_eq!(board.camel(color).map(|c| c.tile), Some(5));
        }
        assert_eq!(board.locate(Green), Some(3));
    }

    #[test]
    fn test_bottom_camel_takes_whole_stack() {
        let mut board = board_with(&[(4, &[Yellow, Green, Purple])]);
        board.move_camel(Yellow, 1);
        assert_eq!(board.stack(4), Vec::<CamelColor>::new());
        assert_eq!(board.stack(5), vec![Yellow, Green, Purple]);
    }

    #[test]
    fn test_reverse_camel_slides_underneath() {
        let mut board = board_with(&[(10, &[White, Red]), (8, &[Blue, Green])]);
        let movement = board.move_camel(White, -2);

        assert_eq!(movement.to, 8);
        assert_eq!(movement.moved, vec![White, Red]);
        assert_eq!(board.stack(8), vec![White, Red, Blue, Green]);
        assert_eq!(board.stack(10), Vec::<CamelColor>::new());
    }

    #[test]
    fn test_forward_marker_pushes_further() {
        let mut board = board_with(&[(2, &[Red]), (6, &[Blue])]);
        marker(5, Orientation::Forward, &mut board);

        let movement = board.move_camel(Red, 3);

        assert_eq!(movement.to, 6);
        assert_eq!(
            movement.deflection,
            Some(Deflection {
                tile: 5,
                owner: 3,
                orientation: Orientation::Forward,
            })
        );
        assert_eq!(board.stack(6), vec![Blue, Red]);
    }

    #[test]
    fn test_reverse_marker_pulls_back_underneath() {
        let mut board = board_with(&[(2, &[Red, Yellow]), (4, &[Blue])]);
        marker(5, Orientation::Reverse, &mut board);

        let movement = board.move_camel(Red, 3);

        assert_eq!(movement.to, 4);
        assert_eq!(board.stack(4), vec![Red, Yellow, Blue]);
    }

    #[test]
    fn test_reverse_marker_onto_own_tile() {
        let mut board = board_with(&[(3, &[Green, Red])]);
        marker(4, Orientation::Reverse, &mut board);

        board.move_camel(Red, 1);

        // Red goes back to its own tile but now under Green
        assert_eq!(board.stack(3), vec![Red, Green]);
    }

    #[test]
    fn test_wild_camel_on_reverse_marker_falls_short() {
        let mut board = board_with(&[(14, &[Black]), (13, &[Purple])]);
        marker(12, Orientation::Reverse, &mut board);

        let movement = board.move_camel(Black, -2);
        assert_eq!(movement.to, 13);
        assert_eq!(movement.deflection.map(|d| d.tile), Some(12));
        assert_eq!(board.stack(13), vec![Black, Purple]);
    }

    #[test]
    fn test_wild_camel_on_forward_marker_goes_further_back() {
        let mut board = board_with(&[(14, &[Black]), (11, &[Purple])]);
        marker(12, Orientation::Forward, &mut board);

        let movement = board.move_camel(Black, -2);
        assert_eq!(movement.to, 11);
        assert_eq!(board.stack(11), vec![Purple, Black]);
    }

    #[test]
    fn test_marker_ignored_when_landing_off_track() {
        let mut board = board_with(&[
            (1, &[White]),
            (5, &[Red, Blue, Yellow, Green, Purple, Black]),
        ]);
        marker(0, Orientation::Forward, &mut board);

        let movement = board.move_camel(White, -3);
        assert_eq!(movement.deflection, None);
        assert_eq!(movement.to, 0);
        assert_eq!(board.stack(0), vec![White]);
    }

    #[test]
    fn test_extreme_distances_saturate() {
        let mut board = board_with(&[(3, &[Red]), (8, &[White])]);

        let movement = board.move_camel(Red, i32::MAX);
        assert!(movement.finished);
        assert_eq!(movement.to, FINISH_TILE);

        let movement = board.move_camel(White, i32::MIN);
        assert!(!movement.finished);
        assert_eq!(movement.to, 0);
    }

    #[test]
    fn test_finish_line_clamps_and_flags() {
        let mut board = board_with(&[(14, &[Red, Blue])]);
        let movement = board.move_camel(Red, 3);

        assert!(movement.finished);
        assert_eq!(movement.to, FINISH_TILE);
        assert_eq!(board.stack(FINISH_TILE), vec![Red, Blue]);
    }

    #[test]
    fn test_exact_finish_counts() {
        let mut board = board_with(&[(FINISH_TILE - 2, &[Purple])]);
        assert!(board.move_camel(Purple, 2).finished);
    }

    #[test]
    fn test_backward_move_clamps_at_start() {
        let mut board = board_with(&[(1, &[White])]);
        let movement = board.move_camel(White, -3);
        assert_eq!(movement.to, 0);
        assert!(!movement.finished);
        assert_eq!(board.stack(0).first(), Some(&White));
    }

    #[test]
    fn test_moves_conserve_camels() {
        let mut board = board_with(&[
            (0, &[Red, Blue, Yellow, Green, Purple]),
            (15, &[White, Black]),
        ]);
        let script = [
            (Blue, 2),
            (Red, 1),
            (Black, -3),
            (Yellow, 3),
            (White, -1),
            (Purple, 2),
            (Green, 3),
        ];
        for (color, spaces) in script {
            board.move_camel(color, spaces);
            assert_eq!(board.camel_count(), N_CAMELS);
            assert!(board.is_complete());
        }
        assert_eq!(board.tiles().len(), BOARD_SIZE);
    }

    #[test]
    #[should_panic(expected = "not on the board")]
    fn test_missing_camel_is_fatal() {
        let mut board = Board::empty();
        board.place_camel(Camel::new(Red, 0));
        board.move_camel(Blue, 1);
    }
}
