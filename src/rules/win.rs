//! Win and draw judgement
//!
//! Win condition: five or more stones in a row through the last placed
//! stone (overlines count). The judge is deliberately forgiving about bad
//! input: an out-of-range or unoccupied last position yields `false`, not
//! an error, so callers can run it unconditionally after each move.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Five-in-a-row check at the last placed position.
///
/// Counts contiguous same-side stones in both directions of each line,
/// inclusive of the placed stone. No allocation.
pub fn check_five(board: &Board, last_pos: Pos) -> bool {
    if !last_pos.in_bounds() {
        return false;
    }
    let side = board.get(last_pos);
    if side == Stone::Empty {
        return false;
    }

    let sz = BOARD_SIZE as i8;
    for (dr, dc) in DIRECTIONS {
        let mut count = 1i32;
        // Positive direction
        let mut r = last_pos.row as i8 + dr;
        let mut c = last_pos.col as i8 + dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == side {
                count += 1;
                r += dr;
                c += dc;
            } else {
                break;
            }
        }
        // Negative direction
        r = last_pos.row as i8 - dr;
        c = last_pos.col as i8 - dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == side {
                count += 1;
                r -= dr;
                c -= dc;
            } else {
                break;
            }
        }
        if count >= 5 {
            return true;
        }
    }
    false
}

/// Draw check: true iff no empty cell remains
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
