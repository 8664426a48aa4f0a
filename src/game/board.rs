use crate::game::direction::Direction;

/// Total window height, border rows included
pub const ROWS: i32 = 20;
/// Total window width, border columns included
pub const COLS: i32 = 60;

/// First playable row (row 0 is the border)
pub const MIN_ROW: i32 = 1;
/// Last playable row (row 19 is the border)
pub const MAX_ROW: i32 = 18;
/// First playable column (col 0 is the border)
pub const MIN_COL: i32 = 1;
/// Last playable column (col 59 is the border)
pub const MAX_COL: i32 = 58;

/// A position on the board, (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent coordinate one step in `direction`, unwrapped
    pub fn step(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Map a coordinate that has stepped onto a border cell to the opposite
/// interior edge. Coordinates already inside the interior are unchanged.
///
/// The board is a torus: row 0 becomes row 18, row 19 becomes row 1,
/// and columns wrap the same way across 0/59.
pub fn wrap(pos: Coord) -> Coord {
    let row = match pos.row {
        0 => MAX_ROW,
        r if r == ROWS - 1 => MIN_ROW,
        r => r,
    };
    let col = match pos.col {
        0 => MAX_COL,
        c if c == COLS - 1 => MIN_COL,
        c => c,
    };
    Coord { row, col }
}

/// Check whether a coordinate is a playable (non-border) cell
pub fn in_interior(pos: Coord) -> bool {
    (MIN_ROW..=MAX_ROW).contains(&pos.row) && (MIN_COL..=MAX_COL).contains(&pos.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let pos = Coord::new(5, 5);
        assert_eq!(pos.step(Direction::Up), Coord::new(4, 5));
        assert_eq!(pos.step(Direction::Down), Coord::new(6, 5));
        assert_eq!(pos.step(Direction::Left), Coord::new(5, 4));
        assert_eq!(pos.step(Direction::Right), Coord::new(5, 6));
    }

    #[test]
    fn test_wrap_top_edge() {
        assert_eq!(wrap(Coord::new(0, 10)), Coord::new(18, 10));
    }

    #[test]
    fn test_wrap_bottom_edge() {
        assert_eq!(wrap(Coord::new(19, 10)), Coord::new(1, 10));
    }

    #[test]
    fn test_wrap_left_edge() {
        assert_eq!(wrap(Coord::new(4, 0)), Coord::new(4, 58));
    }

    #[test]
    fn test_wrap_right_edge() {
        assert_eq!(wrap(Coord::new(4, 59)), Coord::new(4, 1));
    }

    #[test]
    fn test_wrap_corner() {
        assert_eq!(wrap(Coord::new(0, 0)), Coord::new(18, 58));
    }

    #[test]
    fn test_wrap_interior_unchanged() {
        for row in MIN_ROW..=MAX_ROW {
            for col in MIN_COL..=MAX_COL {
                let pos = Coord::new(row, col);
                assert_eq!(wrap(pos), pos);
            }
        }
    }

    #[test]
    fn test_step_then_wrap_stays_in_interior() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            for row in MIN_ROW..=MAX_ROW {
                for col in MIN_COL..=MAX_COL {
                    let next = wrap(Coord::new(row, col).step(dir));
                    assert!(in_interior(next), "{next:?} left the board going {dir:?}");
                }
            }
        }
    }
}
