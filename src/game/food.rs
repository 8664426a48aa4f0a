use rand::Rng;

use crate::game::board::{Coord, MAX_COL, MAX_ROW, MIN_COL, MIN_ROW};
use crate::game::snake::Snake;

/// A single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pos: Coord,
}

impl Food {
    /// The fixed spawn used for the very first food of a game
    pub fn fixed() -> Self {
        Self {
            pos: Coord::new(10, 20),
        }
    }

    /// Food at an explicit coordinate
    pub fn at(pos: Coord) -> Self {
        Self { pos }
    }

    /// Draw a random interior coordinate not occupied by the snake.
    ///
    /// Rejection sampling with no retry bound: if the snake covers
    /// nearly the whole interior this can spin for a long time before a
    /// free cell comes up. The board has 1044 cells, so in practice the
    /// game ends by collision long before that matters.
    pub fn place(rng: &mut impl Rng, snake: &Snake) -> Self {
        loop {
            let pos = Coord::new(
                rng.gen_range(MIN_ROW..=MAX_ROW),
                rng.gen_range(MIN_COL..=MAX_COL),
            );
            if !snake.contains(pos) {
                return Self { pos };
            }
        }
    }

    pub fn pos(&self) -> Coord {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board;
    use crate::game::direction::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_spawn() {
        assert_eq!(Food::fixed().pos(), Coord::new(10, 20));
    }

    #[test]
    fn test_place_avoids_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        // A long snake filling most of row 10, where the rng has to
        // reject quite a few draws.
        let body = (MIN_COL..=MAX_COL).map(|col| Coord::new(10, col)).collect();
        let snake = Snake::from_body(body);

        for _ in 0..500 {
            let food = Food::place(&mut rng, &snake);
            assert!(!snake.contains(food.pos()));
            assert!(board::in_interior(food.pos()));
        }
    }

    #[test]
    fn test_place_stays_in_interior() {
        let mut rng = StdRng::seed_from_u64(42);
        let snake = Snake::new(Coord::new(4, 10), Direction::Right, 3);

        for _ in 0..1000 {
            let food = Food::place(&mut rng, &snake);
            assert!(board::in_interior(food.pos()));
        }
    }
}
