use std::collections::VecDeque;

use crate::game::board::{self, Coord};
use crate::game::direction::Direction;
use crate::game::food::Food;

/// The snake itself
///
/// The body is a deque with the head at the front and the tail at the
/// back, so a tick is one O(1) push at the front and (when no food was
/// eaten) one O(1) pop at the back. The body is never empty: snakes are
/// created with at least three segments and only ever shrink by the one
/// segment that the preceding advance added.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Coord>,
}

impl Snake {
    /// Create a snake of `length` segments with its head at `head`,
    /// facing `direction`, with the body trailing behind the head.
    pub fn new(head: Coord, direction: Direction, length: usize) -> Self {
        assert!(length >= 3, "snake must start with at least 3 segments");

        let (dr, dc) = direction.delta();
        let body = (0..length as i32)
            .map(|i| Coord::new(head.row - dr * i, head.col - dc * i))
            .collect();

        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Coord {
        self.body[0]
    }

    /// Get the number of body segments
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check whether any segment occupies `pos`
    pub fn contains(&self, pos: Coord) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend a new head one step in `direction`.
    ///
    /// The length grows by one here and stays grown until the loop calls
    /// `shrink_tail`; the collision and food checks in between must see
    /// the post-move body, so that is deliberate.
    pub fn advance(&mut self, direction: Direction) {
        let new_head = self.head().step(direction);
        self.body.push_front(new_head);
        tracing::trace!(?new_head, length = self.body.len(), "snake advanced");
    }

    /// Apply the board's wrap rule to the head.
    ///
    /// Only the head can be out of range; every other segment is a
    /// previous head position and was wrapped when it was one.
    pub fn wrap_head(&mut self) {
        self.body[0] = board::wrap(self.body[0]);
    }

    /// True iff the head overlaps any other segment (run after
    /// advance + wrap_head)
    pub fn is_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    /// True iff the head sits on the food
    pub fn has_eaten(&self, food: &Food) -> bool {
        self.head() == food.pos()
    }

    /// Remove and return the tail segment. Called exactly once per tick
    /// in which no food was eaten, undoing the growth from `advance`.
    pub fn shrink_tail(&mut self) -> Coord {
        self.body
            .pop_back()
            .expect("snake body is never empty")
    }

    /// Body segments, head first
    pub fn segments(&self) -> impl Iterator<Item = Coord> + '_ {
        self.body.iter().copied()
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Coord>) -> Self {
        Self { body: body.into() }
    }
}
