use super::Position;
use crate::types::{Action, Move};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A move in one direction, covering `speed` cells in a single turn. A speed of
/// one is an ordinary step, anything longer is a dash.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepAction {
    pub direction: Move,
    pub speed: u32,
}

impl StepAction {
    pub fn step(direction: Move) -> Self {
        StepAction {
            direction,
            speed: 1,
        }
    }

    pub fn dash(direction: Move, speed: u32) -> Self {
        StepAction { direction, speed }
    }
}

impl Action for StepAction {
    fn norm(&self) -> u32 {
        self.speed
    }

    fn direction(&self) -> Move {
        self.direction
    }

    // every cell covered pushes a new head and drops the last tail segment, so
    // the body keeps its length
    fn advance(&self, body: &mut VecDeque<Position>) {
        let step = self.direction.to_vector();
        for _ in 0..self.speed {
            let head = match body.front() {
                Some(h) => *h,
                None => return,
            };
            body.pop_back();
            body.push_front(head.add_vec(step));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(cells: &[(i32, i32)]) -> VecDeque<Position> {
        cells.iter().map(|&(x, y)| Position { x, y }).collect()
    }

    #[test]
    fn test_step_moves_head_and_drops_tail() {
        let mut b = body(&[(3, 3), (3, 2), (3, 1)]);
        StepAction::step(Move::Right).advance(&mut b);
        assert_eq!(b, body(&[(4, 3), (3, 3), (3, 2)]));
    }

    #[test]
    fn test_dash_covers_every_cell() {
        let mut b = body(&[(3, 3), (3, 2), (3, 1)]);
        let dash = StepAction::dash(Move::Up, 2);
        assert_eq!(dash.norm(), 2);
        dash.advance(&mut b);
        assert_eq!(b, body(&[(3, 5), (3, 4), (3, 3)]));
    }

    #[test]
    fn test_zero_speed_and_empty_body_are_noops() {
        let mut b = body(&[(3, 3), (3, 2)]);
        StepAction::dash(Move::Up, 0).advance(&mut b);
        assert_eq!(b, body(&[(3, 3), (3, 2)]));

        let mut empty = VecDeque::new();
        StepAction::step(Move::Up).advance(&mut empty);
        assert!(empty.is_empty());
    }
}
