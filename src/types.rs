//! various types that are useful for describing game state to the feature extractor
use crate::wire_representation::{CandyKind, Position};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::{self, Debug};
use std::hash::Hash;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Vector {
    /// x position
    pub x: i64,
    /// y position
    pub y: i64,
}

impl Vector {
    /// the zero offset
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    /// rotates this vector into the frame of an agent facing `orientation`, so
    /// that the agent's forward direction always maps onto `Move::Up`
    pub fn rotate(self, orientation: Move) -> Vector {
        let Vector { x, y } = self;
        match orientation {
            Move::Up => Vector { x, y },
            Move::Right => Vector { x: -y, y: x },
            Move::Down => Vector { x: -x, y: -y },
            Move::Left => Vector { x: y, y: -x },
        }
    }

    /// euclidean length of this vector
    pub fn length(&self) -> f64 {
        ((self.x * self.x + self.y * self.y) as f64).sqrt()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents a move, which doubles as the facing direction of a snake head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Right,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Left => write!(f, "left"),
            Move::Right => write!(f, "right"),
            Move::Up => write!(f, "up"),
            Move::Down => write!(f, "down"),
        }
    }
}

impl Move {
    /// convert this move to a vector
    pub fn to_vector(self) -> Vector {
        match self {
            Move::Left => Vector { x: -1, y: 0 },
            Move::Right => Vector { x: 1, y: 0 },
            Move::Up => Vector { x: 0, y: 1 },
            Move::Down => Vector { x: 0, y: -1 },
        }
    }

    /// create a Move from the given vector, None if it is not a unit step
    pub fn from_vector(vector: Vector) -> Option<Self> {
        match vector {
            Vector { x: -1, y: 0 } => Some(Self::Left),
            Vector { x: 1, y: 0 } => Some(Self::Right),
            Vector { x: 0, y: 1 } => Some(Self::Up),
            Vector { x: 0, y: -1 } => Some(Self::Down),
            _ => None,
        }
    }

    /// returns a vec of all possible moves
    pub fn all() -> Vec<Move> {
        vec![Move::Up, Move::Down, Move::Left, Move::Right]
    }

    /// the direction a quarter turn counter clockwise from this one
    pub fn turn_left(self) -> Move {
        match self {
            Move::Up => Move::Left,
            Move::Left => Move::Down,
            Move::Down => Move::Right,
            Move::Right => Move::Up,
        }
    }
}

/// the direction a body faces: the move from its neck to its head. None for
/// bodies with a single segment, or with a neck stacked under the head.
pub fn body_orientation(body: &VecDeque<Position>) -> Option<Move> {
    let head = body.front()?;
    let neck = body.get(1)?;
    Move::from_vector(head.sub_vec(neck.to_vector()).to_vector())
}

/// A candidate action for the acting snake
pub trait Action: Debug {
    /// how many cells the head is displaced by this action
    fn norm(&self) -> u32;

    /// the unit direction of this action
    fn direction(&self) -> Move;

    /// applies the full movement semantics of this action to a body, head first.
    /// Only ever called on a private copy of a snake body.
    fn advance(&self, body: &mut VecDeque<Position>);
}

/// A game for which one can get the snake ids
pub trait SnakeIDGettableGame {
    #[allow(missing_docs)]
    type SnakeIDType: PartialEq + Debug + Eq + Hash + Clone + Send;

    #[allow(missing_docs)]
    fn get_snake_ids(&self) -> Vec<Self::SnakeIDType>;
}

/// A game where an entire snake body is gettable
pub trait SnakeBodyGettableGame: SnakeIDGettableGame {
    /// return the positions for a given snake body, in order from head to tail
    fn get_snake_body(&self, snake_id: &Self::SnakeIDType) -> Option<&VecDeque<Position>>;
}

/// A game for which the candies on the board can be queried
pub trait CandyGettableGame {
    /// every candy on the board along with its kind
    fn get_candies(&self) -> Vec<(Position, CandyKind)>;
}

/// a game for which the size of the (square) game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn grid_size(&self) -> u32;
}

/// Everything the feature extractor reads from a game
pub trait FeatureSourceGame:
    SnakeBodyGettableGame + CandyGettableGame + SizeDeterminableGame + Debug
{
}

impl<T> FeatureSourceGame for T where
    T: SnakeBodyGettableGame + CandyGettableGame + SizeDeterminableGame + Debug
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_maps_orientation_onto_up() {
        for mv in Move::all() {
            assert_eq!(mv.to_vector().rotate(mv), Move::Up.to_vector());
        }
    }

    #[test]
    fn test_rotate_preserves_length() {
        let v = Vector { x: 3, y: -7 };
        for mv in Move::all() {
            assert!((v.rotate(mv).length() - v.length()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_move_from_vector() {
        for mv in Move::all() {
            assert_eq!(Move::from_vector(mv.to_vector()), Some(mv));
        }
        assert_eq!(Move::from_vector(Vector { x: 2, y: 0 }), None);
        assert_eq!(Move::from_vector(Vector::ZERO), None);
    }

    #[test]
    fn test_turn_left_cycles() {
        let mut mv = Move::Right;
        for _ in 0..4 {
            mv = mv.turn_left();
        }
        assert_eq!(mv, Move::Right);
        assert_eq!(Move::Up.turn_left(), Move::Left);
    }

    #[test]
    fn test_body_orientation() {
        let p = |x, y| Position { x, y };
        let body: VecDeque<_> = vec![p(3, 4), p(2, 4), p(1, 4)].into();
        assert_eq!(body_orientation(&body), Some(Move::Right));
        let body: VecDeque<_> = vec![p(3, 4), p(3, 5)].into();
        assert_eq!(body_orientation(&body), Some(Move::Down));
        let body: VecDeque<_> = vec![p(3, 4)].into();
        assert_eq!(body_orientation(&body), None);
        let stacked: VecDeque<_> = vec![p(3, 4), p(3, 4), p(3, 4)].into();
        assert_eq!(body_orientation(&stacked), None);
    }
}
