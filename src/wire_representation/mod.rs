#![allow(missing_docs)]
//! types to match the json representation of a multi-snake candy game
mod simulator;

pub use simulator::StepAction;

use crate::types::{
    body_orientation, CandyGettableGame, Move, SizeDeterminableGame, SnakeBodyGettableGame,
    SnakeIDGettableGame, Vector,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Struct that matches the `snake` object from the json representation.
/// The body is ordered head first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    pub id: String,
    pub body: VecDeque<Position>,
}

impl Snake {
    pub fn head(&self) -> Option<Position> {
        self.body.front().copied()
    }

    /// the direction this snake's head is facing, if its first two segments
    /// are apart
    pub fn orientation(&self) -> Option<Move> {
        body_orientation(&self.body)
    }
}

/// Struct that matches the `position` object from the json representation
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: (self.x as i64 + v.x) as i32,
            y: (self.y as i64 + v.y) as i32,
        }
    }
    pub fn sub_vec(&self, v: Vector) -> Position {
        Position {
            x: (self.x as i64 - v.x) as i32,
            y: (self.y as i64 - v.y) as i32,
        }
    }

    pub fn to_vector(&self) -> Vector {
        Vector {
            x: self.x as i64,
            y: self.y as i64,
        }
    }

    /// euclidean distance between two positions
    pub fn dist(&self, other: &Position) -> f64 {
        self.sub_vec(other.to_vector()).to_vector().length()
    }
}

/// The two kinds of candy that can be on the board
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CandyKind {
    Standard,
    Bonus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candy {
    pub position: Position,
    pub kind: CandyKind,
}

/// Root object for a game state, you probably want to do:
/// ```
/// # use snake_features::wire_representation::Game;
/// # let body = b"{\"grid_size\":20,\"snakes\":[{\"id\":\"a\",\"body\":[{\"x\":5,\"y\":5},{\"x\":5,\"y\":4}]}],\"candies\":[{\"position\":{\"x\":5,\"y\":7},\"kind\":\"standard\"}]}";
/// let g: Result<Game, _> = serde_json::from_slice(body);
/// # assert!(g.is_ok());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub grid_size: u32,
    pub snakes: Vec<Snake>,
    pub candies: Vec<Candy>,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 0..self.grid_size {
            let k = self.grid_size - i - 1;
            for j in 0..self.grid_size {
                let position = Position {
                    x: j as i32,
                    y: k as i32,
                };
                if let Some(candy) = self.candies.iter().find(|c| c.position == position) {
                    match candy.kind {
                        CandyKind::Standard => write!(f, "c")?,
                        CandyKind::Bonus => write!(f, "b")?,
                    }
                } else if self.snakes.iter().any(|s| s.head() == Some(position)) {
                    write!(f, "H")?;
                } else if self.snakes.iter().any(|s| s.body.contains(&position)) {
                    write!(f, "s")?;
                } else {
                    write!(f, ".")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        for snake in self.snakes.iter() {
            write!(f, "({} head: {:?}) ", snake.id, snake.head())?;
        }
        Ok(())
    }
}

impl Game {
    pub fn off_board(&self, position: Position) -> bool {
        position.x < 0
            || position.x >= self.grid_size as i32
            || position.y < 0
            || position.y >= self.grid_size as i32
    }

    pub fn snake(&self, snake_id: &str) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id == snake_id)
    }

    pub fn snake_ids(&self) -> Vec<String> {
        self.snakes.iter().map(|s| s.id.clone()).collect::<Vec<_>>()
    }

    /// unit steps for a snake that neither reverse onto its neck nor leave the
    /// board. An empty list means the snake is trapped.
    pub fn legal_actions(&self, snake_id: &str) -> Vec<StepAction> {
        let snake = match self.snake(snake_id) {
            Some(s) => s,
            None => return vec![],
        };
        let head = match snake.head() {
            Some(h) => h,
            None => return vec![],
        };
        Move::all()
            .into_iter()
            .filter(|mv| {
                let new_head = head.add_vec(mv.to_vector());
                let reverses = snake.body.len() > 1 && snake.body[1] == new_head;
                !reverses && !self.off_board(new_head)
            })
            .map(StepAction::step)
            .collect()
    }
}

impl SnakeIDGettableGame for Game {
    type SnakeIDType = String;
    fn get_snake_ids(&self) -> Vec<Self::SnakeIDType> {
        self.snake_ids()
    }
}

impl SnakeBodyGettableGame for Game {
    fn get_snake_body(&self, snake_id: &Self::SnakeIDType) -> Option<&VecDeque<Position>> {
        self.snake(snake_id).map(|s| &s.body)
    }
}

impl CandyGettableGame for Game {
    fn get_candies(&self) -> Vec<(Position, CandyKind)> {
        self.candies.iter().map(|c| (c.position, c.kind)).collect()
    }
}

impl SizeDeterminableGame for Game {
    fn grid_size(&self) -> u32 {
        self.grid_size
    }
}
