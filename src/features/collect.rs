use std::collections::VecDeque;
use std::fmt::{self, Debug};

use itertools::Itertools;
use serde::Serialize;
use tracing::{instrument, trace};

use super::{Family, FeatureExtractor};
use crate::error::{FeatureError, Result};
use crate::types::{body_orientation, Action, FeatureSourceGame, Vector};
use crate::wire_representation::{CandyKind, Position};

/// One local observation. Offsets run from the observed object to the head
/// (after the candidate action), rotated into the head's frame when rotation
/// is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feature {
    /// the snake has no legal action
    Trapped,
    /// a candy of the given kind
    Candy(CandyKind, Vector),
    /// an opposing head
    AdvHead(Vector),
    /// an opposing body segment, excluding the head
    AdvTail(Vector),
    /// one of our own body segments, excluding the head
    MyTail(Vector),
    /// distance to the nearest vertical wall
    X(i64),
    /// distance to the nearest horizontal wall
    Y(i64),
}

/// A feature along with its weight
pub type Observation = (Feature, f64);

impl Feature {
    /// the family whose columns this feature lands in
    pub fn family(&self) -> Family {
        match self {
            Feature::Trapped => Family::Trapped,
            Feature::Candy(CandyKind::Standard, _) => Family::Candy1,
            Feature::Candy(CandyKind::Bonus, _) => Family::Candy2,
            Feature::AdvHead(_) => Family::AdvHead,
            Feature::AdvTail(_) => Family::AdvTail,
            Feature::MyTail(_) => Family::MyTail,
            Feature::X(_) => Family::X,
            Feature::Y(_) => Family::Y,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Trapped => write!(f, "trapped"),
            Feature::Candy(_, offset)
            | Feature::AdvHead(offset)
            | Feature::AdvTail(offset)
            | Feature::MyTail(offset) => write!(f, "{}{}", self.family(), offset),
            Feature::X(d) | Feature::Y(d) => write!(f, "{}={}", self.family(), d),
        }
    }
}

/// the body a snake would have after `action`, built on a copy so the game is
/// never touched
fn hypothetical_body<A: Action>(body: &VecDeque<Position>, action: &A) -> VecDeque<Position> {
    let mut moved = body.clone();
    if action.norm() == 1 {
        if let Some(head) = body.front() {
            moved.pop_back();
            moved.push_front(head.add_vec(action.direction().to_vector()));
        }
    } else {
        action.advance(&mut moved);
    }
    moved
}

fn boundary_distance(coord: i32, grid_size: u32, half_extent: usize) -> i64 {
    let coord = coord as i64;
    let far = grid_size as i64 - 1 - coord;
    coord.min(far).clamp(0, half_extent as i64)
}

impl<I: PartialEq + Debug> FeatureExtractor<I> {
    /// Collects every local observation for this extractor's snake, as if it
    /// had taken `action`. `None` means the snake has no legal action, which
    /// yields the single trapped observation.
    #[instrument(level = "trace", skip_all)]
    pub fn collect<G, A>(&self, game: &G, action: Option<&A>) -> Result<Vec<Observation>>
    where
        G: FeatureSourceGame<SnakeIDType = I>,
        A: Action,
    {
        let action = match action {
            Some(a) => a,
            None => return Ok(vec![(Feature::Trapped, 1.0)]),
        };

        let body = game
            .get_snake_body(&self.agent)
            .ok_or_else(|| FeatureError::UnknownAgent(format!("{:?}", self.agent)))?;
        let moved = hypothetical_body(body, action);
        let head = *moved
            .front()
            .ok_or_else(|| FeatureError::EmptyBody(format!("{:?}", self.agent)))?;
        // a body without a usable neck faces the way it was moved
        let orientation = body_orientation(&moved).unwrap_or_else(|| action.direction());

        let radius = self.config.radius as f64;
        let near = |p: &Position| head.dist(p) < radius;
        let rel_pos = |p: &Position| {
            let offset = head.sub_vec(p.to_vector()).to_vector();
            if self.config.rotate {
                offset.rotate(orientation)
            } else {
                offset
            }
        };

        let opponents = game
            .get_snake_ids()
            .into_iter()
            .filter(|id| id != &self.agent)
            .filter_map(|id| game.get_snake_body(&id))
            .collect_vec();

        let mut features = game
            .get_candies()
            .into_iter()
            .filter(|(c, _)| near(c))
            .map(|(c, kind)| (Feature::Candy(kind, rel_pos(&c)), 1.0))
            .collect_vec();
        features.extend(
            opponents
                .iter()
                .filter_map(|s| s.front())
                .filter(|h| near(*h))
                .map(|h| (Feature::AdvHead(rel_pos(h)), 1.0)),
        );
        features.extend(
            opponents
                .iter()
                .flat_map(|s| s.iter().skip(1))
                .filter(|p| near(*p))
                .map(|p| (Feature::AdvTail(rel_pos(p)), 1.0)),
        );
        // our own tail is read from the body before the move
        features.extend(
            body.iter()
                .skip(1)
                .filter(|p| near(*p))
                .map(|p| (Feature::MyTail(rel_pos(p)), 1.0)),
        );

        let grid_size = game.grid_size();
        let half_extent = self.prefix.half_extent();
        features.push((
            Feature::X(boundary_distance(head.x, grid_size, half_extent)),
            1.0,
        ));
        features.push((
            Feature::Y(boundary_distance(head.y, grid_size, half_extent)),
            1.0,
        ));

        trace!(observations = features.len(), "collected features");
        Ok(features)
    }
}
