//! Local feature extraction around one snake's head.
//!
//! A [FeatureExtractor] is built once per agent and grid size. Building it
//! lays out the index tables, after which [FeatureExtractor::collect] turns a
//! game and a candidate action into a list of [Feature] observations, and the
//! materializers (`to_dense`, `to_sparse_row`, `to_sparse_batch`) turn those
//! observations into columns of a fixed width vector for linear scoring.
//!
//! ```
//! # use snake_features::features::{ExtractorConfig, FeatureExtractor};
//! # use snake_features::wire_representation::{Game, StepAction};
//! # use snake_features::types::Move;
//! # let body = b"{\"grid_size\":20,\"snakes\":[{\"id\":\"a\",\"body\":[{\"x\":5,\"y\":5},{\"x\":5,\"y\":4}]}],\"candies\":[{\"position\":{\"x\":5,\"y\":7},\"kind\":\"standard\"}]}";
//! let game: Game = serde_json::from_slice(body).unwrap();
//! let extractor = FeatureExtractor::new("a".to_string(), ExtractorConfig::new(20)).unwrap();
//! let observations = extractor
//!     .collect(&game, Some(&StepAction::step(Move::Up)))
//!     .unwrap();
//! let dense = extractor.to_dense(&observations).unwrap();
//! assert_eq!(dense.len(), extractor.dimension());
//! assert_eq!(dense.sum(), 4.0);
//! ```
mod collect;
mod index;
mod materialize;

pub use collect::{Feature, Observation};
pub use index::{Family, OffsetIndex, PrefixTable};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FeatureError, Result};
use crate::types::Vector;

const DEFAULT_RADIUS: u32 = 16;

fn default_radius() -> u32 {
    DEFAULT_RADIUS
}

fn default_rotate() -> bool {
    true
}

/// Parameters of a feature extractor
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// width and height of the square grid
    pub grid_size: u32,
    /// only objects strictly closer than this to the head are observed
    #[serde(default = "default_radius")]
    pub radius: u32,
    /// rotate offsets into the frame of the snake's facing direction
    #[serde(default = "default_rotate")]
    pub rotate: bool,
}

impl ExtractorConfig {
    /// a config for a grid, with the default radius and rotation enabled
    pub fn new(grid_size: u32) -> Self {
        ExtractorConfig {
            grid_size,
            radius: DEFAULT_RADIUS,
            rotate: true,
        }
    }

    #[allow(missing_docs)]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    #[allow(missing_docs)]
    pub fn with_rotation(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    /// checks that the radius and grid size are both at least one
    pub fn validate(&self) -> Result<()> {
        if self.radius < 1 {
            return Err(FeatureError::InvalidConfig {
                field: "radius",
                value: self.radius,
            });
        }
        if self.grid_size < 1 {
            return Err(FeatureError::InvalidConfig {
                field: "grid_size",
                value: self.grid_size,
            });
        }
        Ok(())
    }
}

/// Extracts features for a single agent. The tables are immutable once built,
/// so an extractor can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct FeatureExtractor<I> {
    agent: I,
    config: ExtractorConfig,
    index: OffsetIndex,
    prefix: PrefixTable,
}

impl<I> FeatureExtractor<I> {
    /// validates the config and builds the index tables for `agent`
    pub fn new(agent: I, config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        let index = OffsetIndex::build(config.radius);
        let prefix = PrefixTable::new(index.tiles(), config.grid_size);
        debug!(
            radius = config.radius,
            grid_size = config.grid_size,
            tiles = index.tiles(),
            dimension = prefix.total(),
            "built feature tables"
        );
        Ok(FeatureExtractor {
            agent,
            config,
            index,
            prefix,
        })
    }

    /// the snake this extractor observes from
    pub fn agent(&self) -> &I {
        &self.agent
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// the width of every materialized feature vector
    pub fn dimension(&self) -> usize {
        self.prefix.total()
    }

    /// the first column of a family
    pub fn prefix(&self, family: Family) -> usize {
        self.prefix.start(family)
    }

    /// the slot of an offset within each offset family
    pub fn index_of(&self, offset: &Vector) -> Option<usize> {
        self.index.get(offset)
    }

    #[allow(missing_docs)]
    pub fn offsets(&self) -> &OffsetIndex {
        &self.index
    }

    #[allow(missing_docs)]
    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefix
    }
}
