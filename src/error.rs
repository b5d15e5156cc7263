//! the error type shared by table construction, collection and materialization
use crate::features::Family;
use thiserror::Error;

/// Errors raised while building or using a feature extractor
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// A configuration value is outside of its valid range.
    #[error("invalid configuration: {field} must be at least 1, got {value}")]
    InvalidConfig {
        /// name of the offending field
        field: &'static str,
        /// the rejected value
        value: u32,
    },
    /// The acting snake is not part of the game.
    #[error("snake {0} is not in the game")]
    UnknownAgent(String),
    /// The acting snake has no body segments to take a head from.
    #[error("snake {0} has an empty body")]
    EmptyBody(String),
    /// A relative offset has no slot in the offset index table.
    #[error("{family} offset ({dx}, {dy}) is outside of the indexed radius")]
    OffsetOutOfRange {
        #[allow(missing_docs)]
        family: Family,
        #[allow(missing_docs)]
        dx: i64,
        #[allow(missing_docs)]
        dy: i64,
    },
    /// A boundary distance does not fit in its family's columns.
    #[error("{family} distance {value} is outside of 0..={max}")]
    ScalarOutOfRange {
        #[allow(missing_docs)]
        family: Family,
        #[allow(missing_docs)]
        value: i64,
        #[allow(missing_docs)]
        max: i64,
    },
}

/// Result alias for fallible feature operations
pub type Result<T> = std::result::Result<T, FeatureError>;
