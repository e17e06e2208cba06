pub mod constants;
pub mod curve;
pub mod potential;
pub mod rating_adjuster;
pub mod scores;
pub mod structures;

use thiserror::Error;

/// Query validation failures, surfaced to the user before any fetch happens.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("minimum accuracy cannot be higher than maximum accuracy")]
    AccuracyBounds,

    #[error("minimum stars cannot be higher than maximum stars")]
    StarBounds,

    #[error("minimum pp cannot be higher than maximum pp")]
    PpBounds,

    #[error("a player id is required unless all leaderboards are requested")]
    MissingPlayer
}
