// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown motion action \"{0}\" (expected down|move|up|cancel)")]
    UnknownAction(String),

    #[error("invalid coordinate \"{0}\"")]
    InvalidCoordinate(String),

    #[error("{0} requires x and y coordinates")]
    MissingCoordinates(&'static str),

    #[error("unexpected trailing input \"{0}\"")]
    TrailingInput(String),
}
