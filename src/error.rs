use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("invalid command {0:?}: expected an integer between 0 and 4")]
    InvalidCommand(String),

    #[error("unknown seed pattern {0:?}: expected random, spaceship, or oscillator")]
    UnknownPattern(String),

    #[error("cannot compute the centroid of a grid with no alive cells")]
    DegenerateCentroid,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
