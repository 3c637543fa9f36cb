use thiserror::Error;

use crate::puzzle::Answer;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read or write puzzle input: {0}")]
    Io(#[from] std::io::Error),

    #[error("request for puzzle input failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx. `body` is whatever it said.
    #[error("server responded with {status}: {body}")]
    Http { status: u16, body: String },

    #[error("SESSION is not set, cannot fetch input for {year} day {day}")]
    MissingSession { year: u16, day: u8 },

    #[error("example {example} failed for part {part}: expected {expected}, got {actual}")]
    ExampleFailed {
        example: usize,
        part: usize,
        expected: Answer,
        actual: Answer,
    },

    #[error("puzzle has no part {0}")]
    NoSuchPart(usize),
}
