//! Shared plumbing for the daily puzzle binaries: configuration, input
//! loading and caching, example checks, timing and logging.
//!
//! Every day wires its solvers up the same way:
//!
//! ```no_run
//! fn solve(input: &str) -> usize {
//!     input.lines().count()
//! }
//!
//! fn main() -> aoc::Result<()> {
//!     aoc::Puzzle::new(2021, 1)
//!         .part(solve)
//!         .example("1\n2\n3", &[Some(3)])
//!         .run()
//! }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod puzzle;

pub use config::Config;
pub use error::{Error, Result};
pub use puzzle::{time, Answer, Cli, IntoAnswer, Puzzle};
