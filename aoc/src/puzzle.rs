use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use clap::Parser;
use tracing::{debug, info, warn};

use crate::{config, input, logging, Config, Error, Result};

pub type Answer = i64;

/// Lets solvers return whatever integer type is natural for them.
pub trait IntoAnswer {
    fn into_answer(self) -> Answer;
}

macro_rules! impl_into_answer {
    ($($t:ty),*) => {
        $(
            impl IntoAnswer for $t {
                fn into_answer(self) -> Answer {
                    self as Answer
                }
            }
        )*
    };
}

impl_into_answer!(i32, i64, u32, u64, usize);

const PART_NAMES: [&str; 2] = ["First part", "Bonus"];

#[derive(Parser, Debug, Default)]
#[command()]
pub struct Cli {
    /// Read the puzzle input from this file instead of the cache
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Only run this part (1 or 2)
    #[arg(short, long)]
    pub part: Option<usize>,

    /// Don't check the embedded examples before solving
    #[arg(long)]
    pub skip_examples: bool,
}

type Part = Box<dyn Fn(&str) -> Answer>;

struct Example {
    input: &'static str,
    expected: Vec<Option<Answer>>,
}

pub struct Puzzle {
    year: u16,
    day: u8,
    parts: Vec<Part>,
    examples: Vec<Example>,
}

impl Puzzle {
    pub fn new(year: u16, day: u8) -> Self {
        Self {
            year,
            day,
            parts: vec![],
            examples: vec![],
        }
    }

    pub fn part<T: IntoAnswer + 'static>(mut self, f: fn(&str) -> T) -> Self {
        self.parts.push(Box::new(move |input| f(input).into_answer()));
        self
    }

    /// `expected[i]` is the answer for part `i + 1`, or `None` if this example
    /// doesn't say anything about that part.
    pub fn example(mut self, input: &'static str, expected: &[Option<Answer>]) -> Self {
        self.examples.push(Example {
            input: input.trim(),
            expected: expected.to_vec(),
        });
        self
    }

    pub fn check_examples(&self, only: Option<usize>) -> Result<()> {
        if self.examples.is_empty() {
            warn!(day = self.day, "no examples provided");
        }

        for (i, example) in self.examples.iter().enumerate() {
            for (p, expected) in example.expected.iter().enumerate() {
                let Some(expected) = *expected else {
                    continue;
                };

                if only.is_some_and(|only| only != p) {
                    continue;
                }

                let part = self.parts.get(p).ok_or(Error::NoSuchPart(p + 1))?;
                let actual = part(example.input);

                if actual != expected {
                    return Err(Error::ExampleFailed {
                        example: i + 1,
                        part: p + 1,
                        expected,
                        actual,
                    });
                }

                info!(example = i + 1, part = p + 1, "example passed");
            }
        }

        Ok(())
    }

    /// Answers for every selected part, with how long each took.
    pub fn solve(&self, input: &str, only: Option<usize>) -> Vec<(usize, Answer, Duration)> {
        self.parts
            .iter()
            .enumerate()
            .filter(|(p, _)| only.map_or(true, |only| only == *p))
            .map(|(p, part)| {
                let (answer, elapsed) = time(|| part(input));
                (p, answer, elapsed)
            })
            .collect()
    }

    pub fn run(self) -> Result<()> {
        self.run_with(Cli::parse())
    }

    pub fn run_with(self, cli: Cli) -> Result<()> {
        // before logging, so `RUST_LOG` may come from `.env`
        let dotenv = config::load_dotenv();
        logging::init();
        if let Err(err) = dotenv {
            debug!(%err, "no .env loaded");
        }

        let only = match cli.part {
            Some(p) if p == 0 || p > self.parts.len() => return Err(Error::NoSuchPart(p)),
            Some(p) => Some(p - 1),
            None => None,
        };

        if !cli.skip_examples {
            self.check_examples(only)?;
        }

        let input = match &cli.input {
            Some(path) => fs::read_to_string(path)?,
            None => input::load(&Config::from_env(), self.year, self.day)?,
        };

        for (p, answer, elapsed) in self.solve(&input, only) {
            println!("{}: {answer}", PART_NAMES.get(p).unwrap_or(&"Part"));
            println!("  took {elapsed:?}");
        }

        Ok(())
    }
}

pub fn time<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let t0 = Instant::now();
    let res = f();
    (res, t0.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_lines(input: &str) -> usize {
        input.lines().count()
    }

    fn sum_numbers(input: &str) -> i64 {
        input.lines().map(|line| line.parse::<i64>().unwrap()).sum()
    }

    #[test]
    fn examples_are_trimmed_and_checked() {
        let puzzle = Puzzle::new(2021, 1)
            .part(count_lines)
            .part(sum_numbers)
            .example(
                "
1
2
3
",
                &[Some(3), Some(6)],
            );

        assert!(puzzle.check_examples(None).is_ok());
    }

    #[test]
    fn failing_example_reports_part_and_values() {
        let puzzle = Puzzle::new(2021, 1)
            .part(count_lines)
            .part(sum_numbers)
            .example("1\n2", &[None, Some(4)]);

        match puzzle.check_examples(None) {
            Err(Error::ExampleFailed {
                example,
                part,
                expected,
                actual,
            }) => {
                assert_eq!((example, part, expected, actual), (1, 2, 4, 3));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        // only checking the first part skips the broken expectation
        assert!(puzzle.check_examples(Some(0)).is_ok());
    }

    #[test]
    fn example_for_missing_part() {
        let puzzle = Puzzle::new(2021, 25)
            .part(count_lines)
            .example("x", &[Some(1), Some(0)]);

        assert!(matches!(
            puzzle.check_examples(None),
            Err(Error::NoSuchPart(2))
        ));
    }

    #[test]
    fn solve_selects_parts() {
        let puzzle = Puzzle::new(2021, 1).part(count_lines).part(sum_numbers);

        let all = puzzle
            .solve("10\n20", None)
            .into_iter()
            .map(|(p, answer, _)| (p, answer))
            .collect::<Vec<_>>();
        assert_eq!(all, vec![(0, 2), (1, 30)]);

        let bonus = puzzle
            .solve("10\n20", Some(1))
            .into_iter()
            .map(|(p, answer, _)| (p, answer))
            .collect::<Vec<_>>();
        assert_eq!(bonus, vec![(1, 30)]);
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::try_parse_from(["day05", "--input", "in.txt", "-p", "2", "--skip-examples"])
            .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("in.txt")));
        assert_eq!(cli.part, Some(2));
        assert!(cli.skip_examples);
    }

    #[test]
    fn time_returns_result() {
        let (n, _) = time(|| 6 * 7);
        assert_eq!(n, 42);
    }

    fn missing_input() -> Option<PathBuf> {
        Some(PathBuf::from("does/not/exist.txt"))
    }

    #[test]
    fn run_checks_examples_before_reading_input() {
        let puzzle = Puzzle::new(2021, 1)
            .part(count_lines)
            .example("a\nb", &[Some(5)]);

        let cli = Cli {
            input: missing_input(),
            ..Cli::default()
        };

        assert!(matches!(
            puzzle.run_with(cli),
            Err(Error::ExampleFailed {
                example: 1,
                part: 1,
                expected: 5,
                actual: 2
            })
        ));
    }

    #[test]
    fn run_rejects_parts_out_of_range() {
        for part in [0, 3] {
            let puzzle = Puzzle::new(2021, 1).part(count_lines).part(sum_numbers);
            let cli = Cli {
                input: missing_input(),
                part: Some(part),
                ..Cli::default()
            };

            assert!(matches!(puzzle.run_with(cli), Err(Error::NoSuchPart(p)) if p == part));
        }
    }

    #[test]
    fn run_skips_examples_and_reads_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "10\n20\n").unwrap();

        let puzzle = Puzzle::new(2021, 1)
            .part(count_lines)
            .example("a\nb", &[Some(5)]);

        let cli = Cli {
            input: Some(path),
            skip_examples: true,
            ..Cli::default()
        };
        assert!(puzzle.run_with(cli).is_ok());
    }

    #[test]
    fn run_reports_unreadable_input_file() {
        let puzzle = Puzzle::new(2021, 1).part(count_lines);
        let cli = Cli {
            input: missing_input(),
            skip_examples: true,
            ..Cli::default()
        };

        assert!(matches!(puzzle.run_with(cli), Err(Error::Io(_))));
    }
}
