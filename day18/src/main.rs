use std::{fmt, iter::Peekable, ops::Add, str::Chars, str::FromStr};

use itertools::Itertools;
use rayon::prelude::*;

const EXAMPLE: &str = "
[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
[[[5,[2,8]],4],[5,[[9,9],0]]]
[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
[[[[5,4],[7,7]],8],[[8,3],8]]
[[9,3],[[9,9],[6,[4,9]]]]
[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 18)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(4140), Some(3993)])
        .run()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Snail {
    Regular(u32),
    Pair(Box<Snail>, Box<Snail>),
}

use Snail::*;

impl Snail {
    fn pair(left: Snail, right: Snail) -> Self {
        Pair(Box::new(left), Box::new(right))
    }

    fn read(chars: &mut Peekable<Chars>) -> Result<Self, String> {
        match chars.next() {
            Some('[') => {
                let left = Snail::read(chars)?;
                expect(chars, ',')?;
                let right = Snail::read(chars)?;
                expect(chars, ']')?;
                Ok(Snail::pair(left, right))
            }
            Some(c) if c.is_ascii_digit() => {
                let mut n = c as u32 - '0' as u32;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    n = n * 10 + d;
                    chars.next();
                }
                Ok(Regular(n))
            }
            other => Err(format!("unexpected {other:?}")),
        }
    }

    fn regular_pair(&self) -> Option<(u32, u32)> {
        match self {
            Pair(l, r) => match (l.as_ref(), r.as_ref()) {
                (Regular(a), Regular(b)) => Some((*a, *b)),
                _ => None,
            },
            Regular(_) => None,
        }
    }

    fn add_leftmost(&mut self, value: u32) {
        match self {
            Regular(n) => *n += value,
            Pair(l, _) => l.add_leftmost(value),
        }
    }

    fn add_rightmost(&mut self, value: u32) {
        match self {
            Regular(n) => *n += value,
            Pair(_, r) => r.add_rightmost(value),
        }
    }

    /// Explodes the leftmost pair nested inside four others, returning the
    /// parts of it that still have to be carried to the left and right.
    fn explode(&mut self, depth: usize) -> Option<(Option<u32>, Option<u32>)> {
        if depth >= 4 {
            if let Some((a, b)) = self.regular_pair() {
                *self = Regular(0);
                return Some((Some(a), Some(b)));
            }
        }

        let Pair(l, r) = self else {
            return None;
        };

        if let Some((left, right)) = l.explode(depth + 1) {
            if let Some(value) = right {
                r.add_leftmost(value);
            }
            return Some((left, None));
        }

        if let Some((left, right)) = r.explode(depth + 1) {
            if let Some(value) = left {
                l.add_rightmost(value);
            }
            return Some((None, right));
        }

        None
    }

    fn split(&mut self) -> bool {
        match self {
            Regular(n) if *n >= 10 => {
                *self = Snail::pair(Regular(*n / 2), Regular((*n + 1) / 2));
                true
            }
            Regular(_) => false,
            Pair(l, r) => l.split() || r.split(),
        }
    }

    fn reduce(&mut self) {
        loop {
            if self.explode(0).is_some() {
                continue;
            }
            if !self.split() {
                break;
            }
        }
    }

    fn magnitude(&self) -> u32 {
        match self {
            Regular(n) => *n,
            Pair(l, r) => 3 * l.magnitude() + 2 * r.magnitude(),
        }
    }
}

fn expect(chars: &mut Peekable<Chars>, want: char) -> Result<(), String> {
    match chars.next() {
        Some(c) if c == want => Ok(()),
        other => Err(format!("expected {want:?}, got {other:?}")),
    }
}

impl FromStr for Snail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars().peekable();
        let snail = Snail::read(&mut chars)?;
        match chars.next() {
            None => Ok(snail),
            Some(c) => Err(format!("trailing {c:?} after {snail}")),
        }
    }
}

impl fmt::Display for Snail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regular(n) => write!(f, "{n}"),
            Pair(l, r) => write!(f, "[{l},{r}]"),
        }
    }
}

impl Add for Snail {
    type Output = Snail;

    fn add(self, rhs: Snail) -> Snail {
        let mut sum = Snail::pair(self, rhs);
        sum.reduce();
        sum
    }
}

fn parse(input: &str) -> Vec<Snail> {
    input
        .trim()
        .lines()
        .map(|line| line.parse().unwrap())
        .collect()
}

fn solve(input: &str) -> u32 {
    parse(input)
        .into_iter()
        .reduce(|acc, n| acc + n)
        .expect("no snailfish numbers")
        .magnitude()
}

fn bonus(input: &str) -> u32 {
    let numbers = parse(input);

    let pairs = (0..numbers.len())
        .cartesian_product(0..numbers.len())
        .filter(|(i, j)| i != j)
        .collect_vec();

    pairs
        .par_iter()
        .map(|&(i, j)| (numbers[i].clone() + numbers[j].clone()).magnitude())
        .max()
        .expect("need at least two snailfish numbers")
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 4140);
    assert_eq!(bonus(EXAMPLE), 3993);
}

#[test]
fn test_arithmetic() {
    let n = |s: &str| s.parse::<Snail>().unwrap();

    assert_eq!(
        n("[[[[4,3],4],4],[7,[[8,4],9]]]") + n("[1,1]"),
        n("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]")
    );

    let mut single = n("[[[[[9,8],1],2],3],4]");
    assert_eq!(single.explode(0), Some((Some(9), None)));
    assert_eq!(single.to_string(), "[[[[0,9],2],3],4]");

    let mut right = n("[7,[6,[5,[4,[3,2]]]]]");
    right.explode(0);
    assert_eq!(right.to_string(), "[7,[6,[5,[7,0]]]]");

    assert_eq!(n("[[1,2],[[3,4],5]]").magnitude(), 143);
    assert_eq!(n("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]").magnitude(), 1384);

    assert!("[1,2".parse::<Snail>().is_err());
    assert!("[1,2]]".parse::<Snail>().is_err());
}
