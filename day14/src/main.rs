use fxhash::FxHashMap;
use itertools::{Itertools, MinMaxResult};

const EXAMPLE: &str = "
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 14)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(1588), Some(2188189693529)])
        .run()
}

type Pair = (u8, u8);

fn parse(input: &str) -> (&[u8], FxHashMap<Pair, u8>) {
    let (template, rules) = input.trim().split_once("\n\n").unwrap();

    let rules = rules
        .lines()
        .map(|line| {
            let (pair, insert) = line.trim().split_once(" -> ").unwrap();
            let pair = pair.as_bytes();
            ((pair[0], pair[1]), insert.as_bytes()[0])
        })
        .collect();

    (template.trim().as_bytes(), rules)
}

/// Only the number of each pair matters, not where it sits in the polymer.
fn synthesize(input: &str, steps: usize) -> u64 {
    let (template, rules) = parse(input);

    let mut pairs: FxHashMap<Pair, u64> = FxHashMap::default();
    for (&a, &b) in template.iter().tuple_windows() {
        *pairs.entry((a, b)).or_default() += 1;
    }

    let mut elements: FxHashMap<u8, u64> = template
        .iter()
        .copied()
        .counts()
        .into_iter()
        .map(|(e, n)| (e, n as u64))
        .collect();

    for _ in 0..steps {
        let mut next: FxHashMap<Pair, u64> = FxHashMap::default();

        for ((a, b), n) in pairs {
            match rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_default() += n;
                    *next.entry((c, b)).or_default() += n;
                    *elements.entry(c).or_default() += n;
                }
                None => *next.entry((a, b)).or_default() += n,
            }
        }

        pairs = next;
    }

    match elements.values().minmax() {
        MinMaxResult::MinMax(min, max) => max - min,
        _ => 0,
    }
}

fn solve(input: &str) -> u64 {
    synthesize(input, 10)
}

fn bonus(input: &str) -> u64 {
    synthesize(input, 40)
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 1588);
    assert_eq!(bonus(EXAMPLE), 2188189693529);
}

#[test]
fn first_steps() {
    // NNCB -> NCNBCHB -> NBCCNBBBCBHCB
    assert_eq!(synthesize(EXAMPLE, 1), 2 - 1);
    assert_eq!(synthesize(EXAMPLE, 2), 6 - 1);
}
