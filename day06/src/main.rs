const EXAMPLE: &str = "3,4,3,1,2";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 6)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(5934), Some(26984457539)])
        .run()
}

/// Number of fish per timer value. Individual fish don't matter, only how many
/// share a timer.
fn parse(input: &str) -> [u64; 9] {
    let mut timers = [0; 9];

    for n in input.trim().split(",") {
        timers[n.trim().parse::<usize>().unwrap()] += 1;
    }

    timers
}

fn simulate(input: &str, days: usize) -> u64 {
    let mut timers = parse(input);

    for _ in 0..days {
        timers.rotate_left(1);
        // the fish that were at 0 reset to 6, and their offspring start at 8
        timers[6] += timers[8];
    }

    timers.iter().sum()
}

fn solve(input: &str) -> u64 {
    simulate(input, 80)
}

fn bonus(input: &str) -> u64 {
    simulate(input, 256)
}

#[test]
fn test() {
    assert_eq!(simulate(EXAMPLE, 18), 26);
    assert_eq!(solve(EXAMPLE), 5934);
    assert_eq!(bonus(EXAMPLE), 26984457539);
}
