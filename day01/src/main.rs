use itertools::Itertools;

const EXAMPLE: &str = "
199
200
208
210
200
207
240
269
260
263
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 1)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(7), Some(5)])
        .run()
}

fn depths(input: &str) -> Vec<u32> {
    input
        .trim()
        .lines()
        .map(|line| line.trim().parse().unwrap())
        .collect()
}

fn solve(input: &str) -> usize {
    depths(input)
        .into_iter()
        .tuple_windows()
        .filter(|(a, b)| b > a)
        .count()
}

fn bonus(input: &str) -> usize {
    // two neighbouring windows share their middle two depths
    depths(input)
        .into_iter()
        .tuple_windows()
        .filter(|(a, _, _, d)| d > a)
        .count()
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 7);
    assert_eq!(bonus(EXAMPLE), 5);
}

#[test]
fn too_short_for_a_window() {
    assert_eq!(solve("5"), 0);
    assert_eq!(bonus("1\n2\n3"), 0);
}
