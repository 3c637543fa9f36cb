const EXAMPLE: &str = "16,1,2,0,4,2,7,1,2,14";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 7)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(37), Some(168)])
        .run()
}

fn parse(input: &str) -> Vec<i64> {
    input
        .trim()
        .split(",")
        .map(|n| n.trim().parse().unwrap())
        .collect()
}

fn min_fuel(input: &str, cost: impl Fn(i64) -> i64) -> i64 {
    let crabs = parse(input);
    let lo = *crabs.iter().min().unwrap();
    let hi = *crabs.iter().max().unwrap();

    (lo..=hi)
        .map(|target| {
            crabs
                .iter()
                .map(|crab| cost((crab - target).abs()))
                .sum::<i64>()
        })
        .min()
        .unwrap()
}

fn solve(input: &str) -> i64 {
    min_fuel(input, |dist| dist)
}

fn bonus(input: &str) -> i64 {
    min_fuel(input, |dist| dist * (dist + 1) / 2)
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 37);
    assert_eq!(bonus(EXAMPLE), 168);
}
