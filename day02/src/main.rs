const EXAMPLE: &str = "
forward 5
down 5
forward 8
up 3
down 8
forward 2
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 2)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(150), Some(900)])
        .run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

use Command::*;

fn parse(input: &str) -> Vec<Command> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (cmd, n) = line.trim().split_once(" ").unwrap();
            let n = n.parse::<i64>().unwrap();

            match cmd {
                "forward" => Forward(n),
                "down" => Down(n),
                "up" => Up(n),
                _ => panic!("unknown command: {cmd}"),
            }
        })
        .collect()
}

fn solve(input: &str) -> i64 {
    let (horizontal, depth) = parse(input)
        .into_iter()
        .fold((0, 0), |(h, d), cmd| match cmd {
            Forward(n) => (h + n, d),
            Down(n) => (h, d + n),
            Up(n) => (h, d - n),
        });

    horizontal * depth
}

fn bonus(input: &str) -> i64 {
    let (horizontal, depth, _) = parse(input)
        .into_iter()
        .fold((0, 0, 0), |(h, d, aim), cmd| match cmd {
            Forward(n) => (h + n, d + aim * n, aim),
            Down(n) => (h, d, aim + n),
            Up(n) => (h, d, aim - n),
        });

    horizontal * depth
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 150);
    assert_eq!(bonus(EXAMPLE), 900);
}

#[test]
#[should_panic(expected = "unknown command")]
fn unknown_command() {
    solve("backward 3");
}
