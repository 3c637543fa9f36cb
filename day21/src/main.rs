use cached::proc_macro::cached;
use regex::Regex;

const EXAMPLE: &str = "
Player 1 starting position: 4
Player 2 starting position: 8
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 21)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(739785), Some(444356092776315)])
        .run()
}

fn parse(input: &str) -> [u8; 2] {
    let re = Regex::new(r"Player \d+ starting position: (\d+)").unwrap();
    let positions: Vec<u8> = re
        .captures_iter(input)
        .map(|c| c[1].parse().unwrap())
        .collect();

    [positions[0], positions[1]]
}

fn advance(pos: u8, steps: u32) -> u8 {
    ((pos as u32 + steps - 1) % 10 + 1) as u8
}

fn solve(input: &str) -> u32 {
    let mut positions = parse(input);
    let mut scores = [0u32; 2];
    let mut die = (1..=100).cycle();
    let mut rolls = 0;

    for player in [0, 1].into_iter().cycle() {
        let steps: u32 = die.by_ref().take(3).sum();
        rolls += 3;

        positions[player] = advance(positions[player], steps);
        scores[player] += positions[player] as u32;

        if scores[player] >= 1000 {
            return scores[1 - player] * rolls;
        }
    }

    unreachable!()
}

/// Sums of three rolls of a three-sided die, with the number of universes
/// that produce each.
const ROLLS: [(u32, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

/// Universes in which the player about to move, and the other player, win.
#[cached]
fn wins(pos: u8, score: u8, other_pos: u8, other_score: u8) -> (u64, u64) {
    let mut total = (0, 0);

    for (steps, universes) in ROLLS {
        let pos = advance(pos, steps);
        let score = score + pos;

        if score >= 21 {
            total.0 += universes;
        } else {
            let (theirs, ours) = wins(other_pos, other_score, pos, score);
            total.0 += ours * universes;
            total.1 += theirs * universes;
        }
    }

    total
}

fn bonus(input: &str) -> u64 {
    let [a, b] = parse(input);
    let (first, second) = wins(a, 0, b, 0);
    first.max(second)
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 739785);
    assert_eq!(bonus(EXAMPLE), 444356092776315);
    assert_eq!(wins(4, 0, 8, 0), (444356092776315, 341960390180808));
}
