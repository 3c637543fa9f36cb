use fxhash::FxHashMap;
use tuple::Map;

const EXAMPLE: &str = "
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 5)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(5), Some(12)])
        .run()
}

type Pos = (i32, i32);

fn parse(input: &str) -> Vec<(Pos, Pos)> {
    input
        .trim()
        .lines()
        .map(|line| {
            line.trim().split_once(" -> ").unwrap().map(|s| {
                let (x, y) = s.split_once(",").unwrap();
                (x.parse::<i32>().unwrap(), y.parse::<i32>().unwrap())
            })
        })
        .collect()
}

fn count_overlaps(input: &str, diagonals: bool) -> usize {
    let mut covered: FxHashMap<Pos, u32> = FxHashMap::default();

    for ((x1, y1), (x2, y2)) in parse(input) {
        if !diagonals && x1 != x2 && y1 != y2 {
            continue;
        }

        // lines are horizontal, vertical, or at exactly 45 degrees
        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());
        let len = (x2 - x1).abs().max((y2 - y1).abs());

        for i in 0..=len {
            *covered.entry((x1 + i * dx, y1 + i * dy)).or_default() += 1;
        }
    }

    covered.values().filter(|&&n| n > 1).count()
}

fn solve(input: &str) -> usize {
    count_overlaps(input, false)
}

fn bonus(input: &str) -> usize {
    count_overlaps(input, true)
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 5);
    assert_eq!(bonus(EXAMPLE), 12);
}

#[test]
fn single_points_and_reversed_lines() {
    assert_eq!(solve("3,3 -> 3,3\n3,3 -> 3,3"), 1);
    assert_eq!(bonus("4,0 -> 0,4\n0,0 -> 4,4"), 1);
    assert_eq!(solve("4,0 -> 0,4\n0,0 -> 4,4"), 0);
}
