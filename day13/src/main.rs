use fxhash::FxHashSet;
use tracing::info;

const EXAMPLE: &str = "
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 13)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(17), Some(16)])
        .run()
}

type Dots = FxHashSet<(u32, u32)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fold {
    X(u32),
    Y(u32),
}

fn parse(input: &str) -> (Dots, Vec<Fold>) {
    let (dots, folds) = input.trim().split_once("\n\n").unwrap();

    let dots = dots
        .lines()
        .map(|line| {
            let (x, y) = line.trim().split_once(",").unwrap();
            (x.parse().unwrap(), y.parse().unwrap())
        })
        .collect();

    let folds = folds
        .lines()
        .map(|line| {
            let (axis, at) = line
                .trim()
                .strip_prefix("fold along ")
                .unwrap()
                .split_once("=")
                .unwrap();

            let at = at.parse().unwrap();
            match axis {
                "x" => Fold::X(at),
                "y" => Fold::Y(at),
                _ => panic!("unknown axis: {axis}"),
            }
        })
        .collect();

    (dots, folds)
}

fn mirror(v: u32, at: u32) -> u32 {
    if v > at {
        2 * at - v
    } else {
        v
    }
}

fn fold(dots: &Dots, fold: Fold) -> Dots {
    dots.iter()
        .map(|&(x, y)| match fold {
            Fold::X(at) => (mirror(x, at), y),
            Fold::Y(at) => (x, mirror(y, at)),
        })
        .collect()
}

fn render(dots: &Dots) -> String {
    let w = dots.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let h = dots.iter().map(|&(_, y)| y).max().unwrap_or(0);

    (0..=h)
        .map(|y| {
            (0..=w)
                .map(|x| if dots.contains(&(x, y)) { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn solve(input: &str) -> usize {
    let (dots, folds) = parse(input);

    fold(&dots, folds[0]).len()
}

/// The actual answer is the eight capital letters in the rendered sheet.
fn bonus(input: &str) -> usize {
    let (dots, folds) = parse(input);
    let dots = folds.into_iter().fold(dots, |dots, f| fold(&dots, f));

    info!("folded sheet:\n{}", render(&dots));

    dots.len()
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 17);
    assert_eq!(bonus(EXAMPLE), 16);
}

#[test]
fn renders_square() {
    let (dots, folds) = parse(EXAMPLE);
    let dots = folds.into_iter().fold(dots, |dots, f| fold(&dots, f));

    assert_eq!(
        render(&dots),
        "
#####
#...#
#...#
#...#
#####"
            .trim()
    );
}
