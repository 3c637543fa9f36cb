use itertools::Itertools;

const EXAMPLE: &str = "
2199943210
3987894921
9856789892
8767896789
9899965678
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 9)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(15), Some(1134)])
        .run()
}

type Grid = Vec<Vec<u8>>;

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.trim().bytes().map(|b| b - b'0').collect())
        .collect()
}

fn neighbours(grid: &Grid, (x, y): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let h = grid.len();
    let w = grid[0].len();

    [
        (x.wrapping_sub(1), y),
        (x + 1, y),
        (x, y.wrapping_sub(1)),
        (x, y + 1),
    ]
    .into_iter()
    .filter(move |&(x, y)| x < w && y < h)
}

fn low_points(grid: &Grid) -> Vec<(usize, usize)> {
    (0..grid.len())
        .cartesian_product(0..grid[0].len())
        .map(|(y, x)| (x, y))
        .filter(|&(x, y)| neighbours(grid, (x, y)).all(|(nx, ny)| grid[ny][nx] > grid[y][x]))
        .collect()
}

fn solve(input: &str) -> usize {
    let grid = parse(input);

    low_points(&grid)
        .into_iter()
        .map(|(x, y)| 1 + grid[y][x] as usize)
        .sum()
}

/// Everything reachable from `start` without crossing a 9.
fn basin_size(grid: &Grid, start: (usize, usize)) -> usize {
    let mut seen = vec![vec![false; grid[0].len()]; grid.len()];
    let mut todo = vec![start];
    let mut size = 0;

    while let Some((x, y)) = todo.pop() {
        if seen[y][x] || grid[y][x] == 9 {
            continue;
        }

        seen[y][x] = true;
        size += 1;

        todo.extend(neighbours(grid, (x, y)));
    }

    size
}

fn bonus(input: &str) -> usize {
    let grid = parse(input);

    low_points(&grid)
        .into_iter()
        .map(|p| basin_size(&grid, p))
        .sorted_unstable()
        .rev()
        .take(3)
        .product()
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 15);
    assert_eq!(bonus(EXAMPLE), 1134);
}

#[test]
fn basins() {
    let grid = parse(EXAMPLE);

    assert_eq!(basin_size(&grid, (0, 0)), 3);
    assert_eq!(basin_size(&grid, (9, 0)), 9);
    assert_eq!(basin_size(&grid, (2, 2)), 14);
}
