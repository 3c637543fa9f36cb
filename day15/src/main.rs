use std::{cmp::Reverse, collections::BinaryHeap};

const EXAMPLE: &str = "
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 15)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(40), Some(315)])
        .run()
}

type Grid = Vec<Vec<u32>>;

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.trim().bytes().map(|b| (b - b'0') as u32).collect())
        .collect()
}

/// Tiles the map `n` times in both directions. Every tile to the right or
/// below adds one to the risk, wrapping 9 back around to 1.
fn tile(grid: &Grid, n: usize) -> Grid {
    let h = grid.len();
    let w = grid[0].len();

    (0..h * n)
        .map(|y| {
            (0..w * n)
                .map(|x| {
                    let risk = grid[y % h][x % w] + (y / h + x / w) as u32;
                    (risk - 1) % 9 + 1
                })
                .collect()
        })
        .collect()
}

/// Dijkstra from the top left to the bottom right corner.
fn lowest_risk(grid: &Grid) -> u32 {
    let h = grid.len();
    let w = grid[0].len();
    let target = (w - 1, h - 1);

    let mut best = vec![vec![u32::MAX; w]; h];
    let mut queue = BinaryHeap::new();

    best[0][0] = 0;
    queue.push(Reverse((0, (0, 0))));

    while let Some(Reverse((risk, (x, y)))) = queue.pop() {
        if (x, y) == target {
            return risk;
        }

        if risk > best[y][x] {
            continue;
        }

        let neighbours = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];

        for (nx, ny) in neighbours {
            if nx >= w || ny >= h {
                continue;
            }

            let next = risk + grid[ny][nx];
            if next < best[ny][nx] {
                best[ny][nx] = next;
                queue.push(Reverse((next, (nx, ny))));
            }
        }
    }

    unreachable!("bottom right corner is always reachable")
}

fn solve(input: &str) -> u32 {
    lowest_risk(&parse(input))
}

fn bonus(input: &str) -> u32 {
    lowest_risk(&tile(&parse(input), 5))
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 40);
    assert_eq!(bonus(EXAMPLE), 315);
}

#[test]
fn tiling_wraps_to_one() {
    let grid = tile(&vec![vec![8]], 5);

    assert_eq!(grid[0], vec![8, 9, 1, 2, 3]);
    assert_eq!(grid[4], vec![3, 4, 5, 6, 7]);
}
