const EXAMPLE: &str = "
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 11)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(1656), Some(195)])
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

/// Advances one step and returns how many octopuses flashed.
fn step(grid: &mut Grid) -> usize {
    let h = grid.len() as i32;
    let w = grid[0].len() as i32;

    let mut flashing = vec![];
    for y in 0..h {
        for x in 0..w {
            let energy = &mut grid[y as usize][x as usize];
            *energy += 1;
            if *energy == 10 {
                flashing.push((x, y));
            }
        }
    }

    let mut flashes = 0;
    while let Some((x, y)) = flashing.pop() {
        flashes += 1;

        for dy in -1..=1 {
            for dx in -1..=1 {
                let (nx, ny) = (x + dx, y + dy);
                if (dx, dy) == (0, 0) || nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }

                let energy = &mut grid[ny as usize][nx as usize];
                *energy += 1;
                // each octopus flashes at most once, when it first passes 9
                if *energy == 10 {
                    flashing.push((nx, ny));
                }
            }
        }
    }

    for energy in grid.iter_mut().flatten() {
        if *energy > 9 {
            *energy = 0;
        }
    }

    flashes
}

fn solve(input: &str) -> usize {
    let mut grid = parse(input);

    (0..100).map(|_| step(&mut grid)).sum()
}

fn bonus(input: &str) -> usize {
    let mut grid = parse(input);
    let everyone = grid.len() * grid[0].len();

    (1..).find(|_| step(&mut grid) == everyone).unwrap()
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 1656);
    assert_eq!(bonus(EXAMPLE), 195);
}

#[test]
fn small_example() {
    let mut grid = parse(
        "
11111
19991
19191
19991
11111
",
    );

    assert_eq!(step(&mut grid), 9);
    assert_eq!(
        grid,
        parse(
            "
34543
40004
50005
40004
34543
"
        )
    );
}
