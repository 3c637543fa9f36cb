use tracing::debug;

const EXAMPLE: &str = "
v...>>.vv>
.vv>>.vv..
>>.>v>...v
>>v>>.>.v.
v>v.vv.v..
>.>>..v...
.vv..>.>v.
v.v..>>v.v
....v..v.>
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 25)
        .part(solve)
        .example(EXAMPLE, &[Some(58)])
        .run()
}

type Grid = Vec<Vec<u8>>;

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.trim().bytes().collect())
        .collect()
}

/// Moves every member of one herd that has a free cell ahead of it, all at
/// once. Returns how many moved.
fn move_herd(grid: &mut Grid, herd: u8, (dx, dy): (usize, usize)) -> usize {
    let (h, w) = (grid.len(), grid[0].len());
    let mut moves = vec![];

    for y in 0..h {
        for x in 0..w {
            let (nx, ny) = ((x + dx) % w, (y + dy) % h);
            if grid[y][x] == herd && grid[ny][nx] == b'.' {
                moves.push(((x, y), (nx, ny)));
            }
        }
    }

    for &((x, y), (nx, ny)) in &moves {
        grid[y][x] = b'.';
        grid[ny][nx] = herd;
    }

    moves.len()
}

fn step(grid: &mut Grid) -> usize {
    move_herd(grid, b'>', (1, 0)) + move_herd(grid, b'v', (0, 1))
}

fn solve(input: &str) -> usize {
    let mut grid = parse(input);

    for n in 1.. {
        let moved = step(&mut grid);
        debug!(step = n, moved);
        if moved == 0 {
            return n;
        }
    }

    unreachable!()
}

#[cfg(test)]
fn render(grid: &Grid) -> String {
    grid.iter()
        .map(|row| String::from_utf8_lossy(row).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 58);
}

#[test]
fn test_wrapping() {
    let mut grid = parse("...>>>>>...");
    step(&mut grid);
    assert_eq!(render(&grid), "...>>>>.>..");
    step(&mut grid);
    assert_eq!(render(&grid), "...>>>.>.>.");

    let mut grid = parse(
        "
..........
.>v....v..
.......>..
..........
",
    );
    step(&mut grid);
    assert_eq!(
        render(&grid),
        "..........\n.>........\n..v....v>.\n.........."
    );

    let mut grid = parse("...>\n....\n..v.");
    step(&mut grid);
    assert_eq!(render(&grid), ">.v.\n....\n....");
}
