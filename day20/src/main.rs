use fxhash::FxHashSet;

const EXAMPLE: &str = "
..#.#..#####.#.#.#.###.##.....###.##.#..###.####..#####..#....#..#..##..###..######.###...####..#..#####..##..#.#####...##.#.#..#.##..#.#......#.###.######.###.####...#.##.##..#..#..#####.....#.#....###..#.##......#.....#..#..#..##..#...##.######.####.####.#.#...#.......#..#.#.#...####.##.#......#..#...##.#.##..#...##.#.##..###.#......#.#.......#.#.#.####.###.##...#.....####.#..#..#.##.#....##..#.####....##...##..#...#......#.#.......#.......##..####..#...#.#.#...##..#.#..###..#####........#..####......#..#

#..#.
#....
##..#
..#..
..###
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 20)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(35), Some(3351)])
        .run()
}

type Pos = (i32, i32);

struct Image {
    /// Lit pixels inside `min..=max`
    lit: FxHashSet<Pos>,
    min: Pos,
    max: Pos,
    /// Whether every pixel outside the bounds is lit
    background: bool,
}

impl Image {
    fn is_lit(&self, (x, y): Pos) -> bool {
        if x < self.min.0 || x > self.max.0 || y < self.min.1 || y > self.max.1 {
            self.background
        } else {
            self.lit.contains(&(x, y))
        }
    }

    fn enhance(&self, algorithm: &[bool]) -> Image {
        let min = (self.min.0 - 1, self.min.1 - 1);
        let max = (self.max.0 + 1, self.max.1 + 1);

        let mut lit = FxHashSet::default();
        for y in min.1..=max.1 {
            for x in min.0..=max.0 {
                let mut index = 0;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        index = index << 1 | self.is_lit((x + dx, y + dy)) as usize;
                    }
                }

                if algorithm[index] {
                    lit.insert((x, y));
                }
            }
        }

        let background = if self.background {
            algorithm[511]
        } else {
            algorithm[0]
        };

        Image {
            lit,
            min,
            max,
            background,
        }
    }
}

fn parse(input: &str) -> (Vec<bool>, Image) {
    let (algorithm, image) = input.trim().split_once("\n\n").unwrap();

    let algorithm: Vec<bool> = algorithm
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c == '#')
        .collect();
    assert_eq!(algorithm.len(), 512, "enhancement algorithm needs 512 entries");

    let mut lit = FxHashSet::default();
    let mut max = (0, 0);
    for (y, line) in image.lines().enumerate() {
        for (x, c) in line.trim().chars().enumerate() {
            let pos = (x as i32, y as i32);
            max = (max.0.max(pos.0), max.1.max(pos.1));
            if c == '#' {
                lit.insert(pos);
            }
        }
    }

    let image = Image {
        lit,
        min: (0, 0),
        max,
        background: false,
    };

    (algorithm, image)
}

fn lit_after(input: &str, steps: usize) -> usize {
    let (algorithm, mut image) = parse(input);

    for _ in 0..steps {
        image = image.enhance(&algorithm);
    }

    assert!(!image.background, "infinitely many pixels are lit");
    image.lit.len()
}

fn solve(input: &str) -> usize {
    lit_after(input, 2)
}

fn bonus(input: &str) -> usize {
    lit_after(input, 50)
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 35);
    assert_eq!(bonus(EXAMPLE), 3351);
}

#[test]
fn test_flashing_background() {
    // lights every dark 3x3 and darkens every lit one
    let mut algorithm = vec![false; 512];
    algorithm[0] = true;
    let algorithm: String = algorithm
        .iter()
        .map(|&on| if on { '#' } else { '.' })
        .collect();

    let input = format!("{algorithm}\n\n...\n...\n...");
    let (algorithm, image) = parse(&input);

    let once = image.enhance(&algorithm);
    assert!(once.background);
    assert_eq!(once.lit.len(), 25);

    let twice = once.enhance(&algorithm);
    assert!(!twice.background);
    assert_eq!(lit_after(&input, 2), 0);
}
