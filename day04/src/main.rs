const EXAMPLE: &str = "
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

const SIZE: usize = 5;

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 4)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(4512), Some(1924)])
        .run()
}

#[derive(Debug, Clone)]
struct Board {
    numbers: Vec<u32>,
    marked: Vec<bool>,
    won: bool,
}

impl Board {
    fn new(numbers: &[u32]) -> Self {
        Self {
            numbers: numbers.to_vec(),
            marked: vec![false; numbers.len()],
            won: false,
        }
    }

    /// Marks `n` and says whether that made the board win.
    fn mark(&mut self, n: u32) -> bool {
        let Some(i) = self.numbers.iter().position(|&m| m == n) else {
            return false;
        };

        self.marked[i] = true;

        let (row, col) = (i / SIZE, i % SIZE);
        (0..SIZE).all(|c| self.marked[row * SIZE + c])
            || (0..SIZE).all(|r| self.marked[r * SIZE + col])
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .zip(&self.marked)
            .filter(|(_, &marked)| !marked)
            .map(|(n, _)| n)
            .sum()
    }
}

fn parse(input: &str) -> (Vec<u32>, Vec<Board>) {
    let mut lines = input.trim().lines();

    let draws = lines
        .next()
        .unwrap()
        .split(",")
        .map(|n| n.trim().parse().unwrap())
        .collect();

    let numbers = lines
        .flat_map(str::split_whitespace)
        .map(|n| n.parse().unwrap())
        .collect::<Vec<u32>>();

    assert_eq!(numbers.len() % (SIZE * SIZE), 0, "incomplete board");

    let boards = numbers.chunks(SIZE * SIZE).map(Board::new).collect();

    (draws, boards)
}

/// Scores of the boards, in the order in which they win.
fn winning_scores(input: &str) -> Vec<u32> {
    let (draws, mut boards) = parse(input);
    let mut scores = vec![];

    for n in draws {
        for board in boards.iter_mut().filter(|board| !board.won) {
            if board.mark(n) {
                board.won = true;
                scores.push(n * board.unmarked_sum());
            }
        }
    }

    scores
}

fn solve(input: &str) -> u32 {
    winning_scores(input)[0]
}

fn bonus(input: &str) -> u32 {
    *winning_scores(input).last().unwrap()
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 4512);
    assert_eq!(bonus(EXAMPLE), 1924);
}

#[test]
fn column_wins() {
    let mut board = Board::new(&(0..25).collect::<Vec<_>>());

    assert!(!board.mark(2));
    assert!(!board.mark(7));
    assert!(!board.mark(12));
    assert!(!board.mark(17));
    assert!(!board.mark(99));
    assert!(board.mark(22));
    assert_eq!(board.unmarked_sum(), (0..25).sum::<u32>() - (2 + 7 + 12 + 17 + 22));
}
