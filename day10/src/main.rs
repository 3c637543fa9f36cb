const EXAMPLE: &str = "
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 10)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(26397), Some(288957)])
        .run()
}

#[derive(Debug, PartialEq, Eq)]
enum Status {
    /// First closing character that doesn't match
    Corrupted(char),
    /// Closing characters still needed, innermost first
    Incomplete(Vec<char>),
}

fn closing(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn check(line: &str) -> Status {
    let mut expected = vec![];

    for c in line.trim().chars() {
        if let Some(close) = closing(c) {
            expected.push(close);
        } else if expected.pop() != Some(c) {
            return Status::Corrupted(c);
        }
    }

    expected.reverse();
    Status::Incomplete(expected)
}

fn solve(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .map(|line| match check(line) {
            Status::Corrupted(')') => 3,
            Status::Corrupted(']') => 57,
            Status::Corrupted('}') => 1197,
            Status::Corrupted('>') => 25137,
            Status::Corrupted(c) => panic!("unexpected character: {c}"),
            Status::Incomplete(_) => 0,
        })
        .sum()
}

fn completion_score(missing: &[char]) -> u64 {
    missing.iter().fold(0, |score, c| {
        score * 5
            + match c {
                ')' => 1,
                ']' => 2,
                '}' => 3,
                '>' => 4,
                _ => unreachable!(),
            }
    })
}

fn bonus(input: &str) -> u64 {
    let mut scores = input
        .trim()
        .lines()
        .filter_map(|line| match check(line) {
            Status::Incomplete(missing) if !missing.is_empty() => Some(completion_score(&missing)),
            _ => None,
        })
        .collect::<Vec<_>>();

    scores.sort_unstable();
    scores
        .get(scores.len() / 2)
        .copied()
        .expect("no incomplete lines")
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 26397);
    assert_eq!(bonus(EXAMPLE), 288957);
}

#[test]
fn completion() {
    assert_eq!(
        check("[({(<(())[]>[[{[]{<()<>>"),
        Status::Incomplete("}}]])})]".chars().collect())
    );
    assert_eq!(completion_score(&"}}]])})]".chars().collect::<Vec<_>>()), 288957);
    assert_eq!(check("{([(<{}[<>[]}>{[]{[(<()>"), Status::Corrupted('}'));
    assert_eq!(check("()[]"), Status::Incomplete(vec![]));
}

#[test]
#[should_panic(expected = "no incomplete lines")]
fn nothing_to_complete() {
    bonus("{([(<{}[<>[]}>{[]{[(<()>\n()[]");
}
