use fxhash::FxHashMap;

const EXAMPLE_SMALL: &str = "
start-A
start-b
A-c
A-b
b-d
A-end
b-end
";

const EXAMPLE_MEDIUM: &str = "
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc
";

const EXAMPLE_LARGE: &str = "
fs-end
he-DX
fs-he
start-DX
pj-DX
end-zg
zg-sl
zg-pj
pj-he
RW-he
fs-DX
pj-RW
zg-RW
start-pj
he-WI
zg-he
pj-fs
start-RW
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 12)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE_SMALL, &[Some(10), Some(36)])
        .example(EXAMPLE_MEDIUM, &[Some(19), Some(103)])
        .example(EXAMPLE_LARGE, &[Some(226), Some(3509)])
        .run()
}

type Caves<'a> = FxHashMap<&'a str, Vec<&'a str>>;

fn parse(input: &str) -> Caves {
    let mut caves: Caves = FxHashMap::default();

    for line in input.trim().lines() {
        let (a, b) = line.trim().split_once("-").unwrap();
        caves.entry(a).or_default().push(b);
        caves.entry(b).or_default().push(a);
    }

    caves
}

fn is_small(cave: &str) -> bool {
    cave.chars().all(|c| c.is_ascii_lowercase())
}

/// `visited` holds the small caves on the current path. `revisit` says whether
/// one of them may still be entered a second time.
fn count_paths<'a>(
    caves: &Caves<'a>,
    at: &'a str,
    visited: &mut Vec<&'a str>,
    revisit: bool,
) -> usize {
    if at == "end" {
        return 1;
    }

    let mut total = 0;

    for &next in &caves[at] {
        if next == "start" {
            continue;
        }

        if !is_small(next) {
            total += count_paths(caves, next, visited, revisit);
        } else if !visited.contains(&next) {
            visited.push(next);
            total += count_paths(caves, next, visited, revisit);
            visited.pop();
        } else if revisit {
            total += count_paths(caves, next, visited, false);
        }
    }

    total
}

fn solve(input: &str) -> usize {
    count_paths(&parse(input), "start", &mut vec!["start"], false)
}

fn bonus(input: &str) -> usize {
    count_paths(&parse(input), "start", &mut vec!["start"], true)
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE_SMALL), 10);
    assert_eq!(bonus(EXAMPLE_SMALL), 36);

    assert_eq!(solve(EXAMPLE_MEDIUM), 19);
    assert_eq!(bonus(EXAMPLE_MEDIUM), 103);

    assert_eq!(solve(EXAMPLE_LARGE), 226);
    assert_eq!(bonus(EXAMPLE_LARGE), 3509);
}
