use itertools::Itertools;

const EXAMPLE_LINE: &str =
    "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";

const EXAMPLE: &str = "
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";

/// Segments lit for each digit on a correctly wired display.
const WIRING: [&str; 10] = [
    "abcefg", "cf", "acdeg", "acdfg", "bcdf", "abdfg", "abdefg", "acf", "abcdefg", "abcdfg",
];

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 8)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE_LINE, &[Some(0), Some(5353)])
        .example(EXAMPLE, &[Some(26), Some(61229)])
        .run()
}

fn parse(input: &str) -> Vec<(Vec<&str>, Vec<&str>)> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (patterns, output) = line.split_once("|").unwrap();
            (
                patterns.split_whitespace().collect(),
                output.split_whitespace().collect(),
            )
        })
        .collect()
}

fn solve(input: &str) -> usize {
    parse(input)
        .into_iter()
        .flat_map(|(_, output)| output)
        .filter(|digit| matches!(digit.len(), 2 | 3 | 4 | 7))
        .count()
}

/// How often each segment is lit across all ten patterns.
fn segment_counts(patterns: &[&str]) -> [u32; 7] {
    let mut counts = [0; 7];
    for b in patterns.iter().flat_map(|p| p.bytes()) {
        counts[(b - b'a') as usize] += 1;
    }
    counts
}

/// Summing the counts of a digit's segments gives a number that's unique per
/// digit, no matter how the wires are crossed.
fn fingerprint(counts: &[u32; 7], digit: &str) -> u32 {
    digit.bytes().map(|b| counts[(b - b'a') as usize]).sum()
}

fn decode(patterns: &[&str], output: &[&str]) -> u32 {
    let wired = segment_counts(&WIRING);
    let known = WIRING
        .iter()
        .map(|digit| fingerprint(&wired, digit))
        .collect_vec();

    let counts = segment_counts(patterns);

    output
        .iter()
        .map(|digit| {
            let fp = fingerprint(&counts, digit);
            known.iter().position(|&k| k == fp).unwrap() as u32
        })
        .fold(0, |n, d| n * 10 + d)
}

fn bonus(input: &str) -> u32 {
    parse(input)
        .into_iter()
        .map(|(patterns, output)| decode(&patterns, &output))
        .sum()
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE_LINE), 0);
    assert_eq!(bonus(EXAMPLE_LINE), 5353);

    assert_eq!(solve(EXAMPLE), 26);
    assert_eq!(bonus(EXAMPLE), 61229);
}

#[test]
fn fingerprints_are_unique() {
    let wired = segment_counts(&WIRING);
    let fps = WIRING.iter().map(|d| fingerprint(&wired, d)).collect_vec();

    assert_eq!(fps, vec![42, 17, 34, 39, 30, 37, 41, 25, 49, 45]);
    assert!(fps.iter().all_unique());
}
