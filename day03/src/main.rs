const EXAMPLE: &str = "
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 3)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(198), Some(230)])
        .run()
}

fn parse(input: &str) -> (Vec<u32>, usize) {
    let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
    let width = lines.iter().map(|line| line.len()).max().unwrap();

    let nums = lines
        .into_iter()
        .map(|line| u32::from_str_radix(line, 2).unwrap())
        .collect();

    (nums, width)
}

fn count_ones(nums: &[u32], bit: usize) -> usize {
    nums.iter().filter(|&&n| (n >> bit) & 1 == 1).count()
}

/// Ties count as `1`.
fn most_common(nums: &[u32], bit: usize) -> u32 {
    (2 * count_ones(nums, bit) >= nums.len()) as u32
}

fn solve(input: &str) -> u32 {
    let (nums, width) = parse(input);

    let gamma = (0..width).fold(0, |gamma, bit| gamma | most_common(&nums, bit) << bit);
    let epsilon = !gamma & ((1 << width) - 1);

    gamma * epsilon
}

fn rating(nums: &[u32], width: usize, keep_most_common: bool) -> u32 {
    let mut nums = nums.to_vec();

    for bit in (0..width).rev() {
        if nums.len() == 1 {
            break;
        }

        let keep = if keep_most_common {
            most_common(&nums, bit)
        } else {
            1 - most_common(&nums, bit)
        };

        nums.retain(|n| (n >> bit) & 1 == keep);
    }

    nums[0]
}

fn bonus(input: &str) -> u32 {
    let (nums, width) = parse(input);

    let oxygen = rating(&nums, width, true);
    let co2 = rating(&nums, width, false);

    oxygen * co2
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 198);
    assert_eq!(bonus(EXAMPLE), 230);
}

#[test]
fn ratings() {
    let (nums, width) = parse(EXAMPLE);

    assert_eq!(rating(&nums, width, true), 0b10111);
    assert_eq!(rating(&nums, width, false), 0b01010);
}
