use std::ops::RangeInclusive;

use regex::Regex;
use tracing::debug;

const EXAMPLE: &str = "target area: x=20..30, y=-10..-5";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 17)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(45), Some(112)])
        .run()
}

struct Target {
    x: RangeInclusive<i64>,
    y: RangeInclusive<i64>,
}

impl Target {
    fn parse(input: &str) -> Self {
        let re = Regex::new(r"-?\d+").unwrap();
        let n: Vec<i64> = re
            .find_iter(input)
            .map(|m| m.as_str().parse().unwrap())
            .collect();

        assert_eq!(n.len(), 4, "expected x and y ranges in {input:?}");

        Self {
            x: n[0].min(n[1])..=n[0].max(n[1]),
            y: n[2].min(n[3])..=n[2].max(n[3]),
        }
    }

    fn contains(&self, (x, y): (i64, i64)) -> bool {
        self.x.contains(&x) && self.y.contains(&y)
    }

    /// Simulates a launch, returning the highest point reached if the probe
    /// is ever inside the target after some step.
    fn launch(&self, (mut vx, mut vy): (i64, i64)) -> Option<i64> {
        let (mut x, mut y, mut peak) = (0, 0, 0);

        loop {
            x += vx;
            y += vy;
            vx -= vx.signum();
            vy -= 1;
            peak = peak.max(y);

            if self.contains((x, y)) {
                return Some(peak);
            }

            // past the target with no way back
            if y < *self.y.start() && vy <= 0 {
                return None;
            }
            if (vx >= 0 && x > *self.x.end()) || (vx <= 0 && x < *self.x.start()) {
                return None;
            }
        }
    }

    /// Peak heights of every initial velocity that hits. Anything outside
    /// these bounds overshoots on its first step, or on its way back down
    /// through y = 0.
    fn hits(&self) -> Vec<i64> {
        let (xmin, xmax) = (*self.x.start(), *self.x.end());
        let (ymin, ymax) = (*self.y.start(), *self.y.end());
        let vy_max = ymin.abs().max(ymax.abs());

        let mut peaks = vec![];
        for vx in xmin.min(0)..=xmax.max(0) {
            for vy in ymin.min(0)..=vy_max {
                if let Some(peak) = self.launch((vx, vy)) {
                    peaks.push(peak);
                }
            }
        }

        debug!(hits = peaks.len(), "searched launch velocities");
        peaks
    }
}

fn solve(input: &str) -> i64 {
    Target::parse(input)
        .hits()
        .into_iter()
        .max()
        .expect("no velocity hits the target")
}

fn bonus(input: &str) -> usize {
    Target::parse(input).hits().len()
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 45);
    assert_eq!(bonus(EXAMPLE), 112);

    let target = Target::parse(EXAMPLE);
    assert_eq!(target.launch((7, 2)), Some(3));
    assert_eq!(target.launch((6, 3)), Some(6));
    assert_eq!(target.launch((9, 0)), Some(0));
    assert_eq!(target.launch((17, -4)), None);
}
