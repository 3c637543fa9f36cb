use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use tracing::debug;

const EXAMPLE: &str = "
--- scanner 0 ---
404,-588,-901
528,-643,409
-838,591,734
390,-675,-793
-537,-823,-458
-485,-357,347
-345,-311,381
-661,-816,-575
-876,649,763
-618,-824,-621
553,345,-567
474,580,667
-447,-329,318
-584,868,-557
544,-627,-890
564,392,-477
455,729,728
-892,524,684
-689,845,-530
423,-701,434
7,-33,-71
630,319,-379
443,580,662
-789,900,-551
459,-707,401

--- scanner 1 ---
686,422,578
605,423,415
515,917,-361
-336,658,858
95,138,22
-476,619,847
-340,-569,-846
567,-361,727
-460,603,-452
669,-402,600
729,430,532
-500,-761,534
-322,571,750
-466,-666,-811
-429,-592,574
-355,545,-477
703,-491,-529
-328,-685,520
413,935,-424
-391,539,-444
586,-435,557
-364,-763,-893
807,-499,-711
755,-354,-619
553,889,-390

--- scanner 2 ---
649,640,665
682,-795,504
-784,533,-524
-644,584,-595
-588,-843,648
-30,6,44
-674,560,763
500,723,-460
609,671,-379
-555,-800,653
-675,-892,-343
697,-426,-610
578,704,681
493,664,-388
-671,-858,530
-667,343,800
571,-461,-707
-138,-166,112
-889,563,-600
646,-828,498
640,759,510
-630,509,768
-681,-892,-333
673,-379,-804
-742,-814,-386
577,-820,562

--- scanner 3 ---
-589,542,597
605,-692,669
-500,565,-823
-660,373,557
-458,-679,-417
-488,449,543
-626,468,-788
338,-750,-386
528,-832,-391
562,-778,733
-938,-730,414
543,643,-506
-524,371,-870
407,773,750
-104,29,83
378,-903,-323
-778,-728,485
426,699,580
-438,-605,-362
-469,-447,-387
509,732,623
647,635,-688
-868,-804,481
614,-800,639
595,780,-596

--- scanner 4 ---
727,592,562
-293,-554,779
441,611,-461
-714,465,-776
-743,427,-804
-660,-479,-426
832,-632,460
927,-485,-438
408,393,-506
466,436,-512
110,16,151
-258,-428,682
-393,719,612
-211,-452,876
808,-476,-593
-575,615,604
-485,667,467
-680,325,-822
-627,-443,-432
872,-547,-609
833,512,582
807,604,487
839,-516,451
891,-625,532
-652,-548,-490
30,-46,-14
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 19)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(79), Some(3621)])
        .run()
}

type V = [i32; 3];

fn sub(a: V, b: V) -> V {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn add(a: V, b: V) -> V {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn manhattan(a: V, b: V) -> i32 {
    sub(a, b).iter().map(|d| d.abs()).sum()
}

/// A proper rotation: axis `i` of the result is `sign[i]` times axis `perm[i]`
/// of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rotation {
    perm: [usize; 3],
    sign: [i32; 3],
}

impl Rotation {
    fn all() -> Vec<Rotation> {
        let mut rotations = vec![];

        for perm in (0..3).permutations(3) {
            let perm = [perm[0], perm[1], perm[2]];
            let inversions = (0..3)
                .tuple_combinations()
                .filter(|&(i, j)| perm[i] > perm[j])
                .count();
            let parity = if inversions % 2 == 0 { 1 } else { -1 };

            for bits in 0..8 {
                let sign = [0, 1, 2].map(|i| if bits >> i & 1 == 1 { -1 } else { 1 });
                if parity * sign.iter().product::<i32>() == 1 {
                    rotations.push(Rotation { perm, sign });
                }
            }
        }

        rotations
    }

    fn apply(&self, v: V) -> V {
        [0, 1, 2].map(|i| self.sign[i] * v[self.perm[i]])
    }
}

struct Scanner {
    beacons: Vec<V>,
    /// Squared distances between every pair of beacons, which don't depend
    /// on the scanner's position or orientation.
    fingerprint: FxHashMap<i32, usize>,
}

impl Scanner {
    fn new(beacons: Vec<V>) -> Self {
        let mut fingerprint: FxHashMap<i32, usize> = FxHashMap::default();
        for (&a, &b) in beacons.iter().tuple_combinations() {
            let distance: i32 = sub(a, b).iter().map(|d| d * d).sum();
            *fingerprint.entry(distance).or_default() += 1;
        }

        Self {
            beacons,
            fingerprint,
        }
    }

    /// Twelve shared beacons give at least 66 shared pairwise distances.
    fn might_overlap(&self, other: &Scanner) -> bool {
        let shared: usize = self
            .fingerprint
            .iter()
            .map(|(d, &n)| n.min(other.fingerprint.get(d).copied().unwrap_or(0)))
            .sum();

        shared >= 66
    }
}

fn parse(input: &str) -> Vec<Scanner> {
    input
        .trim()
        .split("\n\n")
        .map(|block| {
            let beacons = block
                .lines()
                .skip(1)
                .map(|line| {
                    let (x, y, z) = line
                        .trim()
                        .split(",")
                        .map(|n| n.parse().unwrap())
                        .collect_tuple()
                        .unwrap();
                    [x, y, z]
                })
                .collect();

            Scanner::new(beacons)
        })
        .collect()
}

/// Finds the orientation and position at which at least twelve of
/// `candidate`'s beacons land on `reference` beacons.
fn align(reference: &[V], candidate: &[V], rotations: &[Rotation]) -> Option<(Rotation, V)> {
    for &rotation in rotations {
        let mut offsets: FxHashMap<V, usize> = FxHashMap::default();

        for &a in reference {
            for &b in candidate {
                let offset = sub(a, rotation.apply(b));
                let hits = offsets.entry(offset).or_default();
                *hits += 1;
                if *hits >= 12 {
                    return Some((rotation, offset));
                }
            }
        }
    }

    None
}

/// Places every scanner relative to scanner 0, returning the scanner
/// positions and all beacons in that frame.
fn locate(input: &str) -> (Vec<V>, FxHashSet<V>) {
    let scanners = parse(input);
    let rotations = Rotation::all();

    let mut placed: Vec<Option<(V, Vec<V>)>> = scanners.iter().map(|_| None).collect();
    placed[0] = Some(([0, 0, 0], scanners[0].beacons.clone()));

    let mut queue = VecDeque::from([0]);
    while let Some(r) = queue.pop_front() {
        let reference = placed[r].as_ref().map(|(_, b)| b.clone()).unwrap();

        for i in 0..scanners.len() {
            if placed[i].is_some() || !scanners[r].might_overlap(&scanners[i]) {
                continue;
            }

            if let Some((rotation, offset)) = align(&reference, &scanners[i].beacons, &rotations) {
                debug!(scanner = i, reference = r, ?offset, "placed scanner");

                let beacons = scanners[i]
                    .beacons
                    .iter()
                    .map(|&b| add(offset, rotation.apply(b)))
                    .collect();

                placed[i] = Some((offset, beacons));
                queue.push_back(i);
            }
        }
    }

    let mut positions = vec![];
    let mut beacons = FxHashSet::default();
    for (i, p) in placed.into_iter().enumerate() {
        let (position, found) = p.unwrap_or_else(|| panic!("scanner {i} overlaps no other"));
        positions.push(position);
        beacons.extend(found);
    }

    (positions, beacons)
}

fn solve(input: &str) -> usize {
    locate(input).1.len()
}

fn bonus(input: &str) -> i32 {
    locate(input)
        .0
        .into_iter()
        .tuple_combinations()
        .map(|(a, b)| manhattan(a, b))
        .max()
        .unwrap_or(0)
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 79);
    assert_eq!(bonus(EXAMPLE), 3621);
}

#[test]
fn test_rotations() {
    let rotations = Rotation::all();
    assert_eq!(rotations.len(), 24);

    let images: FxHashSet<V> = rotations.iter().map(|r| r.apply([1, 2, 3])).collect();
    assert_eq!(images.len(), 24);
}

#[test]
fn test_positions() {
    let (positions, _) = locate(EXAMPLE);
    assert_eq!(positions[1], [68, -1246, -43]);
    assert_eq!(positions[2], [1105, -1205, 1229]);
    assert_eq!(positions[3], [-92, -2380, -20]);
    assert_eq!(positions[4], [-20, -1133, 1061]);
}
