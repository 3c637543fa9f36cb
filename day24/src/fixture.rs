//! A MONAD program in the shape of the puzzle's, with known model numbers.

/// `(a, b, pops)` for each of the fourteen digit blocks.
pub const BLOCKS: [(i64, i64, bool); 14] = [
    (14, 1, false),
    (15, 7, false),
    (15, 13, false),
    (-6, 10, true),
    (14, 0, false),
    (-4, 13, true),
    (15, 11, false),
    (15, 6, false),
    (11, 1, false),
    (0, 7, true),
    (0, 11, true),
    (-3, 14, true),
    (-9, 4, true),
    (-9, 10, true),
];

pub const LARGEST: i64 = 99299513899971;
pub const SMALLEST: i64 = 93185111127911;

pub fn monad() -> String {
    BLOCKS
        .iter()
        .map(|&(a, b, pops)| {
            let div = if pops { 26 } else { 1 };
            format!(
                "inp w
mul x 0
add x z
mod x 26
div z {div}
add x {a}
eql x w
eql x 0
mul y 0
add y 25
mul y x
add y 1
mul z y
mul y 0
add y w
add y {b}
mul y x
add z y
"
            )
        })
        .collect()
}
