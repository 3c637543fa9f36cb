mod alu;
mod optimize;

#[cfg(test)]
mod fixture;

use alu::{Alu, Instruction, Op, Operand, Reg};
use tracing::debug;

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 24)
        .part(solve)
        .part(bonus)
        .run()
}

/// The parameters of one digit's worth of MONAD. Each block pushes
/// `digit + b` onto a base-26 stack held in z, unless it pops and the popped
/// value plus `a` equals the digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    pops: bool,
    a: i64,
    b: i64,
}

fn blocks(program: &[Instruction]) -> Vec<Block> {
    let starts: Vec<usize> = program
        .iter()
        .enumerate()
        .filter(|(_, i)| matches!(i, Instruction::Inp(_)))
        .map(|(n, _)| n)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(k, &start)| {
            let end = starts.get(k + 1).copied().unwrap_or(program.len());
            let block = &program[start..end];

            let imm = |n: usize, op: Op, reg: Reg| match block.get(n) {
                Some(&Instruction::Bin(o, r, Operand::Imm(value))) if o == op && r == reg => value,
                other => panic!("block {k} has {other:?} at {n}, not {op:?} {reg:?}"),
            };

            let pops = match imm(4, Op::Div, Reg::Z) {
                1 => false,
                26 => true,
                d => panic!("block {k} divides z by {d}"),
            };

            Block {
                pops,
                a: imm(5, Op::Add, Reg::X),
                b: imm(15, Op::Add, Reg::Y),
            }
        })
        .collect()
}

/// Pairs every popping block with the block whose value it pops, which ties
/// their digits together as `digit[pop] = digit[push] + b[push] + a[pop]`.
fn model_number(blocks: &[Block], largest: bool) -> Vec<i64> {
    let mut digits = vec![0; blocks.len()];
    let mut stack = vec![];

    for (i, block) in blocks.iter().enumerate() {
        if !block.pops {
            stack.push((i, block.b));
            continue;
        }

        let (j, b) = stack.pop().expect("more pops than pushes");
        let diff = b + block.a;
        assert!(diff.abs() <= 8, "no digits of blocks {j} and {i} differ by {diff}");

        let (pushed, popped) = match (largest, diff >= 0) {
            (true, true) => (9 - diff, 9),
            (true, false) => (9, 9 + diff),
            (false, true) => (1, 1 + diff),
            (false, false) => (1 - diff, 1),
        };
        digits[j] = pushed;
        digits[i] = popped;
    }

    assert!(stack.is_empty(), "more pushes than pops");
    digits
}

fn find(input: &str, largest: bool) -> i64 {
    let program = alu::parse(input).expect("valid ALU program");
    let optimized = optimize::optimize(&program, 1..=9);
    debug!(
        before = program.len(),
        after = optimized.len(),
        "optimized MONAD"
    );

    let digits = model_number(&blocks(&program), largest);
    let registers = Alu::run(&optimized, &digits).expect("MONAD runs on any model number");
    assert_eq!(registers[Reg::Z.index()], 0, "MONAD rejects {digits:?}");

    digits.iter().fold(0, |n, d| n * 10 + d)
}

fn solve(input: &str) -> i64 {
    find(input, true)
}

fn bonus(input: &str) -> i64 {
    find(input, false)
}

#[test]
fn test() {
    let monad = fixture::monad();
    assert_eq!(solve(&monad), fixture::LARGEST);
    assert_eq!(bonus(&monad), fixture::SMALLEST);
}

#[test]
fn test_blocks() {
    let program = alu::parse(&fixture::monad()).unwrap();
    let blocks = blocks(&program);

    assert_eq!(blocks.len(), 14);
    assert_eq!(
        blocks[3],
        Block {
            pops: true,
            a: -6,
            b: 10
        }
    );

    let found: Vec<(i64, i64, bool)> = blocks.iter().map(|b| (b.a, b.b, b.pops)).collect();
    assert_eq!(found, fixture::BLOCKS);
}

#[test]
fn test_rejects_other_numbers() {
    let program = alu::parse(&fixture::monad()).unwrap();
    let mut digits = model_number(&blocks(&program), true);
    digits[0] -= 1;

    let registers = Alu::run(&program, &digits).unwrap();
    assert_ne!(registers[Reg::Z.index()], 0);
}
