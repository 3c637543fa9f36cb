//! Rewrites of ALU programs that keep the final registers of every run, and
//! every fault, the same.

use std::ops::RangeInclusive;

use crate::alu::{Instruction, Op, Operand, Reg};

use Instruction::*;

struct Folder {
    /// Value each register has at this point in the source program
    known: [Option<i64>; 4],
    /// Value each register has at this point in the emitted program
    actual: [Option<i64>; 4],
    out: Vec<Instruction>,
}

impl Folder {
    fn materialize(&mut self, r: Reg) {
        let i = r.index();
        let Some(value) = self.known[i] else {
            return;
        };

        match self.actual[i] {
            Some(current) if current == value => return,
            Some(current) => self.out.push(Bin(Op::Add, r, Operand::Imm(value - current))),
            None => {
                self.out.push(Bin(Op::Mul, r, Operand::Imm(0)));
                if value != 0 {
                    self.out.push(Bin(Op::Add, r, Operand::Imm(value)));
                }
            }
        }
        self.actual[i] = Some(value);
    }

    fn step(&mut self, instruction: Instruction) {
        let (op, a, b) = match instruction {
            Inp(r) => {
                self.out.push(instruction);
                self.known[r.index()] = None;
                self.actual[r.index()] = None;
                return;
            }
            Bin(op, a, b) => (op, a, b),
        };

        let b = match b {
            Operand::Reg(r) => match self.known[r.index()] {
                Some(value) => Operand::Imm(value),
                None => Operand::Reg(r),
            },
            imm => imm,
        };

        match (op, self.known[a.index()], b) {
            (_, Some(x), Operand::Imm(y)) => {
                // a fault has to stay in the program
                if let Ok(value) = op.apply(x, y) {
                    self.known[a.index()] = Some(value);
                    return;
                }
            }
            (Op::Add, _, Operand::Imm(0))
            | (Op::Mul, _, Operand::Imm(1))
            | (Op::Div, _, Operand::Imm(1))
            | (Op::Mul, Some(0), _) => return,
            (Op::Mul, _, Operand::Imm(0)) => {
                self.known[a.index()] = Some(0);
                return;
            }
            _ => {}
        }

        self.materialize(a);
        self.out.push(Bin(op, a, b));
        self.known[a.index()] = None;
        self.actual[a.index()] = None;
    }
}

/// Partially evaluates `program`: registers start at zero, and every value
/// that is known without inputs is computed here and only written out where
/// it is needed.
pub fn fold_constants(program: &[Instruction]) -> Vec<Instruction> {
    let mut folder = Folder {
        known: [Some(0); 4],
        actual: [Some(0); 4],
        out: vec![],
    };

    for &instruction in program {
        folder.step(instruction);
    }
    for r in Reg::ALL {
        folder.materialize(r);
    }

    folder.out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    lo: i64,
    hi: i64,
}

const UNBOUNDED: Interval = Interval {
    lo: i64::MIN,
    hi: i64::MAX,
};

impl Interval {
    fn exact(n: i64) -> Self {
        Interval { lo: n, hi: n }
    }

    fn is_exact(&self) -> bool {
        self.lo == self.hi
    }

    fn disjoint(&self, other: &Interval) -> bool {
        self.hi < other.lo || other.hi < self.lo
    }

    fn spanning(values: [Option<i64>; 4]) -> Self {
        let mut values = values.into_iter();
        let mut interval = match values.next().flatten() {
            Some(n) => Interval::exact(n),
            None => return UNBOUNDED,
        };

        for value in values {
            let Some(n) = value else {
                return UNBOUNDED;
            };
            interval.lo = interval.lo.min(n);
            interval.hi = interval.hi.max(n);
        }

        interval
    }

    /// Values `op` can produce from operands in `self` and `b`, whenever it
    /// doesn't fault.
    fn through(self, op: Op, b: Interval) -> Interval {
        match op {
            Op::Add => match (self.lo.checked_add(b.lo), self.hi.checked_add(b.hi)) {
                (Some(lo), Some(hi)) => Interval { lo, hi },
                _ => UNBOUNDED,
            },
            Op::Mul => Interval::spanning([
                self.lo.checked_mul(b.lo),
                self.lo.checked_mul(b.hi),
                self.hi.checked_mul(b.lo),
                self.hi.checked_mul(b.hi),
            ]),
            Op::Div if self.lo == i64::MIN => UNBOUNDED,
            Op::Div if b.is_exact() && b.lo != 0 => {
                let (p, q) = (self.lo / b.lo, self.hi / b.lo);
                Interval {
                    lo: p.min(q),
                    hi: p.max(q),
                }
            }
            Op::Div => {
                let m = self.lo.abs().max(self.hi.abs());
                Interval { lo: -m, hi: m }
            }
            Op::Mod => {
                let mut hi = (b.hi - 1).max(0);
                if self.lo >= 0 {
                    hi = hi.min(self.hi);
                }
                Interval { lo: 0, hi }
            }
            Op::Eql => Interval { lo: 0, hi: 1 },
        }
    }
}

/// Tracks the range of every register, given that each input lies in
/// `input`, and uses it to decide `eql` instructions and drop `mod`
/// instructions that can't change their operand.
pub fn narrow(program: &[Instruction], input: RangeInclusive<i64>) -> Vec<Instruction> {
    let mut ranges = [Interval::exact(0); 4];
    let mut out = vec![];

    for &instruction in program {
        let (op, a, b) = match instruction {
            Inp(r) => {
                ranges[r.index()] = Interval {
                    lo: *input.start(),
                    hi: *input.end(),
                };
                out.push(instruction);
                continue;
            }
            Bin(op, a, b) => (op, a, b),
        };

        let x = ranges[a.index()];
        let y = match b {
            Operand::Imm(n) => Interval::exact(n),
            Operand::Reg(r) => ranges[r.index()],
        };

        match op {
            Op::Eql if x.disjoint(&y) => {
                out.push(Bin(Op::Mul, a, Operand::Imm(0)));
                ranges[a.index()] = Interval::exact(0);
                continue;
            }
            Op::Eql if x.is_exact() && x == y => {
                out.push(Bin(Op::Mul, a, Operand::Imm(0)));
                out.push(Bin(Op::Add, a, Operand::Imm(1)));
                ranges[a.index()] = Interval::exact(1);
                continue;
            }
            Op::Mod if x.lo >= 0 && y.is_exact() && y.lo > x.hi => continue,
            _ => {}
        }

        ranges[a.index()] = x.through(op, y);
        out.push(instruction);
    }

    out
}

/// Alternates constant folding and range narrowing until neither changes
/// the program any more.
pub fn optimize(program: &[Instruction], input: RangeInclusive<i64>) -> Vec<Instruction> {
    let mut program = fold_constants(program);

    loop {
        let next = fold_constants(&narrow(&program, input.clone()));
        if next == program || next.len() > program.len() {
            return program;
        }
        program = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        alu::{parse, Alu, AluError},
        fixture,
    };

    fn text(program: &[Instruction]) -> Vec<String> {
        program.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn folds_known_values() {
        let program = parse("add x 5\nmul x 2\nadd y x").unwrap();
        assert_eq!(text(&fold_constants(&program)), ["add x 10", "add y 10"]);
    }

    #[test]
    fn drops_identities() {
        let program = parse("inp w\nadd w 0\nmul w 1\ndiv w 1\nmul x w").unwrap();
        assert_eq!(text(&fold_constants(&program)), ["inp w"]);
    }

    #[test]
    fn resets_after_mul_zero() {
        let program = parse("inp w\nmul w 0\nadd w 3\nadd x w").unwrap();
        assert_eq!(
            text(&fold_constants(&program)),
            ["inp w", "mul w 0", "add w 3", "add x 3"]
        );
    }

    #[test]
    fn keeps_faults() {
        let program = parse("add x 1\ndiv x 0").unwrap();
        let folded = fold_constants(&program);
        assert_eq!(Alu::run(&folded, &[]), Err(AluError::DivideByZero));
    }

    #[test]
    fn decides_comparisons() {
        let program = parse("inp w\neql w 10").unwrap();
        assert_eq!(text(&optimize(&program, 1..=9)), ["inp w", "mul w 0"]);

        let program = parse("inp w\nadd x 4\neql x 4").unwrap();
        assert_eq!(text(&narrow(&program, 1..=9)), ["inp w", "add x 4", "mul x 0", "add x 1"]);
    }

    #[test]
    fn drops_mod_without_effect() {
        let program = parse("inp w\nmod w 26\nadd z w\nmod z 5").unwrap();
        assert_eq!(text(&narrow(&program, 1..=9)), ["inp w", "add z w", "mod z 5"]);
    }

    #[test]
    fn preserves_monad() {
        let program = parse(&fixture::monad()).unwrap();
        let optimized = optimize(&program, 1..=9);
        assert!(optimized.len() < program.len());

        let mut seed = 12345u64;
        for _ in 0..200 {
            let digits: Vec<i64> = (0..14)
                .map(|_| {
                    seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    (seed >> 33) as i64 % 9 + 1
                })
                .collect();

            assert_eq!(
                Alu::run(&optimized, &digits),
                Alu::run(&program, &digits),
                "digits {digits:?}"
            );
        }
    }
}
