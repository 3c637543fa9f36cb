//! The submarine's arithmetic logic unit: four integer registers and six
//! instructions.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg {
    W,
    X,
    Y,
    Z,
}

impl Reg {
    pub const ALL: [Reg; 4] = [Reg::W, Reg::X, Reg::Y, Reg::Z];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Reg {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Reg::W),
            "x" => Ok(Reg::X),
            "y" => Ok(Reg::Y),
            "z" => Ok(Reg::Z),
            _ => Err(ParseError::UnknownRegister(s.to_string())),
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg::W => "w",
            Reg::X => "x",
            Reg::Y => "y",
            Reg::Z => "z",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Reg(Reg),
    Imm(i64),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reg(r) => write!(f, "{r}"),
            Operand::Imm(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
    Div,
    Mod,
    Eql,
}

impl Op {
    pub fn apply(self, a: i64, b: i64) -> Result<i64, AluError> {
        Ok(match self {
            Op::Add => a.wrapping_add(b),
            Op::Mul => a.wrapping_mul(b),
            Op::Div if b == 0 => return Err(AluError::DivideByZero),
            Op::Div => a.wrapping_div(b),
            Op::Mod if a < 0 || b <= 0 => return Err(AluError::InvalidModulo(a, b)),
            Op::Mod => a % b,
            Op::Eql => (a == b) as i64,
        })
    }

    fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Mod => "mod",
            Op::Eql => "eql",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Inp(Reg),
    Bin(Op, Reg, Operand),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Inp(r) => write!(f, "inp {r}"),
            Instruction::Bin(op, a, b) => write!(f, "{} {a} {b}", op.name()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown instruction {0:?}")]
    UnknownInstruction(String),
    #[error("unknown register {0:?}")]
    UnknownRegister(String),
    #[error("missing operand in {0:?}")]
    MissingOperand(String),
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let missing = || ParseError::MissingOperand(line.to_string());

        let name = words.next().ok_or_else(missing)?;
        let a: Reg = words.next().ok_or_else(missing)?.parse()?;

        let op = match name {
            "inp" => return Ok(Instruction::Inp(a)),
            "add" => Op::Add,
            "mul" => Op::Mul,
            "div" => Op::Div,
            "mod" => Op::Mod,
            "eql" => Op::Eql,
            _ => return Err(ParseError::UnknownInstruction(name.to_string())),
        };

        let b = words.next().ok_or_else(missing)?;
        let b = match b.parse::<i64>() {
            Ok(n) => Operand::Imm(n),
            Err(_) => Operand::Reg(b.parse()?),
        };

        Ok(Instruction::Bin(op, a, b))
    }
}

pub fn parse(input: &str) -> Result<Vec<Instruction>, ParseError> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::parse)
        .collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AluError {
    #[error("division by zero")]
    DivideByZero,
    #[error("invalid modulo {0} % {1}")]
    InvalidModulo(i64, i64),
    #[error("program reads more than the {0} inputs given")]
    InputExhausted(usize),
}

pub type Registers = [i64; 4];

#[derive(Debug, Default)]
pub struct Alu {
    registers: Registers,
}

impl Alu {
    /// Runs `program` from all-zero registers, returning the final state.
    pub fn run(program: &[Instruction], inputs: &[i64]) -> Result<Registers, AluError> {
        let mut alu = Alu::default();
        let given = inputs.len();
        let mut inputs = inputs.iter();

        for instruction in program {
            match *instruction {
                Instruction::Inp(r) => {
                    let value = inputs.next().ok_or(AluError::InputExhausted(given))?;
                    alu.registers[r.index()] = *value;
                }
                Instruction::Bin(op, a, b) => {
                    let value = op.apply(alu.get(a), alu.value(b))?;
                    alu.registers[a.index()] = value;
                }
            }
        }

        Ok(alu.registers)
    }

    fn get(&self, r: Reg) -> i64 {
        self.registers[r.index()]
    }

    fn value(&self, operand: Operand) -> i64 {
        match operand {
            Operand::Reg(r) => self.get(r),
            Operand::Imm(n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, inputs: &[i64]) -> Result<Registers, AluError> {
        Alu::run(&parse(source).unwrap(), inputs)
    }

    #[test]
    fn negate() {
        assert_eq!(run("inp x\nmul x -1", &[7]).unwrap()[Reg::X.index()], -7);
    }

    #[test]
    fn three_times_larger() {
        let source = "inp z\ninp x\nmul z 3\neql z x";
        assert_eq!(run(source, &[3, 9]).unwrap()[Reg::Z.index()], 1);
        assert_eq!(run(source, &[3, 8]).unwrap()[Reg::Z.index()], 0);
    }

    #[test]
    fn binary_digits() {
        let source = "
            inp w
            add z w
            mod z 2
            div w 2
            add y w
            mod y 2
            div w 2
            add x w
            mod x 2
            div w 2
            mod w 2
        ";
        assert_eq!(run(source, &[13]).unwrap(), [1, 1, 0, 1]);
    }

    #[test]
    fn division_truncates() {
        assert_eq!(run("add x -7\ndiv x 2", &[]).unwrap()[Reg::X.index()], -3);
    }

    #[test]
    fn faults() {
        assert_eq!(run("div x 0", &[]), Err(AluError::DivideByZero));
        assert_eq!(
            run("add x -1\nmod x 2", &[]),
            Err(AluError::InvalidModulo(-1, 2))
        );
        assert_eq!(run("mod x 0", &[]), Err(AluError::InvalidModulo(0, 0)));
        assert_eq!(run("inp w\ninp x", &[1]), Err(AluError::InputExhausted(1)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "jmp x 1".parse::<Instruction>(),
            Err(ParseError::UnknownInstruction("jmp".into()))
        );
        assert_eq!(
            "add q 1".parse::<Instruction>(),
            Err(ParseError::UnknownRegister("q".into()))
        );
        assert_eq!(
            "add x".parse::<Instruction>(),
            Err(ParseError::MissingOperand("add x".into()))
        );
    }

    #[test]
    fn display() {
        let program = parse("inp w\nadd x -3\neql x w").unwrap();
        let text: Vec<String> = program.iter().map(|i| i.to_string()).collect();
        assert_eq!(text, ["inp w", "add x -3", "eql x w"]);
    }
}
