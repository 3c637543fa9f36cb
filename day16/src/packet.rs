//! BITS transmissions: a hex string carrying a single outermost packet, which
//! may contain any number of nested packets.

use tracing::debug;

/// Reads big-endian bit fields off a hex string.
pub struct BitReader {
    bits: Vec<bool>,
    pos: usize,
}

impl BitReader {
    pub fn from_hex(hex: &str) -> Self {
        let bits = hex
            .trim()
            .chars()
            .flat_map(|c| {
                let nibble = c
                    .to_digit(16)
                    .unwrap_or_else(|| panic!("not a hex digit: {c:?}"));
                (0..4).rev().map(move |i| (nibble >> i) & 1 == 1)
            })
            .collect();

        Self { bits, pos: 0 }
    }

    pub fn read(&mut self, n: usize) -> u64 {
        assert!(
            self.pos + n <= self.bits.len(),
            "ran out of bits reading {n} at {}",
            self.pos
        );

        let value = self.bits[self.pos..self.pos + n]
            .iter()
            .fold(0, |acc, &bit| acc << 1 | bit as u64);
        self.pos += n;
        value
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Sum,
    Product,
    Minimum,
    Maximum,
    GreaterThan,
    LessThan,
    EqualTo,
}

impl Op {
    fn from_type_id(id: u64) -> Self {
        match id {
            0 => Op::Sum,
            1 => Op::Product,
            2 => Op::Minimum,
            3 => Op::Maximum,
            5 => Op::GreaterThan,
            6 => Op::LessThan,
            7 => Op::EqualTo,
            _ => panic!("no operator with type id {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Literal(u64),
    Operator(Op, Vec<Packet>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub version: u8,
    pub payload: Payload,
}

const LITERAL: u64 = 4;

impl Packet {
    pub fn from_hex(hex: &str) -> Self {
        let mut reader = BitReader::from_hex(hex);
        let packet = Packet::read(&mut reader);
        debug!(padding = reader.remaining(), "decoded transmission");
        packet
    }

    pub fn read(reader: &mut BitReader) -> Self {
        let version = reader.read(3) as u8;
        let type_id = reader.read(3);

        let payload = if type_id == LITERAL {
            let mut value = 0;
            loop {
                let more = reader.read(1) == 1;
                value = value << 4 | reader.read(4);
                if !more {
                    break;
                }
            }
            Payload::Literal(value)
        } else {
            let op = Op::from_type_id(type_id);
            let mut subpackets = vec![];

            if reader.read(1) == 0 {
                let len = reader.read(15) as usize;
                let end = reader.position() + len;
                while reader.position() < end {
                    subpackets.push(Packet::read(reader));
                }
                assert_eq!(reader.position(), end, "sub-packets overran their length");
            } else {
                let count = reader.read(11);
                for _ in 0..count {
                    subpackets.push(Packet::read(reader));
                }
            }

            Payload::Operator(op, subpackets)
        };

        Packet { version, payload }
    }

    pub fn version_sum(&self) -> u64 {
        self.version as u64
            + match &self.payload {
                Payload::Literal(_) => 0,
                Payload::Operator(_, subpackets) => {
                    subpackets.iter().map(Packet::version_sum).sum()
                }
            }
    }

    pub fn eval(&self) -> u64 {
        let (op, subpackets) = match &self.payload {
            Payload::Literal(value) => return *value,
            Payload::Operator(op, subpackets) => (op, subpackets),
        };

        let mut values = subpackets.iter().map(Packet::eval);

        match op {
            Op::Sum => values.sum(),
            Op::Product => values.product(),
            Op::Minimum => values.min().expect("minimum of nothing"),
            Op::Maximum => values.max().expect("maximum of nothing"),
            Op::GreaterThan | Op::LessThan | Op::EqualTo => {
                let (Some(a), Some(b), None) = (values.next(), values.next(), values.next()) else {
                    panic!("{op:?} needs exactly two sub-packets");
                };

                let holds = match op {
                    Op::GreaterThan => a > b,
                    Op::LessThan => a < b,
                    _ => a == b,
                };
                holds as u64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(version: u8, value: u64) -> Packet {
        Packet {
            version,
            payload: Payload::Literal(value),
        }
    }

    #[test]
    fn literal_packet() {
        assert_eq!(Packet::from_hex("D2FE28"), literal(6, 2021));
    }

    #[test]
    fn operator_with_total_length() {
        assert_eq!(
            Packet::from_hex("38006F45291200"),
            Packet {
                version: 1,
                payload: Payload::Operator(Op::LessThan, vec![literal(6, 10), literal(2, 20)]),
            }
        );
    }

    #[test]
    fn operator_with_packet_count() {
        assert_eq!(
            Packet::from_hex("EE00D40C823060"),
            Packet {
                version: 7,
                payload: Payload::Operator(
                    Op::Maximum,
                    vec![literal(2, 1), literal(4, 2), literal(1, 3)]
                ),
            }
        );
    }

    #[test]
    fn reader_fields() {
        let mut reader = BitReader::from_hex("A5");
        assert_eq!(reader.read(1), 1);
        assert_eq!(reader.read(3), 0b010);
        assert_eq!(reader.read(4), 0b0101);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "ran out of bits")]
    fn truncated_transmission() {
        Packet::from_hex("D2F");
    }

    #[test]
    #[should_panic(expected = "exactly two")]
    fn comparison_with_three_operands() {
        Packet {
            version: 0,
            payload: Payload::Operator(
                Op::EqualTo,
                vec![literal(0, 1), literal(0, 1), literal(0, 1)],
            ),
        }
        .eval();
    }
}
