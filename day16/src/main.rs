mod packet;

use packet::Packet;

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 16)
        .part(solve)
        .part(bonus)
        .example("D2FE28", &[Some(6), None])
        .example("8A004A801A8002F478", &[Some(16), None])
        .example("620080001611562C8802118E34", &[Some(12), None])
        .example("C0015000016115A2E0802F182340", &[Some(23), None])
        .example("A0016C880162017C3686B18A3D4780", &[Some(31), None])
        .example("C200B40A82", &[None, Some(3)])
        .example("04005AC33890", &[None, Some(54)])
        .example("880086C3E88112", &[None, Some(7)])
        .example("CE00C43D881120", &[None, Some(9)])
        .example("D8005AC2A8F0", &[None, Some(1)])
        .example("F600BC2D8F", &[None, Some(0)])
        .example("9C005AC2F8F0", &[None, Some(0)])
        .example("9C0141080250320F1802104A08", &[None, Some(1)])
        .run()
}

fn solve(input: &str) -> u64 {
    Packet::from_hex(input).version_sum()
}

fn bonus(input: &str) -> u64 {
    Packet::from_hex(input).eval()
}

#[test]
fn test() {
    assert_eq!(solve("8A004A801A8002F478"), 16);
    assert_eq!(solve("620080001611562C8802118E34"), 12);
    assert_eq!(solve("C0015000016115A2E0802F182340"), 23);
    assert_eq!(solve("A0016C880162017C3686B18A3D4780"), 31);

    assert_eq!(bonus("C200B40A82"), 3);
    assert_eq!(bonus("04005AC33890"), 54);
    assert_eq!(bonus("880086C3E88112"), 7);
    assert_eq!(bonus("CE00C43D881120"), 9);
    assert_eq!(bonus("D8005AC2A8F0"), 1);
    assert_eq!(bonus("F600BC2D8F"), 0);
    assert_eq!(bonus("9C005AC2F8F0"), 0);
    assert_eq!(bonus("9C0141080250320F1802104A08"), 1);
}
