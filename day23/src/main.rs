use fxhash::FxHashMap;

const EXAMPLE: &str = "
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

fn main() -> aoc::Result<()> {
    aoc::Puzzle::new(2021, 23)
        .part(solve)
        .part(bonus)
        .example(EXAMPLE, &[Some(12521), Some(44169)])
        .run()
}

const DEPTH: usize = 4;
const DOORS: [usize; 4] = [2, 4, 6, 8];
const STOPS: [usize; 7] = [0, 1, 3, 5, 7, 9, 10];
const ENERGY: [u32; 4] = [1, 10, 100, 1000];
const EMPTY: u8 = b'.';

fn kind(amphipod: u8) -> usize {
    (amphipod - b'A') as usize
}

/// Rooms are listed top slot first. Shallower burrows are padded at the
/// bottom with amphipods that are already home.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Burrow {
    hall: [u8; 11],
    rooms: [[u8; DEPTH]; 4],
}

impl Burrow {
    fn parse(input: &str, unfold: bool) -> Self {
        let mut rows: Vec<Vec<u8>> = input
            .lines()
            .map(|line| line.bytes().filter(|b| b.is_ascii_uppercase()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if unfold {
            rows.insert(1, b"DCBA".to_vec());
            rows.insert(2, b"DBAC".to_vec());
        }
        while rows.len() < DEPTH {
            rows.push(b"ABCD".to_vec());
        }
        assert_eq!(rows.len(), DEPTH, "unexpected burrow depth");

        let mut rooms = [[EMPTY; DEPTH]; 4];
        for (slot, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), 4, "every burrow row has four rooms");
            for (room, &amphipod) in row.iter().enumerate() {
                rooms[room][slot] = amphipod;
            }
        }

        Burrow {
            hall: [EMPTY; 11],
            rooms,
        }
    }

    fn done(&self) -> bool {
        self.rooms
            .iter()
            .enumerate()
            .all(|(room, slots)| slots.iter().all(|&a| a != EMPTY && kind(a) == room))
    }

    /// Whether the hallway from `from` (exclusive) to `to` (inclusive) is free.
    fn hall_clear(&self, from: usize, to: usize) -> bool {
        let cells = if from < to {
            from + 1..=to
        } else {
            to..=from - 1
        };
        self.hall[cells].iter().all(|&c| c == EMPTY)
    }

    /// Holds nothing but its own kind of amphipod.
    fn accepting(&self, room: usize) -> bool {
        self.rooms[room]
            .iter()
            .all(|&a| a == EMPTY || kind(a) == room)
    }

    fn top(&self, room: usize) -> Option<usize> {
        self.rooms[room].iter().position(|&a| a != EMPTY)
    }

    fn deepest_free(&self, room: usize) -> usize {
        self.rooms[room]
            .iter()
            .rposition(|&a| a == EMPTY)
            .expect("accepting room has space for its own amphipod")
    }

    /// Some amphipod that can go straight into its own room. Taking such a
    /// move right away never makes the total cost worse.
    fn move_home(&self) -> Option<(Burrow, u32)> {
        for pos in 0..self.hall.len() {
            let amphipod = self.hall[pos];
            if amphipod == EMPTY {
                continue;
            }

            let home = kind(amphipod);
            if !self.accepting(home) || !self.hall_clear(pos, DOORS[home]) {
                continue;
            }

            let slot = self.deepest_free(home);
            let steps = pos.abs_diff(DOORS[home]) + slot + 1;

            let mut next = self.clone();
            next.hall[pos] = EMPTY;
            next.rooms[home][slot] = amphipod;
            return Some((next, steps as u32 * ENERGY[home]));
        }

        for room in 0..4 {
            if self.accepting(room) {
                continue;
            }
            let Some(top) = self.top(room) else {
                continue;
            };

            let amphipod = self.rooms[room][top];
            let home = kind(amphipod);
            if home == room
                || !self.accepting(home)
                || !self.hall_clear(DOORS[room], DOORS[home])
            {
                continue;
            }

            let slot = self.deepest_free(home);
            let steps = top + 1 + DOORS[room].abs_diff(DOORS[home]) + slot + 1;

            let mut next = self.clone();
            next.rooms[room][top] = EMPTY;
            next.rooms[home][slot] = amphipod;
            return Some((next, steps as u32 * ENERGY[home]));
        }

        None
    }

    /// Every move of an amphipod out of a room it must leave, onto a hallway
    /// cell that isn't in front of a room.
    fn moves_out(&self) -> Vec<(Burrow, u32)> {
        let mut moves = vec![];

        for room in 0..4 {
            if self.accepting(room) {
                continue;
            }
            let Some(top) = self.top(room) else {
                continue;
            };

            let amphipod = self.rooms[room][top];
            for stop in STOPS {
                if !self.hall_clear(DOORS[room], stop) {
                    continue;
                }

                let steps = top + 1 + DOORS[room].abs_diff(stop);

                let mut next = self.clone();
                next.rooms[room][top] = EMPTY;
                next.hall[stop] = amphipod;
                moves.push((next, steps as u32 * ENERGY[kind(amphipod)]));
            }
        }

        moves
    }
}

fn least_energy(burrow: Burrow, memo: &mut FxHashMap<Burrow, Option<u32>>) -> Option<u32> {
    if burrow.done() {
        return Some(0);
    }
    if let Some(&known) = memo.get(&burrow) {
        return known;
    }

    let best = match burrow.move_home() {
        Some((next, cost)) => least_energy(next, memo).map(|rest| cost + rest),
        None => burrow
            .moves_out()
            .into_iter()
            .filter_map(|(next, cost)| least_energy(next, memo).map(|rest| cost + rest))
            .min(),
    };

    memo.insert(burrow, best);
    best
}

fn organize(input: &str, unfold: bool) -> u32 {
    let burrow = Burrow::parse(input, unfold);
    least_energy(burrow, &mut FxHashMap::default()).expect("amphipods can't be organized")
}

fn solve(input: &str) -> u32 {
    organize(input, false)
}

fn bonus(input: &str) -> u32 {
    organize(input, true)
}

#[test]
fn test() {
    assert_eq!(solve(EXAMPLE), 12521);
    assert_eq!(bonus(EXAMPLE), 44169);
}

#[test]
fn test_moves() {
    let burrow = Burrow::parse(EXAMPLE, false);
    assert_eq!(burrow.rooms[0], *b"BAAA");
    assert_eq!(burrow.move_home(), None);
    assert_eq!(burrow.moves_out().len(), 4 * STOPS.len());

    // one step from being organized
    let mut nearly = Burrow::parse("#A#B#C#D#\n#A#B#C#D#", false);
    assert!(nearly.done());
    nearly.rooms[3][0] = EMPTY;
    nearly.hall[10] = b'D';
    let (organized, cost) = nearly.move_home().unwrap();
    assert!(organized.done());
    assert_eq!(cost, 3000);
    assert_eq!(least_energy(nearly, &mut FxHashMap::default()), Some(3000));
}
