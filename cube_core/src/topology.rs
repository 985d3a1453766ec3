//! Static topology of the 3×3×3: which slots ring each face, in what cyclic
//! order a turn carries them, and which faces each piece belongs to.

use std::fmt;

use crate::state::{Axis, CENTER_COUNT, CORNER_COUNT, EDGE_COUNT};

/// One of the six turnable faces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

pub const FACES: [Face; CENTER_COUNT] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

impl Face {
    /// The axis the face rotates about.
    pub fn axis(self) -> Axis {
        match self {
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
            Face::L | Face::R => Axis::X,
        }
    }

    /// Index of the face's center slot.
    pub fn center_slot(self) -> usize {
        match self {
            Face::U => 0,
            Face::D => 1,
            Face::F => 2,
            Face::B => 3,
            Face::L => 4,
            Face::R => 5,
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Some(match letter {
            'U' => Face::U,
            'D' => Face::D,
            'F' => Face::F,
            'B' => Face::B,
            'L' => Face::L,
            'R' => Face::R,
            _ => return None,
        })
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        };

        write!(f, "{letter}")
    }
}

/// The four edge slots ringing a face. The slots are listed in the cyclic
/// order a counterclockwise quarter turn advances their contents; a clockwise
/// quarter therefore moves the content of `cycle[i]` to `cycle[(i + 3) % 4]`.
pub fn edge_cycle(face: Face) -> [usize; 4] {
    match face {
        Face::U => [0, 1, 2, 3],
        Face::D => [4, 7, 6, 5],
        Face::F => [0, 9, 4, 8],
        Face::B => [2, 10, 6, 11],
        Face::L => [3, 11, 7, 9],
        Face::R => [1, 8, 5, 10],
    }
}

/// The four corner slots ringing a face, same ordering convention as
/// [`edge_cycle`].
pub fn corner_cycle(face: Face) -> [usize; 4] {
    match face {
        Face::U => [0, 1, 2, 3],
        Face::D => [4, 5, 6, 7],
        Face::F => [0, 3, 5, 4],
        Face::B => [2, 1, 7, 6],
        Face::L => [3, 2, 6, 5],
        Face::R => [1, 0, 4, 7],
    }
}

/// The two faces each edge slot belongs to, by slot index.
pub const EDGE_MEMBERSHIP: [[Face; 2]; EDGE_COUNT] = [
    [Face::U, Face::F],
    [Face::R, Face::U],
    [Face::U, Face::B],
    [Face::L, Face::U],
    [Face::D, Face::F],
    [Face::R, Face::D],
    [Face::D, Face::B],
    [Face::L, Face::D],
    [Face::R, Face::F],
    [Face::L, Face::F],
    [Face::R, Face::B],
    [Face::L, Face::B],
];

/// The three faces each corner slot belongs to, by slot index.
pub const CORNER_MEMBERSHIP: [[Face; 3]; CORNER_COUNT] = [
    [Face::R, Face::U, Face::F],
    [Face::R, Face::U, Face::B],
    [Face::L, Face::U, Face::B],
    [Face::L, Face::U, Face::F],
    [Face::R, Face::D, Face::F],
    [Face::L, Face::D, Face::F],
    [Face::L, Face::D, Face::B],
    [Face::R, Face::D, Face::B],
];
