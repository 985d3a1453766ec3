//! Applying a parsed turn to a [`CubeState`]: the orientation-aware cyclic
//! permutation of the four edge and four corner slots ringing a face.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::state::{Axis, ColorTriple, CubeState};
use crate::topology::{self, Face};

/// How far a face is turned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Magnitude {
    /// 90° clockwise, viewed from outside the face.
    Quarter,
    /// 90° counterclockwise.
    QuarterInverse,
    /// 180°.
    Half,
}

impl Magnitude {
    /// How many positions the turn advances slot contents along the face's
    /// cycle tables. The tables are stored in counterclockwise traversal
    /// order, so a clockwise quarter shifts by three.
    fn cycle_shift(self) -> usize {
        match self {
            Magnitude::Quarter => 3,
            Magnitude::QuarterInverse => 1,
            Magnitude::Half => 2,
        }
    }

    pub fn inverse(self) -> Magnitude {
        match self {
            Magnitude::Quarter => Magnitude::QuarterInverse,
            Magnitude::QuarterInverse => Magnitude::Quarter,
            Magnitude::Half => Magnitude::Half,
        }
    }

    pub fn is_quarter(self) -> bool {
        matches!(self, Magnitude::Quarter | Magnitude::QuarterInverse)
    }
}

/// A single face rotation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Turn {
    pub face: Face,
    pub magnitude: Magnitude,
}

impl Turn {
    pub fn new(face: Face, magnitude: Magnitude) -> Turn {
        Turn { face, magnitude }
    }

    /// The turn that undoes this one.
    pub fn inverse(self) -> Turn {
        Turn {
            face: self.face,
            magnitude: self.magnitude.inverse(),
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.magnitude {
            Magnitude::Quarter => "",
            Magnitude::QuarterInverse => "'",
            Magnitude::Half => "2",
        };

        write!(f, "{}{suffix}", self.face)
    }
}

/// Move notation the solver or the user handed us that doesn't denote a turn.
/// A trusted solver never produces this, so callers treat it as a contract
/// violation rather than a state to recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move notation")]
    Empty,
    #[error("unknown face letter `{0}`")]
    UnknownFace(char),
    #[error("unknown move suffix `{0}` (expected nothing, `'`, or `2`)")]
    UnknownSuffix(String),
}

impl FromStr for Turn {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Turn, NotationError> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(NotationError::Empty)?;
        let face = Face::from_letter(letter).ok_or(NotationError::UnknownFace(letter))?;

        let magnitude = match chars.as_str() {
            "" => Magnitude::Quarter,
            "'" => Magnitude::QuarterInverse,
            "2" => Magnitude::Half,
            suffix => return Err(NotationError::UnknownSuffix(suffix.to_owned())),
        };

        Ok(Turn { face, magnitude })
    }
}

/// Parse a whitespace-separated move sequence such as `"R U' F2"`.
pub fn parse_sequence(notation: &str) -> Result<Vec<Turn>, NotationError> {
    notation.split_whitespace().map(Turn::from_str).collect()
}

impl CubeState {
    /// Apply one turn. Total and deterministic; the full permutation of both
    /// the edge and corner cycles is committed in one step.
    pub fn apply(&mut self, turn: Turn) {
        let shift = turn.magnitude.cycle_shift();
        let axis = turn.face.axis();

        cycle_slots(self.edges_mut(), topology::edge_cycle(turn.face), shift, axis);
        cycle_slots(self.corners_mut(), topology::corner_cycle(turn.face), shift, axis);
    }

    /// Apply a whole sequence in order.
    pub fn apply_all(&mut self, turns: &[Turn]) {
        for &turn in turns {
            self.apply(turn);
        }
    }
}

/// Advance the contents of a 4-cycle of slots by `shift` positions. A quarter
/// turn (odd shift) swaps the two sticker entries perpendicular to the
/// rotation axis before the write; a half turn maps each perpendicular axis
/// to itself. The axis entry is repositioned but never rewritten.
fn cycle_slots(slots: &mut [ColorTriple], cycle: [usize; 4], shift: usize, axis: Axis) {
    let (swap_a, swap_b) = axis.perpendicular();

    let mut moved = [slots[cycle[0]]; 4];
    for (buffered, &slot) in moved.iter_mut().zip(&cycle) {
        *buffered = slots[slot];
    }

    for (i, mut triple) in moved.into_iter().enumerate() {
        if shift % 2 == 1 {
            triple.swap(swap_a, swap_b);
        }

        slots[cycle[(i + shift) % 4]] = triple;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Color::{Black, Blue, Green, Orange, Red, Yellow};
    use crate::topology::FACES;

    const MAGNITUDES: [Magnitude; 3] =
        [Magnitude::Quarter, Magnitude::QuarterInverse, Magnitude::Half];

    #[test]
    fn notation_round_trips() {
        for face in FACES {
            for magnitude in MAGNITUDES {
                let turn = Turn::new(face, magnitude);
                assert_eq!(turn.to_string().parse::<Turn>(), Ok(turn));
            }
        }
    }

    #[test]
    fn notation_rejects_garbage() {
        assert_eq!("".parse::<Turn>(), Err(NotationError::Empty));
        assert_eq!("X".parse::<Turn>(), Err(NotationError::UnknownFace('X')));
        assert_eq!(
            "R3".parse::<Turn>(),
            Err(NotationError::UnknownSuffix("3".to_owned()))
        );
        assert_eq!(
            "U''".parse::<Turn>(),
            Err(NotationError::UnknownSuffix("''".to_owned()))
        );
    }

    #[test]
    fn parse_sequence_maps_notation() {
        let turns = parse_sequence("R U' F2").unwrap();

        assert_eq!(
            turns,
            vec![
                Turn::new(Face::R, Magnitude::Quarter),
                Turn::new(Face::U, Magnitude::QuarterInverse),
                Turn::new(Face::F, Magnitude::Half),
            ]
        );

        assert!(parse_sequence("R U? F2").is_err());
    }

    #[test]
    fn every_turn_round_trips() {
        // Exercises the inverse law in both sign directions: the quarter and
        // the inverse quarter each undo the other.
        for face in FACES {
            for magnitude in MAGNITUDES {
                let turn = Turn::new(face, magnitude);

                let mut state = CubeState::solved();
                state.apply(turn);
                state.apply(turn.inverse());
                assert_eq!(state, CubeState::solved(), "{turn}");

                let mut state = CubeState::solved();
                state.apply(turn.inverse());
                state.apply(turn);
                assert_eq!(state, CubeState::solved(), "{turn} reversed");
            }
        }
    }

    #[test]
    fn quarter_turns_have_order_four() {
        for face in FACES {
            let mut state = CubeState::solved();

            for step in 1..=4 {
                state.apply(Turn::new(face, Magnitude::Quarter));

                if step < 4 {
                    assert_ne!(state, CubeState::solved(), "{face} after {step}");
                }
            }

            assert_eq!(state, CubeState::solved(), "{face}");
        }
    }

    #[test]
    fn half_turns_pair_to_identity() {
        for face in FACES {
            let mut state = CubeState::solved();
            state.apply(Turn::new(face, Magnitude::Half));
            assert_ne!(state, CubeState::solved(), "{face}");

            state.apply(Turn::new(face, Magnitude::Half));
            assert_eq!(state, CubeState::solved(), "{face}");
        }
    }

    #[test]
    fn two_quarters_make_a_half() {
        for face in FACES {
            let mut quarters = CubeState::solved();
            quarters.apply(Turn::new(face, Magnitude::Quarter));
            quarters.apply(Turn::new(face, Magnitude::Quarter));

            let mut half = CubeState::solved();
            half.apply(Turn::new(face, Magnitude::Half));

            assert_eq!(quarters, half, "{face}");
        }
    }

    #[test]
    fn front_quarter_scenario() {
        // F turns clockwise: the LF edge content arrives at UF with its
        // L-facing sticker rotated up to face U, and so on around the ring.
        let mut state = CubeState::solved();
        state.apply(Turn::new(Face::F, Magnitude::Quarter));

        assert_eq!(state.edges()[0], ColorTriple([Black, Red, Yellow]));
        assert_eq!(state.edges()[9], ColorTriple([Green, Black, Yellow]));
        assert_eq!(state.edges()[4], ColorTriple([Black, Orange, Yellow]));
        assert_eq!(state.edges()[8], ColorTriple([Blue, Black, Yellow]));

        assert_eq!(state.corners()[0], ColorTriple([Blue, Red, Yellow]));
        assert_eq!(state.corners()[3], ColorTriple([Green, Red, Yellow]));
        assert_eq!(state.corners()[5], ColorTriple([Green, Orange, Yellow]));
        assert_eq!(state.corners()[4], ColorTriple([Blue, Orange, Yellow]));

        // Slots off the F ring are untouched.
        assert_eq!(state.edges()[2], CubeState::solved().edges()[2]);
        assert_eq!(state.corners()[1], CubeState::solved().corners()[1]);

        state.apply(Turn::new(Face::F, Magnitude::QuarterInverse));
        assert_eq!(state, CubeState::solved());
    }
}
