use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::topology::Face;

pub const EDGE_COUNT: usize = 12;
pub const CORNER_COUNT: usize = 8;
pub const CENTER_COUNT: usize = 6;

/// Number of facelet triples crossing the solver boundary (edges followed by corners).
pub const FACELET_TRIPLE_COUNT: usize = EDGE_COUNT + CORNER_COUNT;

/// A sticker color. `Black` is the neutral color of internal facets that are
/// never visible; it still occupies a slot in every edge triple so that the
/// triple stays indexable by axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Green,
    Yellow,
    White,
    Red,
    Orange,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::White => "white",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Black => "black",
        };

        write!(f, "{name}")
    }
}

/// A color name that isn't one of the six sticker colors or `black`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color name `{0}`")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Color, UnknownColor> {
        Ok(match s {
            "blue" => Color::Blue,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "white" => Color::White,
            "red" => Color::Red,
            "orange" => Color::Orange,
            "black" => Color::Black,
            _ => return Err(UnknownColor(s.to_owned())),
        })
    }
}

/// A Cartesian rotation axis. Every sticker of a piece faces along exactly one
/// axis, and every face rotates about exactly one axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    fn from_index(idx: usize) -> Axis {
        match idx {
            0 => Axis::X,
            1 => Axis::Y,
            2 => Axis::Z,
            _ => unreachable!("axis indices are always taken mod 3"),
        }
    }

    /// The two axes perpendicular to this one, in cyclic order.
    pub fn perpendicular(self) -> (Axis, Axis) {
        let idx = self.index();
        (Axis::from_index((idx + 1) % 3), Axis::from_index((idx + 2) % 3))
    }
}

/// The three sticker colors of one piece, indexed by the axis each sticker
/// faces. The order is semantically meaningful; a 90° turn of a face
/// reassigns which perpendicular axis each sticker faces.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ColorTriple(pub [Color; 3]);

impl ColorTriple {
    /// Exchange the stickers facing the two given axes.
    pub fn swap(&mut self, a: Axis, b: Axis) {
        self.0.swap(a.index(), b.index());
    }
}

impl Index<Axis> for ColorTriple {
    type Output = Color;

    fn index(&self, axis: Axis) -> &Color {
        &self.0[axis.index()]
    }
}

impl IndexMut<Axis> for ColorTriple {
    fn index_mut(&mut self, axis: Axis) -> &mut Color {
        &mut self.0[axis.index()]
    }
}

use Color::{Black, Blue, Green, Orange, Red, White, Yellow};

/// Edge slot contents in the solved state, in fixed slot order
/// (UF, RU, UB, LU, DF, RD, DB, LD, RF, LF, RB, LB).
pub const SOLVED_EDGES: [ColorTriple; EDGE_COUNT] = [
    ColorTriple([Black, Blue, Yellow]),
    ColorTriple([Orange, Blue, Black]),
    ColorTriple([Black, Blue, White]),
    ColorTriple([Red, Blue, Black]),
    ColorTriple([Black, Green, Yellow]),
    ColorTriple([Orange, Green, Black]),
    ColorTriple([Black, Green, White]),
    ColorTriple([Red, Green, Black]),
    ColorTriple([Orange, Black, Yellow]),
    ColorTriple([Red, Black, Yellow]),
    ColorTriple([Orange, Black, White]),
    ColorTriple([Red, Black, White]),
];

/// Corner slot contents in the solved state, in fixed slot order
/// (RUF, RUB, LUB, LUF, RDF, LDF, LDB, RDB).
pub const SOLVED_CORNERS: [ColorTriple; CORNER_COUNT] = [
    ColorTriple([Orange, Blue, Yellow]),
    ColorTriple([Orange, Blue, White]),
    ColorTriple([Red, Blue, White]),
    ColorTriple([Red, Blue, Yellow]),
    ColorTriple([Orange, Green, Yellow]),
    ColorTriple([Red, Green, Yellow]),
    ColorTriple([Red, Green, White]),
    ColorTriple([Orange, Green, White]),
];

/// Center colors by face index (U, D, F, B, L, R). Centers never move; they
/// define which color each face letter refers to.
pub const CENTER_COLORS: [Color; CENTER_COUNT] = [Blue, Green, Yellow, White, Red, Orange];

/// The facelet state of the puzzle: what color sits in each position. Slots
/// are fixed positions on the cube's surface, never piece identities; a turn
/// rewrites slot contents rather than moving piece objects around.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CubeState {
    edges: [ColorTriple; EDGE_COUNT],
    corners: [ColorTriple; CORNER_COUNT],
}

impl CubeState {
    pub fn solved() -> CubeState {
        CubeState {
            edges: SOLVED_EDGES,
            corners: SOLVED_CORNERS,
        }
    }

    /// Build a state from 20 externally supplied facelet triples, 12 edge
    /// triples in slot order followed by 8 corner triples in slot order.
    /// Returns `None` if the count is wrong.
    pub fn from_facelets(facelets: &[ColorTriple]) -> Option<CubeState> {
        if facelets.len() != FACELET_TRIPLE_COUNT {
            return None;
        }

        let mut edges = SOLVED_EDGES;
        edges.copy_from_slice(&facelets[..EDGE_COUNT]);

        let mut corners = SOLVED_CORNERS;
        corners.copy_from_slice(&facelets[EDGE_COUNT..]);

        Some(CubeState { edges, corners })
    }

    pub fn edges(&self) -> &[ColorTriple; EDGE_COUNT] {
        &self.edges
    }

    pub fn corners(&self) -> &[ColorTriple; CORNER_COUNT] {
        &self.corners
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [ColorTriple; EDGE_COUNT] {
        &mut self.edges
    }

    pub(crate) fn corners_mut(&mut self) -> &mut [ColorTriple; CORNER_COUNT] {
        &mut self.corners
    }

    /// The constant color of a face's center sticker.
    pub fn center_color(face: Face) -> Color {
        CENTER_COLORS[face.center_slot()]
    }

    /// All 20 movable facelet triples in wire order, edges first.
    pub fn facelets(&self) -> impl Iterator<Item = &ColorTriple> {
        self.edges.iter().chain(self.corners.iter())
    }

    /// How many stickers of each color the movable slots hold. Turns permute
    /// and reorient but never create or destroy color, so this is invariant
    /// under any move sequence.
    pub fn color_counts(&self) -> HashMap<Color, usize> {
        self.facelets().flat_map(|triple| triple.0).counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::EDGE_MEMBERSHIP;

    #[test]
    fn solved_edges_have_one_hidden_facet() {
        for (slot, triple) in SOLVED_EDGES.iter().enumerate() {
            let hidden = triple.0.iter().filter(|&&c| c == Black).count();
            assert_eq!(hidden, 1, "edge slot {slot} should hide exactly one facet");
        }
    }

    #[test]
    fn hidden_edge_axis_is_structural() {
        // The neutral facet of each edge slot sits on the one axis that is
        // not a member face's rotation axis.
        for (slot, triple) in SOLVED_EDGES.iter().enumerate() {
            let member_axes: Vec<Axis> =
                EDGE_MEMBERSHIP[slot].iter().map(|face| face.axis()).collect();

            for axis in [Axis::X, Axis::Y, Axis::Z] {
                if member_axes.contains(&axis) {
                    assert_ne!(triple[axis], Black);
                } else {
                    assert_eq!(triple[axis], Black);
                }
            }
        }
    }

    #[test]
    fn solved_color_counts() {
        let counts = CubeState::solved().color_counts();

        for color in [Blue, Green, Yellow, White, Red, Orange] {
            // 4 edge stickers and 4 corner stickers per color; the ninth
            // sticker of each face is its immovable center.
            assert_eq!(counts[&color], 8, "{color}");
        }

        assert_eq!(counts[&Black], EDGE_COUNT);
    }

    #[test]
    fn color_names_round_trip() {
        for color in [Blue, Green, Yellow, White, Red, Orange, Black] {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }

        assert_eq!(
            "purple".parse::<Color>(),
            Err(UnknownColor("purple".to_owned()))
        );
    }

    #[test]
    fn from_facelets_rejects_wrong_length() {
        let solved = CubeState::solved();
        let triples: Vec<ColorTriple> = solved.facelets().copied().collect();

        assert_eq!(CubeState::from_facelets(&triples), Some(solved));
        assert_eq!(CubeState::from_facelets(&triples[..19]), None);
    }

    #[test]
    fn perpendicular_axes_are_cyclic() {
        assert_eq!(Axis::X.perpendicular(), (Axis::Y, Axis::Z));
        assert_eq!(Axis::Y.perpendicular(), (Axis::Z, Axis::X));
        assert_eq!(Axis::Z.perpendicular(), (Axis::X, Axis::Y));
    }
}
