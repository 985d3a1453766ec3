//! Resolving "which face is being turned" from a touched sticker.
//!
//! A pressed sticker is identified by the piece's slot and the axis the
//! sticker surface faces. An edge sticker is shared between two faces and a
//! corner sticker between three; the face the user means is the member face
//! whose rotation axis matches the sticker's axis.

use crate::state::Axis;
use crate::topology::{CORNER_MEMBERSHIP, EDGE_MEMBERSHIP, FACES, Face};

/// A movable or fixed piece position, as the pointer layer reports it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Piece {
    Edge(usize),
    Corner(usize),
    Center(usize),
}

/// The face whose rotation axis matches the pressed sticker's axis, among the
/// piece's member faces. Centers belong to one face and always resolve to it.
/// `None` only for a geometrically inconsistent pairing (an edge has no
/// sticker on its third axis).
pub fn face_for_sticker(axis: Axis, piece: Piece) -> Option<Face> {
    match piece {
        Piece::Edge(slot) => EDGE_MEMBERSHIP[slot]
            .into_iter()
            .find(|face| face.axis() == axis),
        Piece::Corner(slot) => CORNER_MEMBERSHIP[slot]
            .into_iter()
            .find(|face| face.axis() == axis),
        Piece::Center(slot) => Some(FACES[slot]),
    }
}
