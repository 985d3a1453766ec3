//! The serialized boundary with the external solver.
//!
//! A solve request is a JSON array of 20 facelet triples (12 edge slots then
//! 8 corner slots, each an array of three lowercase color names, with the
//! `"black"` placeholder on an edge's invisible axis). The response is either
//! a JSON array of move-notation strings or a single JSON string carrying a
//! human-readable failure message.

use serde::Deserialize;
use thiserror::Error;

use crate::engine::{NotationError, Turn};
use crate::state::{ColorTriple, CubeState};

#[derive(Error, Debug)]
pub enum WireError {
    #[error("malformed wire data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed move notation from the solver: {0}")]
    Notation(#[from] NotationError),
    #[error("expected 20 facelet triples, got {0}")]
    WrongFaceletCount(usize),
}

/// Serialize a state into the solve request body.
pub fn request_body(state: &CubeState) -> Result<String, WireError> {
    let facelets: Vec<&ColorTriple> = state.facelets().collect();
    Ok(serde_json::to_string(&facelets)?)
}

/// Rebuild a state from a request body (the same 20-triple layout).
pub fn state_from_body(body: &str) -> Result<CubeState, WireError> {
    let facelets: Vec<ColorTriple> = serde_json::from_str(body)?;
    CubeState::from_facelets(&facelets).ok_or(WireError::WrongFaceletCount(facelets.len()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawResponse {
    Moves(Vec<String>),
    Failure(String),
}

/// What the solver had to say.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolveOutcome {
    /// A move sequence bringing the submitted state to solved.
    Sequence(Vec<Turn>),
    /// The submitted state is unsolvable or invalid; the message is surfaced
    /// to the user verbatim.
    Unsolvable(String),
}

/// Parse a solver response body. Malformed notation inside a move list is an
/// error, not an `Unsolvable` outcome: a trusted solver never produces it,
/// and corrupting the state would be worse than rejecting the response.
pub fn parse_response(body: &str) -> Result<SolveOutcome, WireError> {
    match serde_json::from_str(body)? {
        RawResponse::Moves(moves) => {
            let turns = moves
                .iter()
                .map(|notation| notation.parse::<Turn>())
                .collect::<Result<Vec<Turn>, NotationError>>()?;

            Ok(SolveOutcome::Sequence(turns))
        }
        RawResponse::Failure(message) => Ok(SolveOutcome::Unsolvable(message)),
    }
}
