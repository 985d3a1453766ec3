//! Bidirectional traversal of a recorded move sequence.

use crate::engine::Turn;
use crate::state::CubeState;

/// A position pointer into an immutable move sequence. Position `0` is
/// "before the first move" and position `len` is "after the last move"; the
/// cursor only ever moves one step at a time.
#[derive(Clone, Debug)]
pub struct SequenceCursor {
    sequence: Vec<Turn>,
    position: usize,
    last_applied: Option<Turn>,
}

impl SequenceCursor {
    pub fn new(sequence: Vec<Turn>) -> SequenceCursor {
        SequenceCursor {
            sequence,
            position: 0,
            last_applied: None,
        }
    }

    pub fn sequence(&self) -> &[Turn] {
        &self.sequence
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.sequence.len()
    }

    /// Apply the next move to `state` and advance. Returns the applied turn,
    /// or `None` (leaving everything untouched) when already at the end.
    pub fn step_forward(&mut self, state: &mut CubeState) -> Option<Turn> {
        let &turn = self.sequence.get(self.position)?;

        state.apply(turn);
        self.position += 1;
        self.last_applied = Some(turn);

        Some(turn)
    }

    /// Undo the previous move by applying its inverse, then retreat. Returns
    /// the inverse turn that was applied, or `None` when already at the start.
    pub fn step_backward(&mut self, state: &mut CubeState) -> Option<Turn> {
        if self.position == 0 {
            return None;
        }

        self.position -= 1;
        let inverse = self.sequence[self.position].inverse();
        state.apply(inverse);
        self.last_applied = Some(inverse);

        Some(inverse)
    }

    /// The turn most recently applied through this cursor, for visual
    /// re-presentation. Never changes the position or the cube state.
    pub fn replay_current(&self) -> Option<Turn> {
        self.last_applied
    }
}
