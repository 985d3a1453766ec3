//! Interaction modes and their transitions.
//!
//! The session exclusively owns the cube state and the cursor for the
//! sequence being traversed, and is the only component that mutates either.
//! Renderers and input layers sit outside: they read snapshots, feed in
//! parsed turns, and receive step notices to drive the move strip.

use log::{debug, info};
use thiserror::Error;

use crate::cursor::SequenceCursor;
use crate::engine::Turn;
use crate::scramble;
use crate::state::CubeState;
use crate::wire::{self, SolveOutcome, WireError};

/// Which interaction the session is currently serving.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Free turning by the user.
    Interactive,
    /// The user paints facelets to describe a physical cube.
    Input,
    /// A generated scramble is playing to completion.
    Scramble,
    /// A solve request is in flight; interaction is suspended.
    Loading,
    /// Stepping through a solver-provided sequence.
    Animation,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("a solve can only be requested from interactive or input mode, not {0:?}")]
    SolveUnavailable(Mode),
    #[error("facelets can only be adopted in input mode, not {0:?}")]
    NotInputMode(Mode),
}

/// A "sequence position changed" notice for the caller's UI: the turn that
/// was just applied and the cursor position after it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StepNotice {
    pub turn: Turn,
    pub position: usize,
}

pub struct Session {
    mode: Mode,
    state: CubeState,
    cursor: Option<SequenceCursor>,
    failure: Option<String>,
}

impl Session {
    pub fn new() -> Session {
        Session {
            mode: Mode::Interactive,
            state: CubeState::solved(),
            cursor: None,
            failure: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Read-only snapshot for the renderer.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn cursor(&self) -> Option<&SequenceCursor> {
        self.cursor.as_ref()
    }

    /// The most recent solver failure message, if the last solve was rejected.
    pub fn last_failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    fn enter(&mut self, mode: Mode) {
        debug!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// Back to a solved cube in interactive mode, dropping any sequence.
    pub fn reset(&mut self) {
        self.state = CubeState::solved();
        self.cursor = None;
        self.failure = None;
        self.enter(Mode::Interactive);
    }

    pub fn enter_input(&mut self) {
        self.cursor = None;
        self.enter(Mode::Input);
    }

    /// Adopt externally painted facelets (input mode only).
    pub fn adopt_state(&mut self, state: CubeState) -> Result<(), SessionError> {
        if self.mode != Mode::Input {
            return Err(SessionError::NotInputMode(self.mode));
        }

        self.state = state;
        Ok(())
    }

    /// Apply a turn the interactive layer resolved from a gesture.
    pub fn turn(&mut self, turn: Turn) {
        if self.mode == Mode::Interactive {
            self.state.apply(turn);
        }
    }

    /// Generate and adopt a fresh scramble; the caller steps it to completion.
    pub fn scramble(&mut self, length: usize) -> &[Turn] {
        self.scramble_with(&mut fastrand::Rng::new(), length)
    }

    pub fn scramble_with(&mut self, rng: &mut fastrand::Rng, length: usize) -> &[Turn] {
        let sequence = scramble::scramble_with(rng, length);
        info!("scrambling with {length} moves");

        self.cursor = Some(SequenceCursor::new(sequence));
        self.enter(Mode::Scramble);

        self.cursor
            .as_ref()
            .map(|cursor| cursor.sequence())
            .unwrap_or_default()
    }

    /// Step every remaining move of the current sequence.
    pub fn play_all(&mut self) {
        while self.step_forward().is_some() {}
    }

    /// Scramble playback is done; hand the cube back to the user.
    pub fn finish_scramble(&mut self) {
        if self.mode == Mode::Scramble {
            self.cursor = None;
            self.enter(Mode::Interactive);
        }
    }

    /// Serialize the current state for the external solver and suspend
    /// interaction. Fire-and-forget: the transport, its timeout, and its
    /// cancellation are the caller's concern.
    pub fn request_solve(&mut self) -> Result<String, SessionError> {
        if !matches!(self.mode, Mode::Interactive | Mode::Input) {
            return Err(SessionError::SolveUnavailable(self.mode));
        }

        // Serializing fixed-size enums cannot fail.
        let body = wire::request_body(&self.state)
            .unwrap_or_else(|err| unreachable!("facelet serialization failed: {err}"));

        self.failure = None;
        self.enter(Mode::Loading);

        Ok(body)
    }

    /// Feed back the solver's reply. A move sequence starts animation with a
    /// fresh cursor; a failure reverts to input mode with the cube untouched
    /// and the message retrievable from [`Session::last_failure`].
    pub fn handle_solve_response(&mut self, outcome: SolveOutcome) {
        match outcome {
            SolveOutcome::Sequence(turns) => {
                info!("solver returned {} moves", turns.len());
                self.cursor = Some(SequenceCursor::new(turns));
                self.enter(Mode::Animation);
            }
            SolveOutcome::Unsolvable(message) => {
                info!("solver rejected the cube: {message}");
                self.failure = Some(message);
                self.cursor = None;
                self.enter(Mode::Input);
            }
        }
    }

    /// Parse and feed back a raw solver response body.
    pub fn handle_solve_body(&mut self, body: &str) -> Result<(), WireError> {
        let outcome = wire::parse_response(body)?;
        self.handle_solve_response(outcome);
        Ok(())
    }

    /// Advance the sequence by one move. No-op outside scramble/animation
    /// modes or at the end of the sequence.
    pub fn step_forward(&mut self) -> Option<StepNotice> {
        if !matches!(self.mode, Mode::Scramble | Mode::Animation) {
            return None;
        }

        let cursor = self.cursor.as_mut()?;
        let turn = cursor.step_forward(&mut self.state)?;

        Some(StepNotice {
            turn,
            position: cursor.position(),
        })
    }

    /// Retreat the sequence by one move. No-op outside animation mode or at
    /// the start.
    pub fn step_backward(&mut self) -> Option<StepNotice> {
        if self.mode != Mode::Animation {
            return None;
        }

        let cursor = self.cursor.as_mut()?;
        let turn = cursor.step_backward(&mut self.state)?;

        Some(StepNotice {
            turn,
            position: cursor.position(),
        })
    }

    /// The turn to animate again for a replay button, without any mutation.
    pub fn replay_current(&self) -> Option<Turn> {
        self.cursor.as_ref()?.replay_current()
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}
