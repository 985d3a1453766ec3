//! The per-turn rotation state machine.
//!
//! An external tick (one call per visual frame) drives a face through its
//! sweep; the cube state is only touched at the moment a turn is logically
//! committed. Progress is a signed angle in radians where positive means
//! clockwise as viewed from outside the face, for every face; the renderer is
//! responsible for mapping its own axis directions onto that convention.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::engine::{Magnitude, Turn};
use crate::state::CubeState;
use crate::topology::Face;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Phase {
    /// The resting state between committed turns.
    Idle,
    /// Sweeping toward a known target angle (sequence playback).
    Playing { turn: Turn, progress: f32 },
    /// Following the user's drag; the target is decided on release.
    Grabbed { face: Face, progress: f32 },
}

/// Drives one face rotation at a time and commits it to the [`CubeState`]
/// when the sweep completes. Owned by the caller; holds no reference to the
/// state it mutates.
#[derive(Clone, Debug)]
pub struct TurnDriver {
    phase: Phase,
    last_committed: Option<Turn>,
}

fn signed_target(magnitude: Magnitude) -> f32 {
    match magnitude {
        Magnitude::Quarter => FRAC_PI_2,
        Magnitude::QuarterInverse => -FRAC_PI_2,
        Magnitude::Half => PI,
    }
}

impl TurnDriver {
    pub fn new() -> TurnDriver {
        TurnDriver {
            phase: Phase::Idle,
            last_committed: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// The face currently in motion, if any.
    pub fn active_face(&self) -> Option<Face> {
        match self.phase {
            Phase::Idle => None,
            Phase::Playing { turn, .. } => Some(turn.face),
            Phase::Grabbed { face, .. } => Some(face),
        }
    }

    /// The current sweep angle, for the renderer to pose the face group.
    pub fn progress(&self) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Playing { progress, .. } | Phase::Grabbed { progress, .. } => progress,
        }
    }

    /// Start sweeping a known turn. Returns `false` if a turn is already in
    /// flight.
    pub fn begin(&mut self, turn: Turn) -> bool {
        if !self.is_idle() {
            return false;
        }

        self.phase = Phase::Playing {
            turn,
            progress: 0.0,
        };
        true
    }

    /// Advance a playing sweep by `delta` radians (unsigned frame step).
    /// Crossing the target angle commits the turn to `state` and returns it;
    /// the driver is then idle again.
    pub fn tick(&mut self, delta: f32, state: &mut CubeState) -> Option<Turn> {
        let Phase::Playing { turn, progress } = self.phase else {
            return None;
        };

        let target = signed_target(turn.magnitude);
        let progress = progress + delta.abs() * target.signum();

        if progress.abs() < target.abs() {
            self.phase = Phase::Playing { turn, progress };
            return None;
        }

        state.apply(turn);
        self.last_committed = Some(turn);
        self.phase = Phase::Idle;

        Some(turn)
    }

    /// Take hold of a face for interactive rotation. Returns `false` if a
    /// turn is already in flight.
    pub fn grab(&mut self, face: Face) -> bool {
        if !self.is_idle() {
            return false;
        }

        self.phase = Phase::Grabbed {
            face,
            progress: 0.0,
        };
        true
    }

    /// Accumulate signed drag rotation on the grabbed face.
    pub fn drag(&mut self, delta: f32) {
        if let Phase::Grabbed { face, progress } = self.phase {
            self.phase = Phase::Grabbed {
                face,
                progress: progress + delta,
            };
        }
    }

    /// Let go of the grabbed face: snap the accumulated angle to the nearest
    /// count of quarter turns modulo a full revolution, commit the snapped
    /// turn if it is not zero, and return to idle. An angle short of 45° or
    /// within 45° of a full turn commits nothing.
    pub fn release(&mut self, state: &mut CubeState) -> Option<Turn> {
        let Phase::Grabbed { face, progress } = self.phase else {
            return None;
        };

        self.phase = Phase::Idle;

        let quarters = (progress / FRAC_PI_2).round().rem_euclid(4.0) as i32;
        let magnitude = match quarters {
            0 => return None,
            1 => Magnitude::Quarter,
            // 180° either way lands on the same state.
            2 => Magnitude::Half,
            // Three quarters one way is one quarter the other.
            _ => Magnitude::QuarterInverse,
        };

        let turn = Turn::new(face, magnitude);
        state.apply(turn);
        self.last_committed = Some(turn);

        Some(turn)
    }

    /// The turn to sweep again for a visual replay. Purely re-presentational;
    /// the logical state was already updated when the turn committed.
    pub fn replay(&self) -> Option<Turn> {
        self.last_committed
    }
}

impl Default for TurnDriver {
    fn default() -> TurnDriver {
        TurnDriver::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 0.1;

    #[test]
    fn playback_commits_only_at_the_target() {
        let mut state = CubeState::solved();
        let mut driver = TurnDriver::new();
        let turn = Turn::new(Face::R, Magnitude::Quarter);

        assert!(driver.begin(turn));
        assert!(!driver.begin(turn), "driver must refuse a second turn in flight");

        let mut committed = None;
        let mut frames = 0;
        while committed.is_none() {
            assert_eq!(state, CubeState::solved(), "no commit before the threshold");
            committed = driver.tick(FRAME, &mut state);
            frames += 1;
        }

        assert_eq!(committed, Some(turn));
        assert_eq!(frames, 16); // ceil((π/2) / 0.1)
        assert!(driver.is_idle());
        assert_ne!(state, CubeState::solved());
        assert_eq!(driver.replay(), Some(turn));
    }

    #[test]
    fn playback_half_turn_sweeps_twice_as_far() {
        let mut state = CubeState::solved();
        let mut driver = TurnDriver::new();
        driver.begin(Turn::new(Face::U, Magnitude::Half));

        let mut frames = 0;
        while driver.tick(FRAME, &mut state).is_none() {
            frames += 1;
        }

        assert_eq!(frames + 1, 32); // ceil(π / 0.1)
    }

    #[test]
    fn inverse_playback_sweeps_negative() {
        let mut state = CubeState::solved();
        let mut driver = TurnDriver::new();
        driver.begin(Turn::new(Face::U, Magnitude::QuarterInverse));

        driver.tick(FRAME, &mut state);
        assert!(driver.progress() < 0.0);
    }

    #[test]
    fn release_short_of_threshold_commits_nothing() {
        let mut state = CubeState::solved();
        let mut driver = TurnDriver::new();

        assert!(driver.grab(Face::F));
        driver.drag(0.6); // under π/4
        assert_eq!(driver.release(&mut state), None);
        assert!(driver.is_idle());
        assert_eq!(state, CubeState::solved());
    }

    #[test]
    fn release_snaps_to_quarters() {
        let cases = [
            (1.2, Magnitude::Quarter),
            (-1.2, Magnitude::QuarterInverse),
            (2.9, Magnitude::Half),
            (-2.9, Magnitude::Half),
            // Past three quarters the gesture wraps: 270° clockwise is a
            // counterclockwise quarter, and vice versa.
            (4.7, Magnitude::QuarterInverse),
            (-4.7, Magnitude::Quarter),
        ];

        for (angle, expected) in cases {
            let mut state = CubeState::solved();
            let mut driver = TurnDriver::new();

            driver.grab(Face::L);
            driver.drag(angle);
            let committed = driver.release(&mut state);

            assert_eq!(committed, Some(Turn::new(Face::L, expected)), "{angle}");

            let mut expected_state = CubeState::solved();
            expected_state.apply(Turn::new(Face::L, expected));
            assert_eq!(state, expected_state, "{angle}");
        }
    }

    #[test]
    fn release_near_a_full_turn_commits_nothing() {
        for angle in [6.1, -6.1] {
            let mut state = CubeState::solved();
            let mut driver = TurnDriver::new();

            driver.grab(Face::R);
            driver.drag(angle);

            assert_eq!(driver.release(&mut state), None, "{angle}");
            assert!(driver.is_idle());
            assert_eq!(state, CubeState::solved(), "{angle}");
        }
    }

    #[test]
    fn drag_accumulates_across_calls() {
        let mut state = CubeState::solved();
        let mut driver = TurnDriver::new();

        driver.grab(Face::B);
        for _ in 0..10 {
            driver.drag(0.13);
        }

        // 1.3 rad snaps to one quarter.
        assert_eq!(
            driver.release(&mut state),
            Some(Turn::new(Face::B, Magnitude::Quarter))
        );
    }
}
