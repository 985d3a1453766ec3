//! Facelet state and turn algebra for the 3×3×3 twisty puzzle.
//!
//! State is position-indexed: each edge, corner, and center slot holds the
//! colors currently sitting there, and a turn is an orientation-aware cyclic
//! permutation of slot contents. Rendering, pointer capture, and the solver
//! itself live outside this crate behind narrow boundaries: renderers read
//! [`CubeState`] snapshots and drive a [`rotation::TurnDriver`], input layers
//! resolve gestures through [`mapper`], and the solver exchange crosses the
//! [`wire`] format.

pub mod cursor;
pub mod engine;
pub mod mapper;
pub mod rotation;
pub mod scramble;
pub mod session;
pub mod state;
pub mod topology;
pub mod wire;

pub use cursor::SequenceCursor;
pub use engine::{Magnitude, NotationError, Turn, parse_sequence};
pub use session::{Mode, Session, StepNotice};
pub use state::{Axis, Color, ColorTriple, CubeState, UnknownColor};
pub use topology::Face;
