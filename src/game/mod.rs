//! Game session and round orchestration
//!
//! [`GameSession`] sequences the comparison, belief and projection pieces in
//! response to player events. [`Timers`] carries the two cosmetic delays that
//! front ends layer on top of it.

mod input;
pub mod projector;
mod session;
mod state;
mod timers;

pub use input::KeyInput;
pub use projector::{project_all, reveal_row, reveal_true};
pub use session::{GameSession, Snapshot, SubmitOutcome};
pub use state::RoundState;
pub use timers::{TimerKind, Timers};
