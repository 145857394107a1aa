//! Turn/skill state machine and session state
//!
//! The engine owns the single mutable game session and advances it
//! through the staged turn cycle. The presentation layer talks to it
//! through exactly two entry points, [`Session::route_event`] and
//! [`Session::update`], plus read accessors.

mod session;
mod turn;


pub use session::{Event, Move, Outcome, PlayerState, Session, TurnStage, MESSAGE_CAP};
