//! Skill Gomoku
//!
//! A two-player hotseat Gomoku (five-in-a-row on a 15x15 board) where six
//! skills bend the normal turn flow: removing an enemy stone, freezing the
//! opponent's turn, countering a freeze, a probabilistic instant-win
//! attempt, a counter-stance that intercepts the opponent's next skill,
//! and a rematch request.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Pure judgements (five-in-a-row, draw, open patterns)
//! - [`skills`]: Skill definitions, casting rules, and effects
//! - [`engine`]: Session state and the turn/skill state machine
//! - [`ui`]: egui presentation adapter
//!
//! The engine is the single owner of mutable game state. The UI feeds it
//! pre-resolved input events and advances it one step per frame:
//!
//! ```
//! use skill_gomoku::{Event, Pos, Session, SkillConfig, TurnStage};
//!
//! let mut session = Session::new(SkillConfig::default());
//!
//! session.update(); // BEGIN: cooldown bookkeeping
//! session.update(); // SKILL_WINDOW: nothing pending, open placement
//! assert_eq!(session.stage, TurnStage::Placement);
//!
//! session.route_event(Event::BoardClick(Pos::new(7, 7)));
//! assert_eq!(session.stage, TurnStage::PostMove);
//!
//! session.update(); // judge, then hand the turn over
//! assert!(session.outcome.is_none());
//! ```
//!
//! # Turn flow
//!
//! Each turn cycles BEGIN -> SKILL_WINDOW -> PLACEMENT -> POST_MOVE.
//! Freeze skips, a rematch accept, and a successful instant-win attempt
//! short-circuit the cycle. Rejected actions (cooldowns, occupied cells,
//! intercepted casts) never halt the session; they only append to the
//! rolling message log.

pub mod board;
pub mod engine;
pub mod rules;
pub mod skills;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{Event, Move, Outcome, PlayerState, Session, TurnStage};
pub use skills::{Skill, SkillConfig};
