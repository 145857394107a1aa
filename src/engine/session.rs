//! Session state: board, players, turn bookkeeping, message log

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone};
use crate::skills::{Skill, SkillConfig, SKILL_COUNT};

/// Rolling message log capacity (the panel shows the most recent 3)
pub const MESSAGE_CAP: usize = 8;

/// Stages of a single side's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStage {
    /// Cooldown/flag bookkeeping at turn start
    Begin,
    /// Skills may be cast; also hosts freeze/target/rematch overlays
    SkillWindow,
    /// Waiting for a stone placement
    Placement,
    /// Judge the placement, then hand over the turn
    PostMove,
}

/// Terminal game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    Draw,
}

/// One recorded placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

/// Input events, already resolved to game coordinates by the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Click on a board intersection (pixel mapping is the adapter's job)
    BoardClick(Pos),
    /// Click on a skill button, or its number hotkey
    SkillButton(Skill),
    /// Answer to an open rematch dialog
    RematchResponse(bool),
    /// Undo the last placement (meta command)
    Undo,
    /// Restart the game (meta command)
    Reset,
}

/// Per-side mutable state
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub name: String,
    /// Turns remaining until each skill is available, by [`Skill::index`]
    pub cooldowns: [u8; SKILL_COUNT],
    /// One-shot: the next own turn opens as a freeze window
    pub frozen: bool,
    /// One-shot: intercepts the opponent's next skill cast
    pub stance: bool,
}

impl PlayerState {
    fn new(name: &str, cooldowns: [u8; SKILL_COUNT]) -> Self {
        Self {
            name: name.to_string(),
            cooldowns,
            frozen: false,
            stance: false,
        }
    }

    /// Remaining cooldown for a skill
    #[inline]
    pub fn cooldown(&self, skill: Skill) -> u8 {
        self.cooldowns[skill.index()]
    }

    /// Clear temporary flags and restart every cooldown at its base value
    pub fn reset(&mut self, cooldowns: [u8; SKILL_COUNT]) {
        self.cooldowns = cooldowns;
        self.frozen = false;
        self.stance = false;
    }
}

/// The whole mutable state of one game session.
///
/// Owned by the presentation adapter and mutated exclusively through
/// [`Session::route_event`] / [`Session::update`]; the adapter itself
/// only reads. Created once and reset in place on new-game.
pub struct Session {
    pub board: Board,
    /// Placements in order; entries can be removed from the middle by
    /// the Remove Stone skill, not just popped by undo
    pub history: Vec<Move>,
    pub turn_side: Stone,
    pub stage: TurnStage,
    pub last_move: Option<Pos>,
    pub outcome: Option<Outcome>,

    // Transient overlay flags
    pub target_select_active: bool,
    pub freeze_window_open: bool,
    pub rematch_dialog_open: bool,
    pub rematch_requested_by: Option<Stone>,

    pub config: SkillConfig,

    players: [PlayerState; 2],
    messages: VecDeque<String>,
    rng: StdRng,
}

impl Session {
    pub fn new(config: SkillConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic session for tests and replays
    pub fn with_seed(config: SkillConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SkillConfig, rng: StdRng) -> Self {
        let cooldowns = config.cooldowns;
        Self {
            board: Board::new(),
            history: Vec::new(),
            turn_side: Stone::Black,
            stage: TurnStage::Begin,
            last_move: None,
            outcome: None,
            target_select_active: false,
            freeze_window_open: false,
            rematch_dialog_open: false,
            rematch_requested_by: None,
            config,
            players: [
                PlayerState::new("Black", cooldowns),
                PlayerState::new("White", cooldowns),
            ],
            messages: VecDeque::new(),
            rng,
        }
    }

    /// Reset everything for a new game (also the rematch-accept path).
    ///
    /// The message log is deliberately kept so the rematch announcement
    /// stays visible.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.last_move = None;
        self.turn_side = Stone::Black;
        self.stage = TurnStage::Begin;
        self.outcome = None;
        self.target_select_active = false;
        self.freeze_window_open = false;
        self.rematch_dialog_open = false;
        self.rematch_requested_by = None;
        let cooldowns = self.config.cooldowns;
        for player in &mut self.players {
            player.reset(cooldowns);
        }
        self.log("New game started.");
    }

    /// Player state for a side
    #[inline]
    pub fn player(&self, side: Stone) -> &PlayerState {
        debug_assert!(side != Stone::Empty);
        &self.players[Self::side_index(side)]
    }

    #[inline]
    pub fn player_mut(&mut self, side: Stone) -> &mut PlayerState {
        debug_assert!(side != Stone::Empty);
        &mut self.players[Self::side_index(side)]
    }

    #[inline]
    fn side_index(side: Stone) -> usize {
        match side {
            Stone::White => 1,
            _ => 0,
        }
    }

    /// Whether the current side has already placed a stone this turn:
    /// the history tail belongs to them
    #[inline]
    pub fn moved_this_turn(&self) -> bool {
        self.history
            .last()
            .map_or(false, |m| m.stone == self.turn_side)
    }

    /// Append a message to the rolling log
    pub fn log(&mut self, text: impl Into<String>) {
        self.messages.push_back(text.into());
        while self.messages.len() > MESSAGE_CAP {
            self.messages.pop_front();
        }
    }

    /// The most recent `n` messages, oldest first
    pub fn recent_messages(&self, n: usize) -> impl Iterator<Item = &str> {
        let skip = self.messages.len().saturating_sub(n);
        self.messages.iter().skip(skip).map(String::as_str)
    }

    /// Whether [`Session::update`] would advance state without new input
    pub fn has_pending_stage_work(&self) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        match self.stage {
            TurnStage::Begin | TurnStage::PostMove => true,
            TurnStage::SkillWindow => {
                !self.freeze_window_open
                    && !self.target_select_active
                    && !self.rematch_dialog_open
            }
            TurnStage::Placement => false,
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::with_seed(SkillConfig::default(), 1);
        assert_eq!(session.turn_side, Stone::Black);
        assert_eq!(session.stage, TurnStage::Begin);
        assert!(session.outcome.is_none());
        assert!(session.board.is_board_empty());
        // Both sides start with every skill on full cooldown
        assert_eq!(session.player(Stone::Black).cooldowns, [6, 8, 3, 20, 5, 12]);
        assert_eq!(session.player(Stone::White).cooldowns, [6, 8, 3, 20, 5, 12]);
    }

    #[test]
    fn test_reset_restores_everything_but_messages() {
        let mut session = Session::with_seed(SkillConfig::default(), 1);
        session.board.place_stone(Pos::new(7, 7), Stone::Black);
        session.history.push(Move {
            pos: Pos::new(7, 7),
            stone: Stone::Black,
        });
        session.last_move = Some(Pos::new(7, 7));
        session.turn_side = Stone::White;
        session.outcome = Some(Outcome::Draw);
        session.player_mut(Stone::White).frozen = true;
        session.player_mut(Stone::Black).stance = true;
        session.player_mut(Stone::Black).cooldowns = [0; SKILL_COUNT];
        session.log("old message");

        session.reset();

        assert!(session.board.is_board_empty());
        assert!(session.history.is_empty());
        assert_eq!(session.last_move, None);
        assert_eq!(session.turn_side, Stone::Black);
        assert_eq!(session.stage, TurnStage::Begin);
        assert!(session.outcome.is_none());
        assert!(!session.player(Stone::White).frozen);
        assert!(!session.player(Stone::Black).stance);
        assert_eq!(session.player(Stone::Black).cooldowns, [6, 8, 3, 20, 5, 12]);
        // Log kept, announcement appended
        let recent: Vec<&str> = session.recent_messages(2).collect();
        assert_eq!(recent, vec!["old message", "New game started."]);
    }

    #[test]
    fn test_message_log_is_capped() {
        let mut session = Session::with_seed(SkillConfig::default(), 1);
        for i in 0..20 {
            session.log(format!("message {i}"));
        }
        let all: Vec<&str> = session.recent_messages(usize::MAX).collect();
        assert_eq!(all.len(), MESSAGE_CAP);
        assert_eq!(all[0], "message 12");
        assert_eq!(all[all.len() - 1], "message 19");

        let last_three: Vec<&str> = session.recent_messages(3).collect();
        assert_eq!(last_three, vec!["message 17", "message 18", "message 19"]);
    }

    #[test]
    fn test_moved_this_turn_follows_history_tail() {
        let mut session = Session::with_seed(SkillConfig::default(), 1);
        assert!(!session.moved_this_turn());

        session.history.push(Move {
            pos: Pos::new(7, 7),
            stone: Stone::Black,
        });
        assert!(session.moved_this_turn());

        session.turn_side = Stone::White;
        assert!(!session.moved_this_turn());
    }
}
