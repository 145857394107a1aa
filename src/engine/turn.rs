//! The turn/skill state machine
//!
//! A turn walks BEGIN -> SKILL_WINDOW -> PLACEMENT -> POST_MOVE, then
//! hands over to the other side. Freeze skips, the rematch accept, and
//! the instant-win skill short-circuit that cycle. [`Session::update`]
//! performs exactly one stage step per frame tick; [`Session::route_event`]
//! feeds adapter-resolved input into whatever the current stage is
//! waiting for. Every illegal input is ignored or answered with a log
//! message; nothing here can fail the session.

use crate::board::Pos;
use crate::rules;
use crate::skills::{self, Skill};

use super::session::{Event, Move, Outcome, Session, TurnStage};

impl Session {
    /// Dispatch one input event into the state machine.
    pub fn route_event(&mut self, event: Event) {
        match event {
            Event::Reset => self.reset(),
            Event::Undo => {
                self.undo();
            }
            Event::RematchResponse(agree) => self.rematch_response(agree),
            Event::BoardClick(pos) => self.handle_board_click(pos),
            Event::SkillButton(skill) => self.handle_skill_button(skill),
        }
    }

    /// Advance the state machine by one step.
    ///
    /// No-op while the game is over or the current stage is waiting for
    /// input; calling it repeatedly never double-advances.
    pub fn update(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        match self.stage {
            TurnStage::Begin => self.begin_turn(),
            TurnStage::SkillWindow => {
                // Overlays hold the window open until resolved by input
                if !self.freeze_window_open
                    && !self.target_select_active
                    && !self.rematch_dialog_open
                {
                    self.stage = TurnStage::Placement;
                }
            }
            TurnStage::Placement => {}
            TurnStage::PostMove => self.judge_last_move(),
        }
    }

    /// Turn-start bookkeeping, then open the skill window.
    fn begin_turn(&mut self) {
        let side = self.turn_side;
        let player = self.player_mut(side);
        for cd in player.cooldowns.iter_mut() {
            *cd = cd.saturating_sub(1);
        }
        // A stance only covers the opponent's turn just played
        player.stance = false;

        self.freeze_window_open = self.player(side).frozen;
        self.rematch_dialog_open = false;
        self.rematch_requested_by = None;

        self.stage = TurnStage::SkillWindow;
    }

    fn handle_board_click(&mut self, pos: Pos) {
        if self.outcome.is_some() {
            return;
        }
        // A click anywhere answers the rematch dialog with a refusal
        if self.rematch_dialog_open {
            self.rematch_response(false);
            return;
        }
        // A frozen side clicking the board forfeits the turn
        if self.freeze_window_open {
            self.skip_frozen_turn();
            return;
        }
        if self.target_select_active {
            self.confirm_remove_target(pos);
            return;
        }
        if self.stage == TurnStage::Placement && self.try_place_stone(pos) {
            self.stage = TurnStage::PostMove;
        }
    }

    fn handle_skill_button(&mut self, skill: Skill) {
        if self.outcome.is_some() {
            return;
        }
        if self.rematch_dialog_open {
            self.rematch_response(false);
            return;
        }
        // Inside a freeze window the counter is the only real option;
        // everything else forfeits the turn
        if self.freeze_window_open {
            if skill == Skill::CounterFreeze {
                skills::try_cast(self, skill);
            } else {
                self.skip_frozen_turn();
            }
            return;
        }

        // Casting is open during the skill window, and during placement
        // as long as no stone has been placed this turn
        let may_cast = self.stage == TurnStage::SkillWindow
            || (self.stage == TurnStage::Placement && !self.moved_this_turn());
        if may_cast {
            skills::try_cast(self, skill);
        }
    }

    /// Place a stone for the current side. Occupied or out-of-range
    /// targets are ignored without a message.
    fn try_place_stone(&mut self, pos: Pos) -> bool {
        if !pos.in_bounds() || !self.board.is_empty(pos) {
            return false;
        }
        let stone = self.turn_side;
        self.board.place_stone(pos, stone);
        self.history.push(Move { pos, stone });
        self.last_move = Some(pos);
        true
    }

    /// Resolve a Remove Stone target click. Only an enemy-occupied cell
    /// completes the selection; anything else leaves it active.
    fn confirm_remove_target(&mut self, pos: Pos) -> bool {
        if !self.target_select_active || !pos.in_bounds() {
            return false;
        }
        let enemy = self.turn_side.opponent();
        if self.board.get(pos) != enemy {
            return false;
        }

        self.board.remove_stone(pos);
        // Drop the most recent history entry for that cell; earlier
        // entries for the same cell belong to stones removed long ago
        if let Some(i) = self
            .history
            .iter()
            .rposition(|m| m.pos == pos && m.stone == enemy)
        {
            self.history.remove(i);
        }
        self.target_select_active = false;
        self.log("Remove Stone: removed an enemy stone.");
        true
    }

    /// Consume the frozen flag and pass the turn without a placement.
    fn skip_frozen_turn(&mut self) {
        if !self.freeze_window_open {
            return;
        }
        let side = self.turn_side;
        self.player_mut(side).frozen = false;
        self.freeze_window_open = false;
        self.log("Frozen: turn skipped.");
        self.switch_turn();
    }

    /// Judge the last placement: win, draw, or hand over the turn.
    fn judge_last_move(&mut self) {
        let won = self
            .last_move
            .map_or(false, |pos| rules::check_five(&self.board, pos));
        if won {
            let side = self.turn_side;
            let name = self.player(side).name.clone();
            self.outcome = Some(Outcome::Win(side));
            self.log(format!("{name} wins!"));
            return;
        }
        if rules::is_draw(&self.board) {
            self.outcome = Some(Outcome::Draw);
            self.log("Draw: the board is full.");
            return;
        }
        self.switch_turn();
    }

    fn switch_turn(&mut self) {
        self.turn_side = self.turn_side.opponent();
        self.stage = TurnStage::Begin;
    }

    /// Answer an open rematch dialog. Accepting resets the whole game;
    /// declining just closes the dialog.
    pub fn rematch_response(&mut self, agree: bool) {
        if !self.rematch_dialog_open {
            return;
        }
        self.rematch_dialog_open = false;
        self.rematch_requested_by = None;
        if agree {
            self.reset();
        } else {
            self.log("Rematch request declined.");
        }
    }

    /// Take back the last placement.
    ///
    /// Reverts only the board cell, the history entry, and the last-move
    /// marker. Cooldowns and flags spent since that move stay spent;
    /// this is an explore tool, not a state rollback.
    pub fn undo(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };
        self.board.remove_stone(last.pos);
        self.last_move = self.history.last().map(|m| m.pos);
        self.log("Undid the last move.");
        true
    }
}
