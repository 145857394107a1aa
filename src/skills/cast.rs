//! Skill casting: legality, interception, and the six effects
//!
//! A cast walks three gates in order: cooldown + skill precondition,
//! then the opponent's interception stance, then the effect itself. An
//! intercepted cast still charges the caster's cooldown. Every rejection
//! surfaces as a log message; none of them change the game state.

use rand::Rng;

use crate::engine::{Outcome, Session};
use crate::rules;

use super::Skill;

/// Success bonus per own open three on the board
const OPEN_THREE_BONUS: f64 = 0.02;
/// Success bonus per own open four on the board
const OPEN_FOUR_BONUS: f64 = 0.03;

/// Check whether the current side may cast `skill` right now.
///
/// Covers the cooldown gate and the per-skill preconditions; the
/// interception stance is resolved inside [`try_cast`] because it
/// consumes state.
pub fn can_cast(session: &Session, skill: Skill) -> bool {
    if session.player(session.turn_side).cooldown(skill) > 0 {
        return false;
    }

    match skill {
        // Only usable while one's own freeze window is open
        Skill::CounterFreeze => session.freeze_window_open,
        // Locked until enough total moves have been played
        Skill::MightyPower => session.history.len() >= session.config.mighty_min_moves,
        // Needs at least one target
        Skill::RemoveStone => {
            session
                .board
                .stones(session.turn_side.opponent())
                .map_or(false, |stones| stones.count() > 0)
        }
        Skill::Freeze | Skill::CounterStance | Skill::Rematch => true,
    }
}

/// Attempt to cast `skill` for the current side.
///
/// Returns true iff the effect executed. The cooldown is charged on
/// execution AND on interception, never on a precondition rejection.
pub fn try_cast(session: &mut Session, skill: Skill) -> bool {
    if !can_cast(session, skill) {
        session.log(format!("{} is unavailable or cooling down.", skill.name()));
        return false;
    }

    if consume_interception(session) {
        set_cooldown(session, skill);
        session.log("The opponent's Counter Stance intercepted your skill!");
        return false;
    }

    match skill {
        Skill::RemoveStone => cast_remove_stone(session),
        Skill::Freeze => cast_freeze(session),
        Skill::CounterFreeze => cast_counter_freeze(session),
        Skill::MightyPower => cast_mighty_power(session),
        Skill::CounterStance => cast_counter_stance(session),
        Skill::Rematch => cast_rematch(session),
    }

    set_cooldown(session, skill);
    true
}

/// Consume the opponent's stance if armed; true means the cast is eaten
fn consume_interception(session: &mut Session) -> bool {
    let opponent = session.player_mut(session.turn_side.opponent());
    if opponent.stance {
        opponent.stance = false;
        true
    } else {
        false
    }
}

fn set_cooldown(session: &mut Session, skill: Skill) {
    let base = session.config.cooldown(skill);
    session.player_mut(session.turn_side).cooldowns[skill.index()] = base;
}

fn cast_remove_stone(session: &mut Session) {
    session.target_select_active = true;
    session.log("Remove Stone: click an enemy stone to remove it.");
}

fn cast_freeze(session: &mut Session) {
    let opponent = session.turn_side.opponent();
    session.player_mut(opponent).frozen = true;
    session.log("Freeze: the opponent's next turn will be frozen.");
}

fn cast_counter_freeze(session: &mut Session) {
    session.player_mut(session.turn_side).frozen = false;
    session.freeze_window_open = false;
    session.log("Counter Freeze: the freeze is lifted, place your stone.");
}

fn cast_mighty_power(session: &mut Session) {
    let chance = mighty_power_chance(session);
    let roll: f64 = session.rng_mut().gen();
    let percent = (chance * 100.0).round() as u32;
    if roll < chance {
        session.outcome = Some(Outcome::Win(session.turn_side));
        session.log(format!("Mighty Power succeeded! ({percent}% chance)"));
    } else {
        session.log(format!("Mighty Power failed ({percent}% chance)."));
    }
}

fn cast_counter_stance(session: &mut Session) {
    session.player_mut(session.turn_side).stance = true;
    session.log("Counter Stance: ready to intercept the opponent's next skill.");
}

fn cast_rematch(session: &mut Session) {
    session.rematch_dialog_open = true;
    session.rematch_requested_by = Some(session.turn_side);
    session.log("Rematch: asked the opponent to restart the game.");
}

/// Mighty Power success probability for the current side and board.
///
/// Base chance plus a small bonus per own open three/four, clamped to
/// the configured ceiling.
pub fn mighty_power_chance(session: &Session) -> f64 {
    let config = &session.config;
    let counts = rules::count_open_patterns(&session.board, session.turn_side);
    let bonus =
        OPEN_THREE_BONUS * counts.open_three as f64 + OPEN_FOUR_BONUS * counts.open_four as f64;
    (config.mighty_base + bonus).clamp(config.mighty_base, config.mighty_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Stone};
    use crate::engine::Move;
    use crate::skills::SkillConfig;

    /// Session with every cooldown cleared, ready to cast
    fn ready_session() -> Session {
        let mut session = Session::with_seed(SkillConfig::default(), 7);
        for side in [Stone::Black, Stone::White] {
            session.player_mut(side).cooldowns = [0; crate::skills::SKILL_COUNT];
        }
        session
    }

    /// Fake `n` placed stones so move-count preconditions pass
    fn pad_history(session: &mut Session, n: usize) {
        for i in 0..n {
            let pos = Pos::from_index(i);
            let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
            session.board.place_stone(pos, stone);
            session.history.push(Move { pos, stone });
        }
    }

    #[test]
    fn test_cooldown_blocks_cast() {
        let mut session = ready_session();
        session.player_mut(Stone::Black).cooldowns[Skill::Freeze.index()] = 2;

        assert!(!can_cast(&session, Skill::Freeze));
        assert!(!try_cast(&mut session, Skill::Freeze));
        assert!(!session.player(Stone::White).frozen);
    }

    #[test]
    fn test_freeze_marks_opponent() {
        let mut session = ready_session();
        assert!(try_cast(&mut session, Skill::Freeze));
        assert!(session.player(Stone::White).frozen);
        // Cooldown charged back to base
        assert_eq!(
            session.player(Stone::Black).cooldown(Skill::Freeze),
            session.config.cooldown(Skill::Freeze)
        );
    }

    #[test]
    fn test_counter_freeze_needs_open_window() {
        let mut session = ready_session();
        assert!(!can_cast(&session, Skill::CounterFreeze));

        session.player_mut(Stone::Black).frozen = true;
        session.freeze_window_open = true;
        assert!(try_cast(&mut session, Skill::CounterFreeze));
        assert!(!session.player(Stone::Black).frozen);
        assert!(!session.freeze_window_open);
    }

    #[test]
    fn test_remove_stone_needs_a_target() {
        let mut session = ready_session();
        assert!(!can_cast(&session, Skill::RemoveStone));

        session.board.place_stone(Pos::new(7, 7), Stone::White);
        assert!(can_cast(&session, Skill::RemoveStone));
        assert!(try_cast(&mut session, Skill::RemoveStone));
        assert!(session.target_select_active);
    }

    #[test]
    fn test_interception_consumes_stance_and_charges_cooldown() {
        let mut session = ready_session();
        session.player_mut(Stone::White).stance = true;

        assert!(!try_cast(&mut session, Skill::Freeze));
        // Stance consumed exactly once, effect skipped, cooldown charged
        assert!(!session.player(Stone::White).stance);
        assert!(!session.player(Stone::White).frozen);
        assert_eq!(
            session.player(Stone::Black).cooldown(Skill::Freeze),
            session.config.cooldown(Skill::Freeze)
        );

        // Next cast goes through: the stance is gone
        assert!(try_cast(&mut session, Skill::CounterStance));
        assert!(session.player(Stone::Black).stance);
    }

    #[test]
    fn test_interception_does_not_fire_on_rejected_cast() {
        let mut session = ready_session();
        session.player_mut(Stone::White).stance = true;
        session.player_mut(Stone::Black).cooldowns[Skill::Freeze.index()] = 3;

        assert!(!try_cast(&mut session, Skill::Freeze));
        // Rejected before the interception gate: stance survives
        assert!(session.player(Stone::White).stance);
        assert_eq!(session.player(Stone::Black).cooldown(Skill::Freeze), 3);
    }

    #[test]
    fn test_mighty_power_locked_below_minimum_moves() {
        let mut session = ready_session();
        pad_history(&mut session, 19);
        assert!(!can_cast(&session, Skill::MightyPower));
        assert!(!try_cast(&mut session, Skill::MightyPower));
        assert!(session.outcome.is_none());

        session.history.push(Move {
            pos: Pos::from_index(19),
            stone: Stone::White,
        });
        assert!(can_cast(&session, Skill::MightyPower));
    }

    #[test]
    fn test_mighty_power_certain_success() {
        let mut session = ready_session();
        session.config.mighty_base = 1.0;
        session.config.mighty_cap = 1.0;
        pad_history(&mut session, 20);

        assert!(try_cast(&mut session, Skill::MightyPower));
        assert_eq!(session.outcome, Some(Outcome::Win(Stone::Black)));
    }

    #[test]
    fn test_mighty_power_certain_failure() {
        let mut session = ready_session();
        session.config.mighty_base = 0.0;
        session.config.mighty_cap = 0.0;
        pad_history(&mut session, 20);

        assert!(try_cast(&mut session, Skill::MightyPower));
        assert!(session.outcome.is_none());
        // Failure still charges the cooldown
        assert_eq!(
            session.player(Stone::Black).cooldown(Skill::MightyPower),
            session.config.cooldown(Skill::MightyPower)
        );
    }

    #[test]
    fn test_mighty_power_chance_bonus_and_cap() {
        let mut session = ready_session();
        assert!((mighty_power_chance(&session) - 0.10).abs() < 1e-9);

        // One open three: +0.02
        for c in 5..8 {
            session.board.place_stone(Pos::new(7, c), Stone::Black);
        }
        assert!((mighty_power_chance(&session) - 0.12).abs() < 1e-9);

        // Pile on open threes; the cap holds at 0.18
        for row in [1u8, 3, 9, 11] {
            for c in 5..8 {
                session.board.place_stone(Pos::new(row, c), Stone::Black);
            }
        }
        assert!((mighty_power_chance(&session) - 0.18).abs() < 1e-9);
    }

    #[test]
    fn test_rematch_opens_dialog() {
        let mut session = ready_session();
        assert!(try_cast(&mut session, Skill::Rematch));
        assert!(session.rematch_dialog_open);
        assert_eq!(session.rematch_requested_by, Some(Stone::Black));
    }
}
