//! Tap handling
//!
//! The whole move engine is one transition: `tap(state, tube)`. A tap either
//! picks a candy up, puts it back, or tries to drop it on another tube.
//! Nothing here returns an error; bad taps are ignored or cost a life.

use super::state::{GameEvent, GamePhase, GameState, Selection};
use crate::consts::TUBE_CAPACITY;
use crate::settings::MovePolicy;

/// What a single tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing happened (empty tube while idle, bad index, attempt over)
    Ignored,
    /// Top candy picked up
    Picked,
    /// Same tube tapped again, selection dropped
    Cancelled,
    /// Legal move applied
    Moved,
    /// Illegal drop, counted and penalized
    Rejected,
}

/// Apply one tap to the state
pub fn tap(state: &mut GameState, tube: usize) -> TapOutcome {
    if state.phase.is_terminal() || tube >= state.board.len() {
        return TapOutcome::Ignored;
    }

    let outcome = match state.selection {
        None => pick(state, tube),
        Some(selection) if selection.source == tube => {
            state.selection = None;
            state.push_event(GameEvent::Cancelled { tube });
            TapOutcome::Cancelled
        }
        Some(selection) => drop_on(state, selection, tube),
    };

    log::debug!(
        "tap {} -> {:?} (moves {}, lives {})",
        tube,
        outcome,
        state.moves,
        state.lives
    );

    if matches!(outcome, TapOutcome::Moved | TapOutcome::Rejected) {
        settle(state);
    }
    outcome
}

fn pick(state: &mut GameState, tube: usize) -> TapOutcome {
    match state.board.tubes[tube].top() {
        Some(candy) => {
            state.selection = Some(Selection {
                source: tube,
                candy,
            });
            state.push_event(GameEvent::Picked { tube });
            TapOutcome::Picked
        }
        None => TapOutcome::Ignored,
    }
}

fn drop_on(state: &mut GameState, selection: Selection, target: usize) -> TapOutcome {
    let source = selection.source;
    state.selection = None;
    state.moves = state.moves.saturating_add(1);

    // Run length comes from the tube as it is now, not from pick-up time
    let run = state.board.tubes[source].run_len();
    let target_tube = &state.board.tubes[target];
    let color_ok = target_tube
        .top()
        .is_none_or(|top| top == selection.candy);
    let fits = target_tube.len() + run <= TUBE_CAPACITY;

    if !(color_ok && fits) || run == 0 {
        state.lives = state.lives.saturating_sub(1);
        state.push_event(GameEvent::Rejected {
            from: source,
            to: target,
        });
        return TapOutcome::Rejected;
    }

    let count = match state.move_policy {
        MovePolicy::SingleToken => 1,
        MovePolicy::WholeRun => run,
    };
    for _ in 0..count {
        if let Some(candy) = state.board.tubes[source].pop_top() {
            state.board.tubes[target].push_top(candy);
        }
    }
    state.push_event(GameEvent::Moved {
        from: source,
        to: target,
        count,
    });
    TapOutcome::Moved
}

/// Check for a finished attempt after a counted move
fn settle(state: &mut GameState) {
    if state.is_complete() {
        state.phase = GamePhase::Won;
        let perfect = state.tier().is_perfect(state.moves);
        state.push_event(GameEvent::Completed {
            moves: state.moves,
            perfect,
        });
        log::info!(
            "Level {} complete in {} moves{}",
            state.level,
            state.moves,
            if perfect { " (perfect)" } else { "" }
        );
    } else if state.lives == 0 {
        state.phase = GamePhase::Failed;
        state.push_event(GameEvent::Failed { moves: state.moves });
        log::info!("Level {} failed after {} moves", state.level, state.moves);
    }
}
