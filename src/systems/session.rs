use bevy::prelude::*;

use crate::events::{RoundResolved, RoundStarted, SessionExpired, SessionReset};
use crate::game::Advance;
use crate::resources::{AppState, Session};

/// Step the session clock once per frame and broadcast what happened.
pub fn advance_session(
    time: Res<Time<Real>>,
    mut session: ResMut<Session>,
    mut resolved: MessageWriter<RoundResolved>,
    mut expired: MessageWriter<SessionExpired>,
) {
    match session.advance(time.elapsed()) {
        Some(Advance::Resolved {
            player,
            computer,
            outcome,
            score,
        }) => {
            resolved.write(RoundResolved {
                player,
                computer,
                outcome,
                score,
            });
        }
        Some(Advance::Expired {
            final_score,
            rounds_played,
            discarded_round,
        }) => {
            expired.write(SessionExpired {
                final_score,
                rounds_played,
                discarded_round,
            });
        }
        None => {}
    }
}

/// Keep the app state in step with the session phase.
pub fn sync_app_state(
    session: Res<Session>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let wanted = AppState::for_phase(session.phase());
    if *state.get() != wanted {
        next_state.set(wanted);
    }
}

pub fn log_session_events(
    mut started: MessageReader<RoundStarted>,
    mut resolved: MessageReader<RoundResolved>,
    mut expired: MessageReader<SessionExpired>,
    mut resets: MessageReader<SessionReset>,
) {
    for round in started.read() {
        debug!("Round started: {} vs {}", round.player, round.computer);
    }
    for round in resolved.read() {
        info!(
            "{} vs {}: {:?} ({:+}), score {}",
            round.player,
            round.computer,
            round.outcome,
            round.outcome.score_delta(),
            round.score
        );
    }
    for end in expired.read() {
        if end.discarded_round {
            info!("Time ran out mid-round, pending reveal discarded");
        }
        info!(
            "Session over: final score {} after {} rounds",
            end.final_score, end.rounds_played
        );
    }
    for _ in resets.read() {
        info!("Session restarted");
    }
}
