use gus_engine::session;
use gus_engine::{Engine, Move, Strategy, ai};

use crate::AppState;
use crate::error::AppError;
use crate::protocol::{
    Action, DEFAULT_SIZE, GoForm, GoResponse, NEW_SESSION, STATUS_OPPONENT_PASSED, status_code,
};

/// Validate the client's session, apply its move and, when enabled, the opponent's reply.
pub fn handle(
    state: &AppState,
    form: &GoForm,
    strategy: Strategy,
) -> Result<GoResponse, AppError> {
    let mut engine = load(state, form)?;
    let mut status = 0;
    let mut highlight = None;

    if let Action::Move(mv) = Action::from_coords(form.x, form.y) {
        let stone = engine.turn();
        let result = engine.apply(stone, mv);

        match result.error() {
            Some(e) => {
                tracing::debug!(%mv, %stone, "move rejected: {e}");
                status = status_code(e);
            }
            None => {
                tracing::debug!(%mv, %stone, captured = result.captured.len(), "move accepted");
                status = result.captured.len() as i32;
                if let Move::Play { x, y } = mv {
                    highlight = Some((x, y));
                }

                if state.opponent {
                    let reply = engine.turn();
                    match ai::predict(&engine, reply, strategy) {
                        Some((x, y)) => {
                            let (x, y) = (x as i32, y as i32);
                            engine.place_stone(x, y, reply);
                            tracing::debug!(?strategy, %reply, x, y, "opponent played");
                            highlight = Some((x, y));
                        }
                        None => {
                            engine.pass(reply);
                            tracing::debug!(%reply, "opponent passed");
                            status = STATUS_OPPONENT_PASSED;
                        }
                    }
                }
            }
        }
    }

    let session = session::encode(&engine);
    let signature = state.signer.sign(&session);
    let (x, y) = highlight.unwrap_or((-1, -1));

    Ok(GoResponse {
        session,
        signature,
        status,
        x,
        y,
    })
}

fn load(state: &AppState, form: &GoForm) -> Result<Engine, AppError> {
    if form.session == NEW_SESSION {
        let size = form.size.unwrap_or(DEFAULT_SIZE);
        return Ok(Engine::with_komi(size, state.komi)?);
    }

    if !state.signer.verify(&form.session, &form.signature) {
        tracing::warn!("Rejected session with bad signature");
        return Err(AppError::Forbidden("invalid signature".to_string()));
    }

    Ok(session::decode(&form.session)?)
}
