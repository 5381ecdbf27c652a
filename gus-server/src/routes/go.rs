use axum::Json;
use axum::extract::State;
use gus_engine::Strategy;
use rand::RngExt;

use crate::AppState;
use crate::error::AppError;
use crate::protocol::{GoForm, GoResponse};
use crate::services::authority;

/// `POST /go`. The body is form-encoded; the content type header is not checked
/// because the browser client labels it inconsistently.
pub async fn play(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<GoResponse>, AppError> {
    let form: GoForm = serde_urlencoded::from_str(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid form: {e}")))?;

    let roll = rand::rng().random_range(0..Strategy::ROLLS);
    let resp = authority::handle(&state, &form, Strategy::from_roll(roll))?;
    Ok(Json(resp))
}
