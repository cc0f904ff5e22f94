use axum::Json;
use axum::extract::State;

use crate::dto::StateResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/states - List the seeded Nigerian states.
pub async fn list_states_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StateResponse>>> {
    let states = state.state_service.list().await?;

    Ok(Json(states.into_iter().map(StateResponse::from).collect()))
}
