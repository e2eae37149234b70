//! Train route handlers.
//!
//! Pass-through CRUD over the `trains` collection.

use axum::{Json, extract::State, http::StatusCode};

use crate::db::trains::TrainRepository;
use crate::error::AppError;
use crate::models::{CreateTrain, Train};
use crate::state::AppState;

/// Handle `GET /trains`.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Train>>, AppError> {
    let trains = TrainRepository::new(state.database()).list().await?;

    Ok(Json(trains))
}

/// Handle `POST /trains`.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrain>,
) -> Result<(StatusCode, Json<Train>), AppError> {
    let train = TrainRepository::new(state.database())
        .insert(payload.into_train())
        .await?;

    tracing::info!(train_id = %train.train_id, train_number = %train.train_number, "train added");

    Ok((StatusCode::CREATED, Json(train)))
}
