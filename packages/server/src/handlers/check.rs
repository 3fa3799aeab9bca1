use axum::Json;
use axum::extract::{Path, State};
use common::{Handle, detect};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::models::check::CheckResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/{handle}/check",
    tag = "Checks",
    operation_id = "checkUser",
    summary = "Check a user for all-skipped contests",
    description = "Fetches the user's full submission history from Codeforces, groups it by contest and flags every contest in which all submissions were skipped. Only one check per handle runs at a time.",
    params(("handle" = String, Path, description = "Codeforces handle")),
    responses(
        (status = 200, description = "Detection result", body = CheckResponse),
        (status = 400, description = "Invalid handle (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Check already running (CHECK_IN_PROGRESS)", body = ErrorBody),
        (status = 502, description = "Submission source failed (FETCH_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip_all, fields(handle = %raw_handle))]
pub async fn check_user(
    State(state): State<AppState>,
    Path(raw_handle): Path<String>,
) -> Result<Json<CheckResponse>, AppError> {
    let handle = Handle::parse(&raw_handle)?;
    let _in_flight = state
        .in_flight
        .acquire(&handle)
        .ok_or(AppError::CheckInProgress)?;

    let submissions = state.source.fetch_submissions(&handle).await?;
    let result = detect(&submissions);

    info!(
        submissions = result.submissions_checked,
        contests = result.contests_checked,
        flagged = result.flagged_contest_ids.len(),
        "Check complete"
    );

    Ok(Json(CheckResponse::new(&handle, result)))
}
