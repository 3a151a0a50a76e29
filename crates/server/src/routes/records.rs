//! The route group shared by the four record tabs.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, put},
};
use serde_json::{Map, Value};
use services::services::{form::FormView, listing::ListView, shell::ShellRecord};
use tracing::info;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// GET /api/{tab}
pub async fn list_records<R: ShellRecord>(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<ListView>> {
    ResponseJson(ApiResponse::success(
        state.shell().presenter::<R>().render(),
    ))
}

/// GET /api/{tab}/draft
/// Add-mode form with every field at its default.
pub async fn add_form<R: ShellRecord>(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<FormView>> {
    ResponseJson(ApiResponse::success(state.shell().open_add::<R>().view()))
}

/// GET /api/{tab}/{id}/draft
pub async fn edit_form<R: ShellRecord>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<FormView>>, ApiError> {
    let form = state
        .shell()
        .presenter::<R>()
        .select(id)
        .ok_or_else(|| ApiError::NotFound(format!("{} {}", R::KIND, id)))?;
    Ok(ResponseJson(ApiResponse::success(form.view())))
}

/// POST /api/{tab}
pub async fn create_record<R: ShellRecord>(
    State(state): State<AppState>,
    Json(values): Json<Map<String, Value>>,
) -> Result<ResponseJson<ApiResponse<R>>, ApiError> {
    let shell = state.shell();
    let mut form = shell.open_add::<R>();
    form.apply(&values)?;
    let record = form.save(shell.store::<R>()).await?;
    Ok(ResponseJson(ApiResponse::success(record)))
}

/// PUT /api/{tab}/{id}
/// Submitted values are merged over the stored record before the save-gate runs.
pub async fn update_record<R: ShellRecord>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(values): Json<Map<String, Value>>,
) -> Result<ResponseJson<ApiResponse<R>>, ApiError> {
    let shell = state.shell();
    let mut form = shell
        .presenter::<R>()
        .select(id)
        .ok_or_else(|| ApiError::NotFound(format!("{} {}", R::KIND, id)))?;
    form.apply(&values)?;
    let record = form.save(shell.store::<R>()).await?;
    Ok(ResponseJson(ApiResponse::success(record)))
}

/// DELETE /api/{tab}/{id}
/// Answers `false` when nothing had that id.
pub async fn delete_record<R: ShellRecord>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<bool>>, ApiError> {
    let removed = state.shell().presenter::<R>().delete(id).await?;
    Ok(ResponseJson(ApiResponse::success(removed)))
}

/// DELETE /api/{tab}
pub async fn clear_records<R: ShellRecord>(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    state.shell().store::<R>().clear().await?;
    info!(kind = %R::KIND, "Cleared via API");
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router<R: ShellRecord>() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_records::<R>)
                .post(create_record::<R>)
                .delete(clear_records::<R>),
        )
        .route("/draft", get(add_form::<R>))
        .route("/{id}/draft", get(edit_form::<R>))
        .route("/{id}", put(update_record::<R>).delete(delete_record::<R>))
}
