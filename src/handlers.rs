use crate::errors::AppError;
use crate::models::{FilterSelection, ViewBundle};
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::{compute_view, status_options};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.dataset.responsibles, &status_options()))
}

pub async fn view(
    State(state): State<AppState>,
    payload: Result<Json<FilterSelection>, JsonRejection>,
) -> Result<Json<ViewBundle>, AppError> {
    let Json(selection) = payload?;
    Ok(Json(compute_view(&state.dataset, &selection)))
}
