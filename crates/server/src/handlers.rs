use auth::RegisteredUser;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Json;
use corpus::Document;
use lawdesk_core::{Credentials, ProfileUpdate, Registration};
use log::info;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{
    LoginResponse, QueryRequest, QueryResponse, SearchRequest, SearchResponse,
    UpdateProfileResponse,
};
use crate::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(credentials) = payload?;
    let token = state.auth.login(&credentials)?;
    Ok(Json(LoginResponse { token }))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Registration>, JsonRejection>,
) -> Result<Json<RegisteredUser>, ApiError> {
    let Json(registration) = payload?;
    Ok(Json(state.auth.register(registration)))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<UpdateProfileResponse>, ApiError> {
    let Json(update) = payload?;
    let user = state.auth.update_profile(update)?;
    Ok(Json(UpdateProfileResponse {
        success: true,
        user,
    }))
}

pub async fn list_laws(State(state): State<Arc<AppState>>) -> Json<Vec<Document>> {
    Json(state.store.list().to_vec())
}

pub async fn get_law(
    State(state): State<Arc<AppState>>,
    law_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Document>, ApiError> {
    let Path(law_id) = law_id?;
    let document = state.store.get(law_id)?;
    Ok(Json(document.clone()))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload?;
    let top_k = request.top_k.unwrap_or(state.search.default_top_k);

    let results = state.store.search(&request.query, top_k);
    info!(
        "search: top_k={}, matches={}",
        top_k,
        results.iter().filter(|hit| hit.is_match()).count()
    );

    Ok(Json(SearchResponse { results }))
}

pub async fn query(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    let Json(request) = payload?;
    let hits = state.store.search(&request.query, state.search.default_top_k);

    Ok(Json(QueryResponse::from_hits(&request.query, hits)))
}
