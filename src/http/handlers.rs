//! Inbound request handlers for the seven employee operations.
//!
//! Each handler is a thin translation layer: extract path/body, call the
//! gateway, wrap the result. Errors surface through `GatewayError`'s
//! `IntoResponse` mapping.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::gateway::GatewayError;
use crate::http::server::AppState;
use crate::model::{Employee, EmployeeInput};

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, GatewayError> {
    tracing::info!("list employees");
    state.gateway.list_all().await.map(Json)
}

pub async fn search_employees(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<Employee>>, GatewayError> {
    tracing::info!(query = %query, "search employees");
    state.gateway.search_by_name(&query).await.map(Json)
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, GatewayError> {
    tracing::info!(id = %id, "get employee");
    state.gateway.get_by_id(&id).await.map(Json)
}

pub async fn highest_salary(State(state): State<AppState>) -> Result<Json<i64>, GatewayError> {
    tracing::info!("highest salary");
    state.gateway.highest_salary().await.map(Json)
}

pub async fn top_ten_earners(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, GatewayError> {
    tracing::info!("top ten earner names");
    state.gateway.top_ten_earner_names().await.map(Json)
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> Result<Json<Employee>, GatewayError> {
    tracing::info!(name = %input.name, "create employee");
    state.gateway.create(&input).await.map(Json)
}

/// Returns the upstream's raw confirmation payload as text, verbatim.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, GatewayError> {
    tracing::info!(id = %id, "delete employee");
    state.gateway.delete_by_id(&id).await
}
