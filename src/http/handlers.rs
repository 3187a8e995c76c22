//! JSON handlers for the navigation API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::navigation::{split_device_scope, strip_device_scope, MenuEntry, ResolvedNav, Section};
use crate::observability::metrics;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// Current pathname. Missing means the root.
    #[serde(default)]
    pub path: String,
    /// Device scope. Detected from the path when omitted.
    pub device: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NavResponse {
    #[serde(flatten)]
    pub nav: ResolvedNav,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    pub menu: Vec<MenuEntry>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub table: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        table: state.table.name().to_string(),
    })
}

pub async fn resolve_nav(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Json<NavResponse> {
    let (device, path) = match query.device.filter(|d| !d.is_empty()) {
        Some(id) => {
            let path = strip_device_scope(&query.path, &id).to_string();
            (Some(id), path)
        }
        None => {
            let (id, rest) = split_device_scope(&query.path);
            (id.map(str::to_string), rest.to_string())
        }
    };

    let nav = state.table.resolve(&path);
    let menu = state.table.menu(&path, device.as_deref());

    tracing::debug!(
        path = %path,
        device = ?device,
        section = %nav.section,
        item = ?nav.item,
        "Resolved navigation"
    );
    metrics::record_resolution(state.table.name(), &nav.section);

    Json(NavResponse { nav, device, menu })
}

pub async fn list_sections(State(state): State<AppState>) -> Json<Vec<Section>> {
    Json(state.table.sections().to_vec())
}
