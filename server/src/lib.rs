use axum::extract::{Multipart, Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use textdex_core::{Document, DocumentInput, Engine, SearchOptions};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
mod html;

pub use error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub options: SearchOptions,
    /// Clear the inverted index before ingesting each uploaded corpus.
    pub reset_per_upload: bool,
    pub admin_token: Option<String>,
}

impl ServerConfig {
    /// Build a config, taking the admin token from `ADMIN_TOKEN`.
    pub fn from_env(options: SearchOptions, reset_per_upload: bool) -> Self {
        Self { options, reset_per_upload, admin_token: std::env::var("ADMIN_TOKEN").ok() }
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<Engine>>,
    pub reset_per_upload: bool,
    pub admin_token: Option<String>,
}

pub fn build_app(config: ServerConfig) -> Router {
    let state = AppState {
        engine: Arc::new(RwLock::new(Engine::new(config.options))),
        reset_per_upload: config.reset_per_upload,
        admin_token: config.admin_token,
    };

    Router::new()
        .route("/", get(|| async { Html(html::UPLOAD_FORM) }))
        .route("/health", get(|| async { "ok" }))
        .route("/success", post(upload_handler))
        .route("/search", get(search_handler))
        .route("/lookup", get(lookup_handler))
        .route("/documents", post(add_document))
        .route("/documents/:id", get(get_document).delete(delete_document))
        .route("/index/clear", post(clear_index))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

// CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
fn cors_layer() -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                base.allow_origin(Any)
            } else {
                base.allow_origin(AllowOrigin::list(origins))
            }
        }
        Err(_) => base.allow_origin(Any),
    }
}

/// Multipart upload of a corpus (`file1`) plus a query (`searchterm`).
pub async fn upload_handler(State(state): State<AppState>, mut multipart: Multipart) -> Result<Html<String>, ApiError> {
    let mut corpus: Option<String> = None;
    let mut query: Option<String> = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| ApiError::BadRequest(e.to_string()))? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file1") => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| ApiError::BadRequest(e.to_string()))?;
                let text = String::from_utf8(bytes.to_vec())
                    .map_err(|_| ApiError::BadRequest("uploaded file is not valid UTF-8".into()))?;
                tracing::info!(filename = ?filename, bytes = text.len(), "received upload");
                corpus = Some(text);
            }
            Some("searchterm") => {
                query = Some(field.text().await.map_err(|e| ApiError::BadRequest(e.to_string()))?);
            }
            _ => {}
        }
    }
    let corpus = corpus.ok_or_else(|| ApiError::BadRequest("missing file1".into()))?;
    let query = query.ok_or_else(|| ApiError::BadRequest("missing searchterm".into()))?;

    let results = {
        let mut engine = state.engine.write();
        if state.reset_per_upload {
            engine.clear_index();
        }
        engine.ingest_corpus(&corpus)?;
        engine.search(&query)
    };
    Ok(Html(html::render_results(&query, &results)))
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let engine = state.engine.read();
    let matched = engine.lookup_query(&params.q);
    let total_hits = matched.total_appearances();
    let results = engine.format_results(&matched);
    let elapsed = start.elapsed();
    Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), total_hits, results })
}

pub async fn lookup_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Result<Json<serde_json::Value>, ApiError> {
    let engine = state.engine.read();
    let value = serde_json::to_value(engine.lookup_query(&params.q)).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(value))
}

pub async fn add_document(State(state): State<AppState>, Json(input): Json<DocumentInput>) -> Result<Json<Document>, ApiError> {
    let mut engine = state.engine.write();
    let stored = engine.index_input(input)?;
    Ok(Json(stored.clone()))
}

pub async fn get_document(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Document>, ApiError> {
    let engine = state.engine.read();
    let doc = engine.store().require(&id)?;
    Ok(Json(doc.clone()))
}

pub async fn delete_document(State(state): State<AppState>, headers: HeaderMap, Path(id): Path<String>) -> Result<Json<Document>, ApiError> {
    authorize(&state, &headers)?;
    state
        .engine
        .write()
        .remove_document(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("document not found: {id}")))
}

pub async fn clear_index(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<serde_json::Value>, ApiError> {
    authorize(&state, &headers)?;
    state.engine.write().clear_index();
    tracing::info!("index cleared");
    Ok(Json(serde_json::json!({ "cleared": true })))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let required = match &state.admin_token {
        Some(t) => t,
        None => return Err(ApiError::Unauthorized("ADMIN_TOKEN not set".into())),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err(ApiError::Unauthorized("invalid admin token".into()))
    }
}
