//! # HTTP Routes
//!
//! The facade is a plain request → generate → serve-files flow: validate
//! the payload, run the generators into a fresh session directory, then
//! hand out the files. No queueing, no backpressure; the request blocks
//! until the kernel finishes, which suits a human-paced hobby tool.

use crate::error::ApiError;
use crate::session::{checked_filename, session_dir, session_files};
use axum::extract::{Path as UrlPath, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use grounds_io::{write_mesh, OutputFormat};
use grounds_parts::{Dimensions, PartKind, ScraperSize, SpoutPosition};
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Parts generated for a web session, in response-file order.
const WEB_PARTS: [PartKind; 4] = [
    PartKind::Box,
    PartKind::Lid,
    PartKind::Spout,
    PartKind::StorageScraper,
];

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    /// Root directory holding the per-session output directories
    pub output_root: Arc<PathBuf>,
}

impl AppState {
    /// Creates state rooted at the given output directory.
    pub fn new(output_root: PathBuf) -> Self {
        Self {
            output_root: Arc::new(output_root),
        }
    }
}

/// The web form payload. Missing fields fall back to the shipped design.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    pub box_length: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub wall_thickness: f64,
    pub thread_diameter: f64,
    pub scraper_size: ScraperSize,
    pub spout_position: SpoutPosition,
    /// Viewer color for the box, echoed back
    pub box_color: String,
    /// Viewer color for the lid, echoed back
    pub lid_color: String,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        let dims = Dimensions::default();
        Self {
            box_length: dims.box_length,
            box_width: dims.box_width,
            box_height: dims.box_height,
            wall_thickness: dims.wall_thickness,
            thread_diameter: dims.thread_major_diameter,
            scraper_size: ScraperSize::default(),
            spout_position: SpoutPosition::default(),
            box_color: "#6f4e37".to_string(),
            lid_color: "#2f2f2f".to_string(),
        }
    }
}

impl GenerateRequest {
    /// Maps the payload onto a dimension set.
    fn to_dimensions(&self) -> Dimensions {
        let defaults = Dimensions::default();
        // Thicker walls need a longer thread to keep full boss engagement
        let thread_length_box = defaults
            .thread_length_box
            .max(self.wall_thickness + defaults.boss_length + 1.0);
        Dimensions {
            box_length: self.box_length,
            box_width: self.box_width,
            box_height: self.box_height,
            wall_thickness: self.wall_thickness,
            thread_major_diameter: self.thread_diameter,
            thread_length_box,
            spout_position: self.spout_position,
            scraper_scale: self.scraper_size.scale(),
            ..defaults
        }
    }

    /// Colors only reach the viewer, but a malformed one is still a bad
    /// request.
    fn validate_colors(&self) -> Result<(), ApiError> {
        for (name, value) in [("boxColor", &self.box_color), ("lidColor", &self.lid_color)] {
            let hex = value.strip_prefix('#').unwrap_or("");
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ApiError::Validation(format!(
                    "{name} must be a #rrggbb color, got '{value}'"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub session_id: String,
    pub files: Vec<String>,
    pub box_color: String,
    pub lid_color: String,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/generate", post(generate))
        .route("/api/files/:session/:file", get(serve_file))
        .route("/api/download/:session", get(download))
        .route("/api/cleanup/:session", delete(cleanup))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds and runs the facade until the process exits.
pub async fn serve(addr: SocketAddr, output_root: PathBuf) -> std::io::Result<()> {
    std::fs::create_dir_all(&output_root)?;
    let app = router(AppState::new(output_root));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "web facade listening");
    axum::serve(listener, app).await
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    request.validate_colors()?;
    let dims = request.to_dimensions();
    // Reject before any generator runs
    dims.validate()?;

    let session_id = Uuid::new_v4();
    let dir = state.output_root.join(session_id.to_string());

    let worker_dir = dir.clone();
    let files = tokio::task::spawn_blocking(move || generate_session(&dims, &worker_dir))
        .await
        .map_err(|e| ApiError::Generation(e.to_string()))??;

    tracing::info!(%session_id, files = files.len(), "session generated");

    Ok(Json(GenerateResponse {
        success: true,
        session_id: session_id.to_string(),
        files,
        box_color: request.box_color,
        lid_color: request.lid_color,
    }))
}

/// Runs the web part set into the session directory, STL only.
fn generate_session(dims: &Dimensions, dir: &Path) -> Result<Vec<String>, ApiError> {
    let mut files = Vec::new();
    for part in WEB_PARTS {
        for solid in part.generate(dims)? {
            write_mesh(&solid.mesh, dir, &solid.name, &[OutputFormat::Stl])?;
            files.push(format!("{}.stl", solid.name));
        }
    }
    Ok(files)
}

async fn serve_file(
    State(state): State<AppState>,
    UrlPath((session, file)): UrlPath<(String, String)>,
) -> Result<Response, ApiError> {
    let dir = session_dir(&state.output_root, &session)?;
    let name = checked_filename(&file)?;

    let bytes = tokio::fs::read(dir.join(name))
        .await
        .map_err(|_| ApiError::NotFound(format!("no file '{name}' in session")))?;

    Ok(([(header::CONTENT_TYPE, "model/stl")], bytes).into_response())
}

async fn download(
    State(state): State<AppState>,
    UrlPath(session): UrlPath<String>,
) -> Result<Response, ApiError> {
    let dir = session_dir(&state.output_root, &session)?;
    let files = session_files(&dir)?;
    if files.is_empty() {
        return Err(ApiError::NotFound("session has no files".into()));
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for path in files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        writer.start_file(name, options)?;
        writer.write_all(&std::fs::read(&path)?)?;
    }

    let bytes = writer.finish()?.into_inner();
    let short_id = &session[..8.min(session.len())];
    let disposition = format!("attachment; filename=\"coffee_container_{short_id}.zip\"");

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

async fn cleanup(
    State(state): State<AppState>,
    UrlPath(session): UrlPath<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let dir = session_dir(&state.output_root, &session)?;
    if dir.is_dir() {
        tokio::fs::remove_dir_all(&dir).await?;
        tracing::info!(%session, "session removed");
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
