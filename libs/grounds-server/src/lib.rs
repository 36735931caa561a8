//! # Grounds Server
//!
//! Optional web facade over the part generators: a form-driven parameter
//! editor with a 3D preview, backed by a small JSON API.
//!
//! ## Endpoints
//!
//! ```text
//! GET    /                         form + viewer
//! GET    /healthz                  liveness probe
//! POST   /api/generate             parameters → session of STL files
//! GET    /api/files/:id/:file      serve one artifact for preview
//! GET    /api/download/:id         ZIP of the session's files
//! DELETE /api/cleanup/:id          remove the session directory
//! ```
//!
//! Every generation runs in its own UUID-named directory under the output
//! root, so concurrent requests never write to the same location.

pub mod error;
pub mod routes;
pub mod session;

pub use error::ApiError;
pub use routes::{router, serve, AppState, GenerateRequest, GenerateResponse};
