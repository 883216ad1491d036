//! PeerConnect Server - HTTP REST API for profiles and matching
//!
//! This crate exposes the PeerConnect store and matching engine over HTTP:
//!
//! - **Profiles**: create, list, fetch, patch and delete users
//! - **Matching**: mutual-relevance match sets and score-ranked
//!   recommendations for a user
//! - **Health**: liveness/readiness checks and server metadata
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness check
//! - `GET /ready` - Readiness check
//! - `GET /metadata` - Server metadata
//! - `POST /users` - Create user
//! - `GET /users?skip=&limit=` - List users
//! - `GET /users/{id}` - Get user
//! - `PATCH /users/{id}` - Partially update user
//! - `DELETE /users/{id}` - Delete user
//! - `GET /users/match/{id}` - Users matching `id`
//! - `GET /users/recommend/{id}` - Ranked recommendations for `id`
//! - `GET /users/{id}/match/{candidate_id}` - Pairwise match check
//!
//! Errors are returned as `{"error": {"code": "...", "message": "..."}}`.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
