//! # Axum Helpers
//!
//! A collection of utilities and helpers shared by Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes and the
//!   fixed client-facing messages for transport failures
//! - **[`extractors`]**: Custom extractors (UUID path, JSON body)
//! - **[`server`]**: Server startup and graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::errors::handlers::not_found;
//! use axum_helpers::server::create_app;
//! use core_config::server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = Router::new().fallback(not_found); // Add your routes
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

// Domain modules
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{JsonInput, UuidPath};

// Re-export server functions
pub use server::{create_app, shutdown_signal};
