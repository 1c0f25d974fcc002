//! Server infrastructure module.
//!
//! This module provides:
//! - Serving a configured router with graceful shutdown
//! - Shutdown signal handling (SIGINT/SIGTERM)
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::create_app;
//! use core_config::server::ServerConfig;
//!
//! // Start server with graceful shutdown
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::create_app;
pub use shutdown::shutdown_signal;
