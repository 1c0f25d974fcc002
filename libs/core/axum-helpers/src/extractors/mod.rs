//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across your API.

pub mod json_input;
pub mod uuid_path;

pub use json_input::JsonInput;
pub use uuid_path::UuidPath;
