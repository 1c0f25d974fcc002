//! Fixed client-facing messages for transport-level failures.
//!
//! These strings are part of the wire contract: clients and integration
//! tests match on them verbatim, so changing one is a breaking change.

pub const INVALID_ID: &str = "Invalid id! Id must be a valid uuid";
pub const INVALID_JSON: &str = "Invalid JSON! can't parse incoming model please check the input";
pub const INVALID_LIMIT: &str = "Invalid limit! Limit value must be greater than zero";
pub const INVALID_OFFSET: &str = "Invalid offset! Offset value must be greater than zero";
pub const METHOD_NOT_ALLOWED: &str =
    "Method not allowed. please use appropriate method for this operation";
pub const NOT_FOUND: &str = "Not found!";
pub const UNHEALTHY: &str = "Server is not available";
