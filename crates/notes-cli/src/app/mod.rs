//! Application-level utilities for the notes CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for config and store files
//! - Password handling with retry logic

mod context;
mod password;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::missing_store_message;
