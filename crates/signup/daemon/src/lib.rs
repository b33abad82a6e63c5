//! Signup Daemon library
//!
//! This module provides the core components for the signup daemon:
//! - REST API handlers
//! - Configuration loading
//! - Server lifecycle management

#![deny(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use api::create_router;
pub use api::rest::state::AppState;
pub use config::DaemonConfig;
pub use error::{ApiError, ApiResult, DaemonError, DaemonResult};
pub use server::Server;
