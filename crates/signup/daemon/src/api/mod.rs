//! API layer for signup-daemon

pub mod rest;

pub use rest::router::create_router;
