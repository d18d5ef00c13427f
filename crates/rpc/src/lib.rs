//! HTTP API for the Mergington activity registry.

pub mod activities;
pub mod server;

pub use server::{build_router, start_server, ApiError, AppState, SharedState};
