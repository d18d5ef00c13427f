//! Activity roster store for Mergington High School
//!
//! This crate owns the registry of extracurricular activities, each with a
//! capacity limit and an ordered roster of participant emails. Signup and
//! unregister are the only state transitions; activities are never created
//! or removed after the registry has been seeded.

pub mod errors;
pub mod registry;
pub mod seed;
pub mod types;

pub use errors::*;
pub use registry::ActivityRegistry;
pub use seed::default_activities;
pub use types::*;
