//! src/lib.rs
pub mod configuration;
pub mod domain;
pub mod error;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod store;
pub mod telemetry;
pub mod utils;
