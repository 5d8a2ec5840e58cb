pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;

// Data shapes shared across layers
pub mod domain;

pub mod observability;
