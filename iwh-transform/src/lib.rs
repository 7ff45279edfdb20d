//! Normalization and entity-resolution stage for the internship warehouse.

// Re-export the main modules needed for integration tests
pub mod app;
pub mod infra;
pub mod observability;
pub mod pipeline;

// Re-export commonly used types
pub use iwh_core::domain::WarehouseSnapshot;
