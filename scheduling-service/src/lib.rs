//! Library target exposing the service's modules for integration testing.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
