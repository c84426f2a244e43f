//! Platform adapters

pub mod http;

pub use http::{build_router, serve};
