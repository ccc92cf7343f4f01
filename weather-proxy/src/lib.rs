//! HTTP surface of the `weather-proxy` service.
//!
//! The binary in `main.rs` adds argument parsing and logging on top.

pub mod http;

pub use http::{router, serve};
