//! Minimal HTTP service with a health check and a two-number addition
//! endpoint.
//!
//! ```text
//! GET /health          -> 200 {"status":"healthy"}
//! GET /add?a=5&b=10    -> 200 {"inputs":{"a":5.0,"b":10.0},"result":{"sum":15.0}}
//! GET /add?a=5         -> 400 {"error":"Missing required query parameters: 'a' and 'b'"}
//! GET /add?a=five&b=10 -> 400 {"error":"Invalid number format. 'a' and 'b' must be numbers."}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`calculator`]: Operand validation and addition
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus counters and latency timers
//! - [`utils`]: Utility functions

pub mod api;
pub mod calculator;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AddError, Result, ServiceError};
