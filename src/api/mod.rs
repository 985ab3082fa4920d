//! HTTP API module for the health and addition endpoints.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
