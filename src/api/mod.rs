//! API Module
//!
//! HTTP handlers and routing for the bookstore REST API.
//!
//! # Endpoints
//! - `POST /api/calculate-total` - Cart total
//! - `POST /api/apply-discount` - Apply a discount code
//! - `POST /api/validate-payment` - Validate a payment submission
//! - `GET /research/metrics` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;
pub mod timing;

pub use handlers::*;
pub use routes::create_router;
pub use timing::track_performance;
