//! Bookstore - checkout backend for an online bookstore
//!
//! Cart totals, discount codes and payment validation over HTTP, with an
//! LFU cache memoizing discount results.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod payment;
pub mod pricing;

pub use api::AppState;
pub use config::Config;
pub use error::{ApiError, Result};
