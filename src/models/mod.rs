//! Request and Response models for the bookstore API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    parse_decimal, parse_quantity, ApplyDiscountRequest, CalculateTotalRequest, CartItemPayload,
    ValidatePaymentRequest,
};
pub use responses::{
    ApplyDiscountResponse, CachePerformance, CalculateTotalResponse, CalculationMetrics,
    DiscountMetrics, ErrorResponse, HealthResponse, MetricsResponse,
};
