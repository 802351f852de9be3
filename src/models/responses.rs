//! Response DTOs for the bookstore API
//!
//! Defines the structure of outgoing HTTP response bodies. Money values are
//! serialized as JSON numbers.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for POST /api/calculate-total
#[derive(Debug, Clone, Serialize)]
pub struct CalculateTotalResponse {
    pub success: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub metrics: CalculationMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationMetrics {
    pub cache_hit_ratio: f64,
    /// Number of submitted lines, valid or not
    pub items_processed: usize,
}

impl CalculateTotalResponse {
    pub fn new(total: Decimal, items_processed: usize, cache_hit_ratio: f64) -> Self {
        Self {
            success: true,
            total,
            metrics: CalculationMetrics {
                cache_hit_ratio,
                items_processed,
            },
        }
    }
}

/// Response body for POST /api/apply-discount
#[derive(Debug, Clone, Serialize)]
pub struct ApplyDiscountResponse {
    pub success: bool,
    /// Subtotal echoed exactly as submitted
    pub original_total: Value,
    #[serde(with = "rust_decimal::serde::float")]
    pub discounted_total: Decimal,
    pub discount_applied: bool,
    pub metrics: DiscountMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscountMetrics {
    pub cache_hit_ratio: f64,
    pub discount_code: String,
}

impl ApplyDiscountResponse {
    pub fn new(
        original_total: Value,
        discounted_total: Decimal,
        discount_applied: bool,
        discount_code: impl Into<String>,
        cache_hit_ratio: f64,
    ) -> Self {
        Self {
            success: true,
            original_total,
            discounted_total,
            discount_applied,
            metrics: DiscountMetrics {
                cache_hit_ratio,
                discount_code: discount_code.into(),
            },
        }
    }
}

/// Response body for GET /research/metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub cache_performance: CachePerformance,
}

#[derive(Debug, Clone, Serialize)]
pub struct CachePerformance {
    pub hit_ratio: f64,
    pub total_hits: u64,
    pub total_misses: u64,
    pub current_size: usize,
    pub evictions: u64,
    pub max_size: usize,
}

impl From<&CacheStats> for MetricsResponse {
    fn from(stats: &CacheStats) -> Self {
        Self {
            cache_performance: CachePerformance {
                hit_ratio: stats.hit_ratio(),
                total_hits: stats.hits,
                total_misses: stats.misses,
                current_size: stats.total_entries,
                evictions: stats.evictions,
                max_size: stats.max_entries,
            },
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
