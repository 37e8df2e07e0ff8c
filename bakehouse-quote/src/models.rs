use bakehouse_core::{CakeSize, PriceBreakdown, ProductCategory};
use bakehouse_shared::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything the order form knows when it asks for a quote.
///
/// `reference` is the clock: callers pass their "now" so quoting is
/// deterministic and testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub size: CakeSize,
    pub category: ProductCategory,
    #[serde(default)]
    pub custom_design: bool,
    #[serde(default)]
    pub multiple_flavors: bool,
    pub requested_delivery: DateTime<Utc>,
    pub reference: DateTime<Utc>,
}

/// Everything the order form needs to render back.
///
/// An invalid delivery date still yields a quote; `is_valid_delivery`
/// tells the form to block submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub size: CakeSize,
    pub category: ProductCategory,
    pub unit_price: Money,
    pub breakdown: PriceBreakdown,
    pub is_rush: bool,
    pub is_valid_delivery: bool,
    pub minimum_delivery_date: DateTime<Utc>,
    pub quoted_at: DateTime<Utc>,
}
