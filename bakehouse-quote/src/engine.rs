use crate::models::{Quote, QuoteRequest};
use bakehouse_core::{
    ConfigurationError, DeliveryEligibilityChecker, PriceCalculator, PricingModifiers,
};
use uuid::Uuid;

/// Turns an order-form state into a priced, delivery-checked quote.
///
/// The rush surcharge is never a caller-supplied flag: it is derived
/// from the requested delivery date, so every consumer of a quote gets
/// the same answer for the same inputs.
pub struct QuoteEngine {
    calculator: PriceCalculator,
    checker: DeliveryEligibilityChecker,
}

impl QuoteEngine {
    pub fn new(calculator: PriceCalculator, checker: DeliveryEligibilityChecker) -> Self {
        Self { calculator, checker }
    }

    pub fn quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
        let is_rush = self.checker.is_rush_order(
            request.category,
            request.requested_delivery,
            request.reference,
        );
        let is_valid_delivery = self.checker.is_valid_delivery_date(
            request.category,
            request.requested_delivery,
            request.reference,
        );

        let modifiers = PricingModifiers {
            custom_design: request.custom_design,
            multiple_flavors: request.multiple_flavors,
            rush_order: is_rush,
        };
        let breakdown = self.calculator.price_breakdown(request.size, &modifiers)?;

        tracing::debug!(
            "Quoted {} {} cake at {} (rush: {}, valid delivery: {})",
            request.category,
            request.size,
            breakdown.total,
            is_rush,
            is_valid_delivery
        );

        Ok(Quote {
            id: Uuid::new_v4(),
            size: request.size,
            category: request.category,
            unit_price: breakdown.total,
            breakdown,
            is_rush,
            is_valid_delivery,
            minimum_delivery_date: self
                .checker
                .minimum_delivery_date(request.category, request.reference),
            quoted_at: request.reference,
        })
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(PriceCalculator::default(), DeliveryEligibilityChecker::default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Pricing configuration problem: {0}")]
    Configuration(#[from] ConfigurationError),
}
