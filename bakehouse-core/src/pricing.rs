use crate::config::{CakeSize, ConfigurationError, PricingConfig};
use bakehouse_shared::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Modifier flags for a priced cake. All default to off.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PricingModifiers {
    /// Customer-supplied design work
    pub custom_design: bool,

    /// More than one flavor in the same cake
    pub multiple_flavors: bool,

    /// Delivery inside the category's rush window
    pub rush_order: bool,
}

/// The surcharges a price can carry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeKind {
    CustomDesign,
    MultipleFlavors,
    RushOrder,
}

impl fmt::Display for SurchargeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SurchargeKind::CustomDesign => "custom design",
            SurchargeKind::MultipleFlavors => "multiple flavors",
            SurchargeKind::RushOrder => "rush order",
        };
        write!(f, "{}", s)
    }
}

/// One applied surcharge within a breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurchargeLine {
    pub kind: SurchargeKind,
    pub rate: f64,
    pub amount: Money,
}

/// Itemized price: base, one line per active surcharge, final total.
/// Line amounts are taken between rounded running totals, so
/// base + lines always equals total exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub size: CakeSize,
    pub base: Money,
    pub lines: Vec<SurchargeLine>,
    pub total: Money,
}

/// Cake price calculator
pub struct PriceCalculator {
    config: PricingConfig,
}

impl PriceCalculator {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Base price for a size, before any surcharges
    pub fn base_price(&self, size: CakeSize) -> Result<Money, ConfigurationError> {
        self.base_pounds(size).map(Money::from_pounds)
    }

    /// Final price for a size with the given modifiers applied
    pub fn calculate_price(
        &self,
        size: CakeSize,
        modifiers: &PricingModifiers,
    ) -> Result<Money, ConfigurationError> {
        let mut price = self.base_pounds(size)?;

        for (_, rate) in self.active_surcharges(modifiers) {
            price *= 1.0 + rate;
        }

        Ok(Money::from_pounds(price))
    }

    /// Itemized version of `calculate_price`
    pub fn price_breakdown(
        &self,
        size: CakeSize,
        modifiers: &PricingModifiers,
    ) -> Result<PriceBreakdown, ConfigurationError> {
        let base_pounds = self.base_pounds(size)?;
        let base = Money::from_pounds(base_pounds);

        let mut running = base_pounds;
        let mut rounded = base;
        let mut lines = Vec::new();

        for (kind, rate) in self.active_surcharges(modifiers) {
            running *= 1.0 + rate;
            let next = Money::from_pounds(running);
            lines.push(SurchargeLine {
                kind,
                rate,
                amount: next - rounded,
            });
            rounded = next;
        }

        Ok(PriceBreakdown {
            size,
            base,
            lines,
            total: rounded,
        })
    }

    fn base_pounds(&self, size: CakeSize) -> Result<f64, ConfigurationError> {
        self.config
            .base_prices
            .get(&size)
            .copied()
            .ok_or(ConfigurationError::MissingBasePrice(size))
    }

    /// Active surcharges in their fixed application order:
    /// custom design, then multiple flavors, then rush
    fn active_surcharges(&self, modifiers: &PricingModifiers) -> Vec<(SurchargeKind, f64)> {
        let rates = &self.config.surcharges;
        let mut active = Vec::new();

        if modifiers.custom_design {
            active.push((SurchargeKind::CustomDesign, rates.custom_design));
        }
        if modifiers.multiple_flavors {
            active.push((SurchargeKind::MultipleFlavors, rates.multiple_flavors));
        }
        if modifiers.rush_order {
            active.push((SurchargeKind::RushOrder, rates.rush_order));
        }

        active
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
