use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Cake sizes the bakery offers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CakeSize {
    #[serde(rename = "6-inch")]
    SixInch,
    #[serde(rename = "8-inch")]
    EightInch,
    #[serde(rename = "10-inch")]
    TenInch,
}

impl CakeSize {
    /// All sizes, smallest first
    pub const ALL: [CakeSize; 3] = [CakeSize::SixInch, CakeSize::EightInch, CakeSize::TenInch];
}

impl fmt::Display for CakeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CakeSize::SixInch => "6-inch",
            CakeSize::EightInch => "8-inch",
            CakeSize::TenInch => "10-inch",
        };
        write!(f, "{}", s)
    }
}

/// Occasion a cake is ordered for; drives the delivery notice policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Birthday,
    Anniversary,
    Wedding,
    BabyShower,
    Custom,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProductCategory::Birthday => "birthday",
            ProductCategory::Anniversary => "anniversary",
            ProductCategory::Wedding => "wedding",
            ProductCategory::BabyShower => "baby-shower",
            ProductCategory::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("No base price configured for size: {0}")]
    MissingBasePrice(CakeSize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Base price per size, in pounds
    pub base_prices: HashMap<CakeSize, f64>,

    /// Surcharge rates applied on top of the base price
    #[serde(default)]
    pub surcharges: SurchargeRates,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_prices: {
                let mut m = HashMap::new();
                m.insert(CakeSize::SixInch, 75.0);
                m.insert(CakeSize::EightInch, 120.0);
                m.insert(CakeSize::TenInch, 180.0);
                m
            },
            surcharges: SurchargeRates::default(),
        }
    }
}

impl PricingConfig {
    /// Sanity-check loaded values; returns the issues found (also logged)
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (size, price) in &self.base_prices {
            if *price < 0.0 {
                issues.push(format!("negative base price for {}: {}", size, price));
            }
        }
        for (name, rate) in [
            ("custom_design", self.surcharges.custom_design),
            ("multiple_flavors", self.surcharges.multiple_flavors),
            ("rush_order", self.surcharges.rush_order),
        ] {
            if rate < 0.0 {
                issues.push(format!("negative surcharge rate for {}: {}", name, rate));
            }
        }

        for issue in &issues {
            tracing::warn!("Pricing config issue: {}", issue);
        }
        issues
    }
}

/// Fractional surcharge rates (0.25 = +25%)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurchargeRates {
    #[serde(default = "default_custom_design")]
    pub custom_design: f64,

    #[serde(default = "default_multiple_flavors")]
    pub multiple_flavors: f64,

    #[serde(default = "default_rush_order")]
    pub rush_order: f64,
}

fn default_custom_design() -> f64 { 0.25 }
fn default_multiple_flavors() -> f64 { 0.25 }
fn default_rush_order() -> f64 { 0.30 }

impl Default for SurchargeRates {
    fn default() -> Self {
        Self {
            custom_design: default_custom_design(),
            multiple_flavors: default_multiple_flavors(),
            rush_order: default_rush_order(),
        }
    }
}

/// Notice windows for one category, in whole days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoticePolicy {
    /// Earliest acceptable delivery is this many days after ordering
    pub minimum_notice_days: i64,

    /// Deliveries closer than this count as rush orders
    pub rush_threshold_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryPolicies {
    /// Per-category notice windows
    pub policies: HashMap<ProductCategory, NoticePolicy>,

    /// Applied when a category has no entry in `policies`
    pub default_policy: NoticePolicy,
}

impl Default for DeliveryPolicies {
    fn default() -> Self {
        Self {
            policies: {
                let mut m = HashMap::new();
                m.insert(
                    ProductCategory::Birthday,
                    NoticePolicy { minimum_notice_days: 5, rush_threshold_days: 14 },
                );
                m.insert(
                    ProductCategory::Anniversary,
                    NoticePolicy { minimum_notice_days: 5, rush_threshold_days: 14 },
                );
                m.insert(
                    ProductCategory::Wedding,
                    NoticePolicy { minimum_notice_days: 14, rush_threshold_days: 28 },
                );
                m.insert(
                    ProductCategory::BabyShower,
                    NoticePolicy { minimum_notice_days: 3, rush_threshold_days: 10 },
                );
                m.insert(
                    ProductCategory::Custom,
                    NoticePolicy { minimum_notice_days: 7, rush_threshold_days: 21 },
                );
                m
            },
            // The storefront's published floor: 48 hours notice, rush fee
            // within 5 days
            default_policy: NoticePolicy { minimum_notice_days: 2, rush_threshold_days: 5 },
        }
    }
}

impl DeliveryPolicies {
    /// Sanity-check loaded values; returns the issues found (also logged).
    /// A rush threshold below the minimum notice is computable but means
    /// some valid dates can never be rush, which is usually a typo.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (category, policy) in &self.policies {
            if policy.rush_threshold_days < policy.minimum_notice_days {
                issues.push(format!(
                    "rush threshold ({}) below minimum notice ({}) for {}",
                    policy.rush_threshold_days, policy.minimum_notice_days, category
                ));
            }
            if policy.minimum_notice_days < 0 || policy.rush_threshold_days < 0 {
                issues.push(format!("negative notice window for {}", category));
            }
        }
        if self.default_policy.rush_threshold_days < self.default_policy.minimum_notice_days {
            issues.push("rush threshold below minimum notice for default policy".to_string());
        }

        for issue in &issues {
            tracing::warn!("Delivery policy issue: {}", issue);
        }
        issues
    }
}
