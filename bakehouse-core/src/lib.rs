pub mod config;
pub mod delivery;
pub mod identity;
pub mod notify;
pub mod pricing;

pub use config::{
    CakeSize, ConfigurationError, DeliveryPolicies, NoticePolicy, PricingConfig, ProductCategory,
    SurchargeRates,
};
pub use delivery::DeliveryEligibilityChecker;
pub use identity::{AdminAccess, MockAdminAccess};
pub use notify::{MockPickupNotifier, PickupNotifier};
pub use pricing::{PriceBreakdown, PriceCalculator, PricingModifiers, SurchargeKind};
