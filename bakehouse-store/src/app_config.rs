use bakehouse_core::{DeliveryPolicies, PricingConfig};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub pricing: PricingConfig,
    pub delivery: DeliveryPolicies,
}

impl Config {
    /// Load from the `config/` directory next to the process
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load from an explicit config directory (tests point this at the
    /// repository's own `config/`)
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(
                config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false),
            )
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Add in settings from the environment (with a prefix of BAKEHOUSE)
            // Eg.. `BAKEHOUSE__PRICING__SURCHARGES__RUSH_ORDER=0.4` would set the rush rate
            .add_source(config::Environment::with_prefix("BAKEHOUSE").separator("__"))
            .build()?;

        let loaded: Config = s.try_deserialize()?;

        // Lint the tables so typos show up at startup, not at checkout
        loaded.pricing.validate();
        loaded.delivery.validate();
        tracing::info!(
            "Loaded storefront config: {} sizes priced, {} delivery policies",
            loaded.pricing.base_prices.len(),
            loaded.delivery.policies.len()
        );

        Ok(loaded)
    }
}
