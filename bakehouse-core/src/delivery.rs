use crate::config::{DeliveryPolicies, NoticePolicy, ProductCategory};
use chrono::{DateTime, Duration, Utc};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Answers whether a requested delivery date is acceptable for a
/// category, and whether it falls inside the rush window.
///
/// Every check takes the reference "now" as a parameter, so callers and
/// tests control the clock.
pub struct DeliveryEligibilityChecker {
    policies: DeliveryPolicies,
}

impl DeliveryEligibilityChecker {
    pub fn new(policies: DeliveryPolicies) -> Self {
        Self { policies }
    }

    /// Whole days of notice between ordering and delivery.
    ///
    /// Any sub-day remainder counts as a full day, so a date N calendar
    /// days ahead never under-counts because "now" has a time of day.
    /// Negative when the requested date is already past.
    pub fn days_of_notice(&self, reference: DateTime<Utc>, requested: DateTime<Utc>) -> i64 {
        let ms = (requested - reference).num_milliseconds();
        let whole = ms.div_euclid(DAY_MS);

        if ms.rem_euclid(DAY_MS) != 0 {
            whole + 1
        } else {
            whole
        }
    }

    /// Earliest delivery date the category accepts
    pub fn minimum_delivery_date(
        &self,
        category: ProductCategory,
        reference: DateTime<Utc>,
    ) -> DateTime<Utc> {
        reference + Duration::days(self.policy(category).minimum_notice_days)
    }

    /// Does this delivery fall inside the category's rush window?
    pub fn is_rush_order(
        &self,
        category: ProductCategory,
        requested: DateTime<Utc>,
        reference: DateTime<Utc>,
    ) -> bool {
        self.days_of_notice(reference, requested) < self.policy(category).rush_threshold_days
    }

    /// Does this delivery give the category enough notice?
    /// Past dates are a normal `false`, never an error.
    pub fn is_valid_delivery_date(
        &self,
        category: ProductCategory,
        requested: DateTime<Utc>,
        reference: DateTime<Utc>,
    ) -> bool {
        self.days_of_notice(reference, requested) >= self.policy(category).minimum_notice_days
    }

    fn policy(&self, category: ProductCategory) -> NoticePolicy {
        match self.policies.policies.get(&category) {
            Some(policy) => *policy,
            None => {
                tracing::warn!(
                    "No notice policy configured for category {}, using default",
                    category
                );
                self.policies.default_policy
            }
        }
    }
}

impl Default for DeliveryEligibilityChecker {
    fn default() -> Self {
        Self::new(DeliveryPolicies::default())
    }
}
