use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

/// Outbound customer notification when an order is ready to collect.
///
/// Dispatch is fire-and-forget: callers log a failure and carry on, the
/// order update must never roll back because an email bounced.
#[async_trait]
pub trait PickupNotifier: Send + Sync {
    async fn notify_pickup_ready(
        &self,
        order_id: Uuid,
        customer_email: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Recording notifier for tests and local runs
pub struct MockPickupNotifier {
    sent: Mutex<Vec<Uuid>>,
    fail: bool,
}

impl MockPickupNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A notifier whose every send fails, for exercising the
    /// warn-and-continue path
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Order ids that have been notified so far
    pub fn sent_orders(&self) -> Vec<Uuid> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockPickupNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PickupNotifier for MockPickupNotifier {
    async fn notify_pickup_ready(
        &self,
        order_id: Uuid,
        _customer_email: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail {
            return Err("simulated notifier outage".into());
        }

        tracing::info!("Pickup notification recorded for order {}", order_id);
        self.sent.lock().unwrap().push(order_id);
        Ok(())
    }
}
