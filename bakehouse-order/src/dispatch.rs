use crate::book::{OrderBook, OrderError};
use crate::models::OrderStatus;
use bakehouse_core::{AdminAccess, PickupNotifier};
use bakehouse_shared::models::events::OrderStatusChangedEvent;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Applies staff status updates and dispatches the pickup notification.
///
/// Status updates are staff-only, so the caller is checked against the
/// admin roster first. Notification is fire-and-forget: once the book
/// has recorded the update, a notifier failure is logged and swallowed.
/// The returned event is the audit payload for downstream consumers.
pub struct StatusUpdateService {
    notifier: Arc<dyn PickupNotifier>,
    admin_access: Arc<dyn AdminAccess>,
}

impl StatusUpdateService {
    pub fn new(notifier: Arc<dyn PickupNotifier>, admin_access: Arc<dyn AdminAccess>) -> Self {
        Self {
            notifier,
            admin_access,
        }
    }

    pub async fn apply_status_update(
        &self,
        book: &mut OrderBook,
        caller_id: &str,
        order_id: Uuid,
        status: OrderStatus,
        comment: String,
        is_internal: bool,
        now: DateTime<Utc>,
    ) -> Result<OrderStatusChangedEvent, OrderError> {
        let is_admin = self
            .admin_access
            .is_admin(caller_id)
            .await
            .map_err(|e| OrderError::AdminCheckFailed(e.to_string()))?;
        if !is_admin {
            return Err(OrderError::NotAuthorized(caller_id.to_string()));
        }

        book.record_status_update(&order_id, status.clone(), comment, is_internal, now)?;

        if status == OrderStatus::ReadyForPickup {
            // The update above guarantees the order exists
            let email = book
                .get_order(&order_id)
                .map(|o| o.customer_email.0.clone())
                .unwrap_or_default();

            if let Err(e) = self.notifier.notify_pickup_ready(order_id, &email).await {
                tracing::warn!(
                    "Order {} updated but pickup notification failed: {}",
                    order_id,
                    e
                );
            }
        }

        Ok(OrderStatusChangedEvent {
            order_id,
            status: status.to_string(),
            is_internal,
            timestamp: now.timestamp(),
        })
    }
}
