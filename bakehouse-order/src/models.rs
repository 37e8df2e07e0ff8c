use bakehouse_shared::models::events::OrderPlacedEvent;
use bakehouse_shared::{Masked, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Workshop stages an order moves through, as persisted and shown to
/// staff on the orders dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Baking,
    Decorating,
    QualityCheck,
    Packaging,
    ReadyForPickup,
    Cancelled,
}

impl OrderStatus {
    /// Terminal statuses accept no further updates
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Baking => "baking",
            OrderStatus::Decorating => "decorating",
            OrderStatus::QualityCheck => "quality_check",
            OrderStatus::Packaging => "packaging",
            OrderStatus::ReadyForPickup => "ready_for_pickup",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

/// One append-only line in an order's audit trail.
/// Internal entries are staff notes the customer never sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub status: OrderStatus,
    pub comment: String,
    pub is_internal: bool,
    pub recorded_at: DateTime<Utc>,
}

/// An individual priced cake within an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub cake_id: Uuid,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(cake_id: Uuid, name: String, unit_price: Money, quantity: u32) -> Self {
        Self {
            cake_id,
            name,
            unit_price,
            quantity,
        }
    }

    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity as i64
    }
}

/// The single source of truth for a customer's purchase.
///
/// Totals are pure summation of already-priced lines; pricing happened
/// upstream when the lines were quoted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: String,
    pub customer_email: Masked<String>,
    pub lines: Vec<OrderLine>,
    pub total: Money,
    pub currency: String,
    pub status: OrderStatus,
    pub requested_delivery: Option<DateTime<Utc>>,
    pub history: Vec<StatusHistoryEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        customer_id: String,
        customer_email: String,
        lines: Vec<OrderLine>,
        requested_delivery: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        let total = lines.iter().map(|line| line.line_total()).sum();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            customer_email: Masked::new(customer_email),
            lines,
            total,
            currency: "GBP".to_string(),
            status: OrderStatus::Pending,
            requested_delivery,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a history entry, then move the order to the new status
    pub fn apply_status(
        &mut self,
        status: OrderStatus,
        comment: String,
        is_internal: bool,
        now: DateTime<Utc>,
    ) {
        self.history.push(StatusHistoryEntry {
            status: status.clone(),
            comment,
            is_internal,
            recorded_at: now,
        });
        self.status = status;
        self.updated_at = now;
    }

    /// Event payload announcing this order to downstream consumers
    pub fn placed_event(&self) -> OrderPlacedEvent {
        OrderPlacedEvent {
            order_id: self.id,
            customer_id: self.customer_id.clone(),
            total_pence: self.total.pence(),
            line_count: self.lines.len(),
            timestamp: self.created_at.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let order = Order::new(
            "customer-1".to_string(),
            "customer@example.com".to_string(),
            vec![
                OrderLine::new(Uuid::new_v4(), "Classic Chocolate".to_string(), Money::from_pence(7500), 2),
                OrderLine::new(Uuid::new_v4(), "Strawberry Delight".to_string(), Money::from_pence(12000), 1),
            ],
            None,
            now(),
        );

        assert_eq!(order.total, Money::from_pence(27000));
        assert_eq!(order.currency, "GBP");
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.history.is_empty());
    }

    #[test]
    fn test_apply_status_appends_history_first() {
        let mut order = Order::new(
            "customer-1".to_string(),
            "customer@example.com".to_string(),
            vec![OrderLine::new(Uuid::new_v4(), "Classic Chocolate".to_string(), Money::from_pence(7500), 1)],
            None,
            now(),
        );

        let later = now() + chrono::Duration::hours(2);
        order.apply_status(OrderStatus::Confirmed, "Deposit received".to_string(), false, later);

        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.updated_at, later);
        assert_eq!(order.history.len(), 1);
        assert_eq!(order.history[0].status, OrderStatus::Confirmed);
        assert!(!order.history[0].is_internal);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::QualityCheck).unwrap(),
            "\"quality_check\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::ReadyForPickup).unwrap(),
            "\"ready_for_pickup\""
        );
        assert_eq!(OrderStatus::ReadyForPickup.to_string(), "ready_for_pickup");
    }

    #[test]
    fn test_email_masked_in_debug_output() {
        let order = Order::new(
            "customer-1".to_string(),
            "customer@example.com".to_string(),
            vec![OrderLine::new(Uuid::new_v4(), "Classic Chocolate".to_string(), Money::from_pence(7500), 1)],
            None,
            now(),
        );

        let debug = format!("{:?}", order);
        assert!(!debug.contains("customer@example.com"));
        assert!(debug.contains("********"));
    }

    #[test]
    fn test_placed_event_payload() {
        let order = Order::new(
            "customer-1".to_string(),
            "customer@example.com".to_string(),
            vec![OrderLine::new(Uuid::new_v4(), "Classic Chocolate".to_string(), Money::from_pence(7500), 2)],
            None,
            now(),
        );

        let event = order.placed_event();
        assert_eq!(event.order_id, order.id);
        assert_eq!(event.total_pence, 15000);
        assert_eq!(event.line_count, 1);
        assert_eq!(event.timestamp, now().timestamp());
    }
}
