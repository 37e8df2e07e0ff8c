use crate::models::{Order, OrderLine, OrderStatus};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Holds placed orders and guards their status transitions.
///
/// Timestamps are always passed in by the caller, so the book itself
/// never consults the wall clock.
pub struct OrderBook {
    orders: HashMap<Uuid, Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
        }
    }

    /// Record a new order in `pending`
    pub fn place(
        &mut self,
        customer_id: String,
        customer_email: String,
        lines: Vec<OrderLine>,
        requested_delivery: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<Order, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let order = Order::new(customer_id, customer_email, lines, requested_delivery, now);
        tracing::info!("Order {} placed, total {}", order.id, order.total);

        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    pub fn get_order(&self, order_id: &Uuid) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// Move an order to a new status, appending to its history.
    /// Every update carries a comment; cancelled orders accept none.
    pub fn record_status_update(
        &mut self,
        order_id: &Uuid,
        status: OrderStatus,
        comment: String,
        is_internal: bool,
        now: DateTime<Utc>,
    ) -> Result<(), OrderError> {
        if comment.trim().is_empty() {
            return Err(OrderError::MissingComment);
        }

        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        if order.status.is_terminal() {
            return Err(OrderError::TerminalStatus {
                id: order_id.to_string(),
                status: order.status.to_string(),
            });
        }

        order.apply_status(status, comment, is_internal, now);
        Ok(())
    }

    /// Orders currently in the given status, for the staff dashboard
    pub fn orders_in_status(&self, status: &OrderStatus) -> Vec<&Order> {
        self.orders.values().filter(|o| &o.status == status).collect()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order {id} is {status} and accepts no further updates")]
    TerminalStatus { id: String, status: String },

    #[error("A status update requires a comment")]
    MissingComment,

    #[error("Cannot place an order with no lines")]
    EmptyOrder,

    #[error("Caller {0} is not allowed to update orders")]
    NotAuthorized(String),

    #[error("Admin verification failed: {0}")]
    AdminCheckFailed(String),
}
