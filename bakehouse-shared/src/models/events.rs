use uuid::Uuid;

/// Emitted when a customer's order is first recorded.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OrderPlacedEvent {
    pub order_id: Uuid,
    pub customer_id: String,
    pub total_pence: i64,
    pub line_count: usize,
    pub timestamp: i64,
}

/// Emitted on every order status change, internal or customer-visible.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OrderStatusChangedEvent {
    pub order_id: Uuid,
    pub status: String,
    pub is_internal: bool,
    pub timestamp: i64,
}
