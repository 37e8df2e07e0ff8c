use async_trait::async_trait;
use bakehouse_catalog::Cake;
use bakehouse_order::{Order, OrderStatus};
use uuid::Uuid;

/// Repository trait for catalog data access
#[async_trait]
pub trait CakeRepository: Send + Sync {
    async fn upsert_cake(
        &self,
        cake: &Cake,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get_cake(
        &self,
        id: Uuid,
    ) -> Result<Option<Cake>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_active_cakes(
        &self,
    ) -> Result<Vec<Cake>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save_order(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get_order(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_orders(
        &self,
        customer_id: &str,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_orders_in_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;
}
