use crate::repository::{CakeRepository, OrderRepository};
use async_trait::async_trait;
use bakehouse_catalog::Cake;
use bakehouse_order::{Order, OrderStatus};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Reference catalog store, used by tests and local runs
#[derive(Default)]
pub struct InMemoryCakeRepository {
    cakes: RwLock<HashMap<Uuid, Cake>>,
}

impl InMemoryCakeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CakeRepository for InMemoryCakeRepository {
    async fn upsert_cake(
        &self,
        cake: &Cake,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.cakes.write().await.insert(cake.id, cake.clone());
        Ok(())
    }

    async fn get_cake(
        &self,
        id: Uuid,
    ) -> Result<Option<Cake>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.cakes.read().await.get(&id).cloned())
    }

    async fn list_active_cakes(
        &self,
    ) -> Result<Vec<Cake>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .cakes
            .read()
            .await
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }
}

/// Reference order store
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save_order(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.orders.write().await.insert(order.id, order.clone());
        Ok(())
    }

    async fn get_order(
        &self,
        id: Uuid,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn list_orders(
        &self,
        customer_id: &str,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn list_orders_in_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.status == status)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakehouse_catalog::default_catalog;
    use bakehouse_core::PriceCalculator;
    use bakehouse_order::OrderLine;
    use bakehouse_shared::Money;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_cake_repository_upsert_and_filter() {
        let repo = InMemoryCakeRepository::new();
        let mut cakes = default_catalog(&PriceCalculator::default()).unwrap();
        cakes[2].is_active = false;

        for cake in &cakes {
            repo.upsert_cake(cake).await.unwrap();
        }

        assert_eq!(repo.list_active_cakes().await.unwrap().len(), 2);
        let fetched = repo.get_cake(cakes[0].id).await.unwrap().unwrap();
        assert_eq!(fetched.name, cakes[0].name);
        assert!(repo.get_cake(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_order_repository_filters() {
        let repo = InMemoryOrderRepository::new();
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap();

        let mut first = Order::new(
            "customer-1".to_string(),
            "one@example.com".to_string(),
            vec![OrderLine::new(Uuid::new_v4(), "Classic Chocolate".to_string(), Money::from_pence(7500), 1)],
            None,
            now,
        );
        let second = Order::new(
            "customer-2".to_string(),
            "two@example.com".to_string(),
            vec![OrderLine::new(Uuid::new_v4(), "Strawberry Delight".to_string(), Money::from_pence(12000), 1)],
            None,
            now,
        );

        first.apply_status(OrderStatus::Baking, "In the oven".to_string(), true, now);
        repo.save_order(&first).await.unwrap();
        repo.save_order(&second).await.unwrap();

        assert_eq!(repo.list_orders("customer-1").await.unwrap().len(), 1);
        assert_eq!(
            repo.list_orders_in_status(OrderStatus::Baking).await.unwrap().len(),
            1
        );
        assert_eq!(
            repo.list_orders_in_status(OrderStatus::Pending).await.unwrap().len(),
            1
        );

        // Saving again replaces, not duplicates
        repo.save_order(&first).await.unwrap();
        assert_eq!(repo.list_orders("customer-1").await.unwrap().len(), 1);
    }
}
