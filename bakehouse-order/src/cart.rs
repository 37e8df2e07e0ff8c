use crate::models::OrderLine;
use bakehouse_shared::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A priced line in the customer's cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub cake_id: Uuid,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub image_url: String,
}

/// The customer's cart. Holds already-priced items and does summation
/// only; unit prices were fixed when the item was quoted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a cake to the cart. A line for the same cake at the same unit
    /// price is merged; a different unit price (a re-quote) gets its own
    /// line.
    pub fn add_item(&mut self, cake_id: Uuid, name: String, unit_price: Money, image_url: String) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.cake_id == cake_id && i.unit_price == unit_price)
        {
            existing.quantity += 1;
            return;
        }

        self.items.push(CartItem {
            id: Uuid::new_v4(),
            cake_id,
            name,
            unit_price,
            quantity: 1,
            image_url,
        });
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn update_quantity(&mut self, item_id: &Uuid, quantity: u32) {
        if quantity == 0 {
            self.remove_item(item_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == item_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove_item(&mut self, item_id: &Uuid) {
        self.items.retain(|i| &i.id != item_id);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines (the cart badge), not the summed quantity
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Money {
        self.items
            .iter()
            .map(|i| i.unit_price * i.quantity as i64)
            .sum()
    }

    /// Lines ready to be placed as an order
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .map(|i| OrderLine::new(i.cake_id, i.name.clone(), i.unit_price, i.quantity))
            .collect()
    }
}
