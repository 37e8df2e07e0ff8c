pub mod app_config;
pub mod memory;
pub mod repository;

pub use app_config::Config;
pub use memory::{InMemoryCakeRepository, InMemoryOrderRepository};
pub use repository::{CakeRepository, OrderRepository};
