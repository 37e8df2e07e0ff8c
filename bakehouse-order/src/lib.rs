pub mod book;
pub mod cart;
pub mod dispatch;
pub mod models;

pub use book::{OrderBook, OrderError};
pub use cart::{Cart, CartItem};
pub use dispatch::StatusUpdateService;
pub use models::{Order, OrderLine, OrderStatus, StatusHistoryEntry};
