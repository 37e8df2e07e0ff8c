pub mod engine;
pub mod models;

pub use engine::{QuoteEngine, QuoteError};
pub use models::{Quote, QuoteRequest};
