use bakehouse_catalog::default_catalog;
use bakehouse_core::{
    CakeSize, DeliveryEligibilityChecker, MockAdminAccess, MockPickupNotifier, PriceCalculator,
    ProductCategory,
};
use bakehouse_order::{Cart, OrderBook, OrderStatus, StatusUpdateService};
use bakehouse_quote::{QuoteEngine, QuoteRequest};
use bakehouse_shared::Money;
use bakehouse_store::app_config::Config;
use bakehouse_store::memory::{InMemoryCakeRepository, InMemoryOrderRepository};
use bakehouse_store::repository::{CakeRepository, OrderRepository};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config");

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bakehouse=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 14, 30, 0).unwrap()
}

#[test]
fn test_shipped_config_matches_documented_tables() {
    init_tracing();
    let config = Config::load_from(CONFIG_DIR).unwrap();

    assert_eq!(config.pricing.base_prices[&CakeSize::SixInch], 75.0);
    assert_eq!(config.pricing.base_prices[&CakeSize::EightInch], 120.0);
    assert_eq!(config.pricing.base_prices[&CakeSize::TenInch], 180.0);

    let wedding = config.delivery.policies[&ProductCategory::Wedding];
    assert_eq!(wedding.minimum_notice_days, 14);
    assert_eq!(wedding.rush_threshold_days, 28);
    assert_eq!(config.delivery.default_policy.minimum_notice_days, 2);
    assert_eq!(config.delivery.default_policy.rush_threshold_days, 5);

    assert!(config.pricing.validate().is_empty());
    assert!(config.delivery.validate().is_empty());
}

#[test]
fn test_environment_override_wins() {
    init_tracing();
    // The process environment is shared across tests, so pick a rate
    // no other test in this binary reads
    std::env::set_var("BAKEHOUSE__PRICING__SURCHARGES__CUSTOM_DESIGN", "0.5");
    let config = Config::load_from(CONFIG_DIR);
    std::env::remove_var("BAKEHOUSE__PRICING__SURCHARGES__CUSTOM_DESIGN");

    assert_eq!(config.unwrap().pricing.surcharges.custom_design, 0.5);
}

#[tokio::test]
async fn test_storefront_order_flow() {
    init_tracing();

    // Wire the engines from the shipped config, exactly as a binary would
    let config = Config::load_from(CONFIG_DIR).unwrap();
    let calculator = PriceCalculator::new(config.pricing.clone());
    let quote_engine = QuoteEngine::new(
        PriceCalculator::new(config.pricing.clone()),
        DeliveryEligibilityChecker::new(config.delivery.clone()),
    );

    // Seed the catalog into the store
    let cake_repo = InMemoryCakeRepository::new();
    for cake in default_catalog(&calculator).unwrap() {
        cake_repo.upsert_cake(&cake).await.unwrap();
    }
    let cakes = cake_repo.list_active_cakes().await.unwrap();
    let chocolate = cakes.iter().find(|c| c.name == "Classic Chocolate").unwrap();

    // Customer quotes an 8-inch birthday cake ten days out: inside the
    // rush window, so 120 * 1.30
    let delivery = reference() + Duration::days(10);
    let quote = quote_engine
        .quote(&QuoteRequest {
            size: CakeSize::EightInch,
            category: ProductCategory::Birthday,
            custom_design: false,
            multiple_flavors: false,
            requested_delivery: delivery,
            reference: reference(),
        })
        .unwrap();
    assert!(quote.is_rush);
    assert!(quote.is_valid_delivery);
    assert_eq!(quote.unit_price, Money::from_pence(15600));

    // Into the cart at the quoted price, then checkout
    let mut cart = Cart::new();
    cart.add_item(
        chocolate.id,
        chocolate.name.clone(),
        quote.unit_price,
        chocolate.image_url.clone(),
    );
    assert_eq!(cart.total(), Money::from_pence(15600));

    let mut book = OrderBook::new();
    let order = book
        .place(
            "customer-1".to_string(),
            "customer@example.com".to_string(),
            cart.order_lines(),
            Some(delivery),
            reference(),
        )
        .unwrap();
    assert_eq!(order.total, Money::from_pence(15600));

    let order_repo = InMemoryOrderRepository::new();
    order_repo.save_order(&order).await.unwrap();

    // The placement event downstream consumers would receive
    let event_json = serde_json::to_value(order.placed_event()).unwrap();
    assert_eq!(event_json["total_pence"], 15600);
    assert_eq!(event_json["customer_id"], "customer-1");

    // Staff walk the order through the workshop to the shelf
    let notifier = Arc::new(MockPickupNotifier::new());
    let staff = Arc::new(MockAdminAccess::with_admins(&["staff-1"]));
    let service = StatusUpdateService::new(notifier.clone(), staff);

    let walk = [
        (OrderStatus::Confirmed, "Deposit received"),
        (OrderStatus::Baking, "In the oven"),
        (OrderStatus::ReadyForPickup, "Boxed and on the shelf"),
    ];
    for (i, (status, comment)) in walk.iter().enumerate() {
        let event = service
            .apply_status_update(
                &mut book,
                "staff-1",
                order.id,
                status.clone(),
                comment.to_string(),
                false,
                reference() + Duration::hours(i as i64 + 1),
            )
            .await
            .unwrap();
        assert_eq!(event.order_id, order.id);
    }

    // Pickup notification fired exactly once, for this order
    assert_eq!(notifier.sent_orders(), vec![order.id]);

    // Persist the final state and read it back
    let updated = book.get_order(&order.id).unwrap().clone();
    order_repo.save_order(&updated).await.unwrap();

    let stored = order_repo.get_order(order.id).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::ReadyForPickup);
    assert_eq!(stored.history.len(), walk.len());
    assert_eq!(
        order_repo
            .list_orders_in_status(OrderStatus::ReadyForPickup)
            .await
            .unwrap()
            .len(),
        1
    );
}
