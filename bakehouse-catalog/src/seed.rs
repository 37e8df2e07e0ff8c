use crate::product::Cake;
use bakehouse_core::{CakeSize, ConfigurationError, PriceCalculator};
use uuid::Uuid;

/// The storefront's standard range.
///
/// Display prices come from the calculator rather than being written
/// here, so the cards always agree with what checkout will charge. A
/// size missing from the price table surfaces as a `ConfigurationError`
/// instead of a silently wrong price.
pub fn default_catalog(calculator: &PriceCalculator) -> Result<Vec<Cake>, ConfigurationError> {
    // All three standard cakes start at the 6-inch size
    let from_price = calculator.base_price(CakeSize::SixInch)?;

    Ok(vec![
        Cake {
            id: Uuid::new_v4(),
            name: "Classic Chocolate".to_string(),
            description: "Rich chocolate layers with smooth ganache frosting. Made with premium cocoa and topped with chocolate shavings. Perfect for chocolate lovers!".to_string(),
            image_url: "https://images.unsplash.com/photo-1606890737304-57a1ca8a5b62?auto=format&fit=crop&w=600&q=60".to_string(),
            category: "Chocolate".to_string(),
            sizes: vec![CakeSize::SixInch, CakeSize::EightInch, CakeSize::TenInch],
            flavors: vec!["Chocolate".to_string(), "Dark Chocolate".to_string()],
            ingredients: vec![
                "Flour".to_string(),
                "Sugar".to_string(),
                "Eggs".to_string(),
                "Butter".to_string(),
                "Cocoa Powder".to_string(),
                "Chocolate Ganache".to_string(),
            ],
            display_price: from_price,
            rating: 4.8,
            review_count: 24,
            is_active: true,
        },
        Cake {
            id: Uuid::new_v4(),
            name: "Strawberry Delight".to_string(),
            description: "Vanilla sponge with fresh strawberries and cream. Decorated with whole strawberries and a light dusting of powdered sugar. A fruity treat!".to_string(),
            image_url: "https://images.unsplash.com/photo-1571115177098-24ec42ed204d?auto=format&fit=crop&w=600&q=60".to_string(),
            category: "Strawberry".to_string(),
            sizes: vec![CakeSize::SixInch, CakeSize::EightInch, CakeSize::TenInch],
            flavors: vec!["Vanilla".to_string(), "Strawberry".to_string()],
            ingredients: vec![
                "Flour".to_string(),
                "Sugar".to_string(),
                "Eggs".to_string(),
                "Butter".to_string(),
                "Fresh Strawberries".to_string(),
                "Whipped Cream".to_string(),
            ],
            display_price: from_price,
            rating: 4.9,
            review_count: 36,
            is_active: true,
        },
        Cake {
            id: Uuid::new_v4(),
            name: "Fresh Strawberry Cake".to_string(),
            description: "Pure strawberry sponge with strawberry buttercream and fresh berry compote. Made with real strawberry puree for an intense berry flavor!".to_string(),
            image_url: "https://images.unsplash.com/photo-1565958011703-44f9829ba187?auto=format&fit=crop&w=600&q=60".to_string(),
            category: "Strawberry".to_string(),
            sizes: vec![CakeSize::SixInch, CakeSize::EightInch, CakeSize::TenInch],
            flavors: vec!["Strawberry".to_string(), "Strawberry Vanilla".to_string()],
            ingredients: vec![
                "Flour".to_string(),
                "Sugar".to_string(),
                "Eggs".to_string(),
                "Butter".to_string(),
                "Strawberry Puree".to_string(),
                "Strawberry Buttercream".to_string(),
                "Fresh Strawberries".to_string(),
            ],
            display_price: from_price,
            rating: 4.9,
            review_count: 42,
            is_active: true,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakehouse_core::{PricingConfig, SurchargeRates};
    use bakehouse_shared::Money;
    use std::collections::HashMap;

    #[test]
    fn test_seed_prices_come_from_the_table() {
        let cakes = default_catalog(&PriceCalculator::default()).unwrap();

        assert_eq!(cakes.len(), 3);
        for cake in &cakes {
            assert_eq!(cake.display_price, Money::from_pence(7500));
            assert!(cake.is_active);
        }
    }

    #[test]
    fn test_seed_fails_when_smallest_size_unpriced() {
        // A table without the 6-inch entry cannot price the "from" label
        let mut base_prices = HashMap::new();
        base_prices.insert(CakeSize::EightInch, 120.0);
        base_prices.insert(CakeSize::TenInch, 180.0);
        let calculator = PriceCalculator::new(PricingConfig {
            base_prices,
            surcharges: SurchargeRates::default(),
        });

        let result = default_catalog(&calculator);
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingBasePrice(CakeSize::SixInch))
        ));
    }

    #[test]
    fn test_seed_names_are_distinct() {
        let cakes = default_catalog(&PriceCalculator::default()).unwrap();
        let mut names: Vec<&str> = cakes.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 3);
    }
}
