//! Home page featured products.

use grocery_core::Money;
use rust_decimal::Decimal;

use crate::render;

/// A product promoted on the home page. Static content, not fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedProduct {
    pub id: u32,
    pub name: &'static str,
    pub price: Money,
    pub image: &'static str,
    pub description: &'static str,
}

#[must_use]
pub fn featured_products() -> Vec<FeaturedProduct> {
    vec![
        FeaturedProduct {
            id: 1,
            name: "Fresh Apples",
            price: Money::new(Decimal::new(399, 2)),
            image: "assets/images/apples.jpg",
            description: "Crisp and sweet red apples",
        },
        FeaturedProduct {
            id: 2,
            name: "Organic Bananas",
            price: Money::new(Decimal::new(249, 2)),
            image: "assets/images/bananas.jpg",
            description: "Fresh organic bananas",
        },
        FeaturedProduct {
            id: 3,
            name: "Fresh Milk",
            price: Money::new(Decimal::new(499, 2)),
            image: "assets/images/milk.jpg",
            description: "Farm fresh whole milk",
        },
    ]
}

/// Home page markup.
#[must_use]
pub fn render() -> String {
    render::home(&featured_products())
}
