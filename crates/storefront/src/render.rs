//! Storefront markup.
//!
//! Every renderer takes a snapshot of controller state and returns markup;
//! nothing here reads shared state.

use askama::Template;
use grocery_core::Session;

use crate::filters;
use crate::forms::FormStatus;
use crate::home::FeaturedProduct;
use crate::products::{CartLine, ProductListing, ProductsSnapshot};
use crate::routes::Route;

/// Product card view.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub available: u32,
    pub selected_quantity: u32,
    pub in_stock: bool,
}

impl From<&ProductListing> for ProductCardView {
    fn from(listing: &ProductListing) -> Self {
        Self {
            id: listing.product.id.to_string(),
            name: listing.product.product_name.clone(),
            price: listing.product.price.to_string(),
            available: listing.product.available_quantity,
            selected_quantity: listing.selected_quantity,
            in_stock: listing.product.available_quantity > 0,
        }
    }
}

/// Cart summary line view.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.product_name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
        }
    }
}

/// Featured product card view.
#[derive(Debug, Clone)]
pub struct FeaturedView {
    pub id: u32,
    pub name: &'static str,
    pub price: String,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Template)]
#[template(path = "header.html")]
struct HeaderTemplate {
    user_name: Option<String>,
    home_path: &'static str,
    products_path: &'static str,
    login_path: &'static str,
    register_path: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    featured: Vec<FeaturedView>,
    products_path: &'static str,
}

#[derive(Template)]
#[template(path = "products.html")]
struct ProductsTemplate {
    products: Vec<ProductCardView>,
    cart: Vec<CartLineView>,
    is_loading: bool,
    is_adding_to_cart: bool,
    error_message: Option<String>,
    success_message: Option<String>,
}

#[derive(Template)]
#[template(path = "form_status.html")]
struct FormStatusTemplate {
    is_loading: bool,
    error_message: Option<String>,
    success_message: Option<String>,
}

fn render(template: &impl Template) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        r#"<p class="text-danger">Something went wrong. Please reload the page.</p>"#.to_string()
    })
}

/// Navigation header. Shows the user's name when logged in.
#[must_use]
pub fn header(session: Option<&Session>) -> String {
    let user_name = session.map(|s| s.display_name().unwrap_or("My Account").to_string());
    render(&HeaderTemplate {
        user_name,
        home_path: Route::Home.path(),
        products_path: Route::Products.path(),
        login_path: Route::Login.path(),
        register_path: Route::Register.path(),
    })
}

#[must_use]
pub fn home(featured: &[FeaturedProduct]) -> String {
    render(&HomeTemplate {
        featured: featured
            .iter()
            .map(|p| FeaturedView {
                id: p.id,
                name: p.name,
                price: p.price.to_string(),
                image: p.image,
                description: p.description,
            })
            .collect(),
        products_path: Route::Products.path(),
    })
}

/// Product grid with messages and the cart summary.
#[must_use]
pub fn products_page(snapshot: &ProductsSnapshot) -> String {
    render(&ProductsTemplate {
        products: snapshot.listings.iter().map(ProductCardView::from).collect(),
        cart: snapshot.cart.iter().map(CartLineView::from).collect(),
        is_loading: snapshot.is_loading,
        is_adding_to_cart: snapshot.is_adding_to_cart,
        error_message: snapshot.error_message.clone(),
        success_message: snapshot.success_message.clone(),
    })
}

/// Messages and spinner under a login or registration form.
#[must_use]
pub fn form_status(status: &FormStatus) -> String {
    render(&FormStatusTemplate {
        is_loading: status.is_loading,
        error_message: status.error_message.clone(),
        success_message: status.success_message.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use grocery_core::Product;
    use serde_json::json;

    use super::*;

    fn listing(name: &str, available: u32) -> ProductListing {
        let product: Product = serde_json::from_value(json!({
            "productId": 7,
            "productName": name,
            "price": 4.99,
            "availableQuantity": available
        }))
        .unwrap();
        ProductListing::from(product)
    }

    #[test]
    fn test_empty_listing_shows_not_found() {
        let markup = products_page(&ProductsSnapshot::default());
        assert!(markup.contains("No products found"));
    }

    #[test]
    fn test_loading_hides_placeholder() {
        let snapshot = ProductsSnapshot {
            is_loading: true,
            ..ProductsSnapshot::default()
        };
        let markup = products_page(&snapshot);
        assert!(markup.contains("Loading products"));
        assert!(!markup.contains("No products found"));
    }

    #[test]
    fn test_product_cards() {
        let snapshot = ProductsSnapshot {
            listings: vec![listing("Fresh Milk", 12), listing("Sold <Out>", 0)],
            success_message: Some("Added 1 Fresh Milk(s) to cart!".to_string()),
            ..ProductsSnapshot::default()
        };
        let markup = products_page(&snapshot);
        assert!(markup.contains("Fresh Milk"));
        assert!(markup.contains("$4.99"));
        assert!(markup.contains("Out of stock"));
        assert!(markup.contains("Sold &lt;Out&gt;"));
        assert!(markup.contains("Added 1 Fresh Milk(s) to cart!"));
    }

    #[test]
    fn test_form_status_messages() {
        let markup = form_status(&FormStatus {
            is_loading: false,
            error_message: Some("Login failed".to_string()),
            success_message: None,
        });
        assert!(markup.contains("alert-danger"));
        assert!(markup.contains("Login failed"));
        assert!(!markup.contains("alert-success"));
    }

    #[test]
    fn test_header_when_anonymous() {
        let markup = header(None);
        assert!(markup.contains("/login"));
        assert!(markup.contains("/register"));
        assert!(!markup.contains("Logout"));
    }
}
