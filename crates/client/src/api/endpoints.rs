//! Typed wrappers for the backend endpoints the clients consume.

use grocery_core::{
    Availability, Customer, CustomerId, LoginRequest, Order, OrderStatistics, Product, ProductId,
    RegisterRequest, Session,
};
use reqwest::Method;
use tracing::instrument;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /api/orders/statistics`
    #[instrument(skip(self))]
    pub async fn order_statistics(&self) -> Result<OrderStatistics, ApiError> {
        self.get("/api/orders/statistics").await
    }

    /// `GET /api/orders`
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/api/orders").await
    }

    /// `GET /api/products`
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/api/products").await
    }

    /// `GET /api/products/search?name=`
    #[instrument(skip(self))]
    pub async fn search_products(&self, name: &str) -> Result<Vec<Product>, ApiError> {
        let path = format!("/api/products/search?name={}", urlencoding::encode(name));
        self.get(&path).await
    }

    /// `GET /api/products/{id}/availability?quantity=`
    #[instrument(skip(self))]
    pub async fn product_availability(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<Availability, ApiError> {
        let path = format!("/api/products/{id}/availability?quantity={quantity}");
        self.get(&path).await
    }

    /// `GET /api/customers`
    #[instrument(skip(self))]
    pub async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get("/api/customers").await
    }

    /// `GET /api/customers/search?name=`
    #[instrument(skip(self))]
    pub async fn search_customers(&self, name: &str) -> Result<Vec<Customer>, ApiError> {
        let path = format!("/api/customers/search?name={}", urlencoding::encode(name));
        self.get(&path).await
    }

    /// `POST /api/customers/register`
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_customer(&self, request: &RegisterRequest) -> Result<Customer, ApiError> {
        self.post("/api/customers/register", request).await
    }

    /// `POST /api/auth/login`
    ///
    /// On success the backend also sets its session cookie, which the
    /// client's cookie store keeps for later calls.
    #[instrument(skip(self, request), fields(username = %request.username, user_type = %request.user_type))]
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        self.post("/api/auth/login", request).await
    }

    /// `POST /api/auth/logout`
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(Method::POST, "/api/auth/logout").await
    }

    /// `DELETE /api/customers/{id}`
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: &CustomerId) -> Result<(), ApiError> {
        let path = format!("/api/customers/{}", urlencoding::encode(id.as_str()));
        self.send_unit(Method::DELETE, &path).await
    }
}
