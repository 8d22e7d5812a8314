//! Typed client for the inventory HTTP API.
//!
//! Works natively (tokio) and in the browser (fetch) through `reqwest`.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use stockroom_core::{DomainError, ProductId, StoreId};
use stockroom_inventory::{DashboardData, NewProduct, Product};

use crate::config::ClientConfig;
use crate::error::ApiError;

const TUNNEL_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

/// Body of `POST /products/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_name: String,
    pub initial_stock: u32,
    pub current_stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_stock_level: Option<u32>,
    pub store_id: StoreId,
}

impl CreateProductRequest {
    /// The API records the registered quantity as both initial and current stock.
    pub fn new(product: &NewProduct, store_id: StoreId) -> Self {
        Self {
            product_name: product.product_name.trim().to_string(),
            initial_stock: product.current_stock,
            current_stock: product.current_stock,
            minimum_stock_level: product.minimum_stock_level,
            store_id,
        }
    }
}

/// One entry of a bulk creation request (no store id per item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkProductEntry {
    pub product_name: String,
    pub initial_stock: u32,
    pub current_stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_stock_level: Option<u32>,
}

/// Body of `POST /products/bulk-create/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateRequest {
    pub products: Vec<BulkProductEntry>,
    pub store_id: StoreId,
}

impl BulkCreateRequest {
    pub fn new(products: &[NewProduct], store_id: StoreId) -> Self {
        Self {
            products: products
                .iter()
                .map(|p| BulkProductEntry {
                    product_name: p.product_name.trim().to_string(),
                    initial_stock: p.current_stock,
                    current_stock: p.current_stock,
                    minimum_stock_level: p.minimum_stock_level,
                })
                .collect(),
            store_id,
        }
    }
}

/// Client bound to one API base URL and one store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store_id: StoreId,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if config.skip_tunnel_warning {
            headers.insert(
                HeaderName::from_static(TUNNEL_WARNING_HEADER),
                HeaderValue::from_static("true"),
            );
        }

        let builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));

        let http = builder
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            store_id: config.store_id,
            token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// `true` when the API root answers at all, whatever the status code.
    pub async fn check_connectivity(&self) -> bool {
        let url = format!("{}/", self.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => {
                tracing::debug!(status = %resp.status(), url = %url, "API reachable");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "API unreachable");
                false
            }
        }
    }

    /// All products of the configured store, with locally derived status.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products/{}", self.base_url, self.store_id);
        let products: Vec<Product> = self.send(self.http.get(&url)).await?;
        tracing::debug!(store_id = %self.store_id, count = products.len(), "listed products");
        Ok(products.into_iter().map(Product::with_derived_status).collect())
    }

    pub async fn get_product(&self, product_id: ProductId) -> Result<Product, ApiError> {
        let url = format!("{}/products/{}/{}", self.base_url, self.store_id, product_id);
        let product: Product = self.send(self.http.get(&url)).await?;
        Ok(product.with_derived_status())
    }

    /// Register a product. Validation happens before any request is sent.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        product.validate()?;
        let url = format!("{}/products/", self.base_url);
        let body = CreateProductRequest::new(product, self.store_id);
        let created: Product = self.send(self.http.post(&url).json(&body)).await?;
        tracing::info!(
            store_id = %self.store_id,
            product_id = %created.product_id(),
            name = created.product_name(),
            "registered product"
        );
        Ok(created.with_derived_status())
    }

    /// Register several products in one request. Nothing is sent if any entry is invalid.
    pub async fn bulk_create(&self, products: &[NewProduct]) -> Result<Vec<Product>, ApiError> {
        if products.is_empty() {
            return Err(DomainError::validation("bulk creation requires at least one product").into());
        }
        for product in products {
            product.validate()?;
        }
        let url = format!("{}/products/bulk-create/", self.base_url);
        let body = BulkCreateRequest::new(products, self.store_id);
        let created: Vec<Product> = self.send(self.http.post(&url).json(&body)).await?;
        tracing::info!(store_id = %self.store_id, count = created.len(), "registered products");
        Ok(created.into_iter().map(Product::with_derived_status).collect())
    }

    /// Increase a product's stock by `quantity`.
    pub async fn restock(&self, product_id: ProductId, quantity: u32) -> Result<Product, ApiError> {
        self.move_stock("stock-in", product_id, quantity).await
    }

    /// Decrease a product's stock by `quantity`.
    ///
    /// The API rejects quantities larger than the stock on hand.
    pub async fn stock_out(&self, product_id: ProductId, quantity: u32) -> Result<Product, ApiError> {
        self.move_stock("stock-out", product_id, quantity).await
    }

    /// Fetch the catalog and summarize it.
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        let products = self.list_products().await?;
        Ok(DashboardData::from_products(&products))
    }

    async fn move_stock(
        &self,
        action: &str,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Product, ApiError> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1").into());
        }
        let url = format!(
            "{}/products/{}/{}/{}",
            self.base_url, action, self.store_id, product_id
        );
        let req = self.http.post(&url).query(&[("quantity", quantity)]);
        let product: Product = self.send(req).await?;
        tracing::info!(
            store_id = %self.store_id,
            product_id = %product_id,
            quantity,
            action,
            current_stock = product.current_stock(),
            "stock moved"
        );
        Ok(product.with_derived_status())
    }

    async fn send<T>(&self, req: reqwest::RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let req = match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "API request failed");
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_copies_stock_into_initial_stock() {
        let req = CreateProductRequest::new(
            &NewProduct::new(" Widget ", 12).with_minimum_stock_level(4),
            StoreId::new(3),
        );
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "productName": "Widget",
                "initialStock": 12,
                "currentStock": 12,
                "minimumStockLevel": 4,
                "storeId": 3
            })
        );
    }

    #[test]
    fn bulk_request_omits_missing_threshold() {
        let req = BulkCreateRequest::new(&[NewProduct::new("Bolt", 0)], StoreId::new(1));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "products": [
                    { "productName": "Bolt", "initialStock": 0, "currentStock": 0 }
                ],
                "storeId": 1
            })
        );
    }

    #[test]
    fn base_url_is_normalized() {
        let config = ClientConfig {
            api_url: "http://localhost:9000/".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.store_id(), StoreId::new(1));
    }
}
