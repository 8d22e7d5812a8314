use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::movement::{StockChange, StockMovement, StockMovementKind};
use crate::status::StockStatus;

/// A catalog product as known to the client.
///
/// Identity and `initialStock` are assigned by the API and never change on
/// this side. `status`/`statusText` are carried for the wire only; use
/// [`Product::status`] for the authoritative classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    product_id: ProductId,
    product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sku: Option<String>,
    initial_stock: u32,
    current_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    minimum_stock_level: Option<u32>,
    #[serde(default, deserialize_with = "wire::null_as_zero")]
    reserved_stock: u32,
    #[serde(
        default,
        deserialize_with = "wire::lenient_status",
        skip_serializing_if = "Option::is_none"
    )]
    status: Option<StockStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    movements: Vec<StockMovement>,
}

impl Product {
    /// Build a freshly created product whose current stock equals its initial stock.
    pub fn new(product_id: ProductId, product_name: impl Into<String>, initial_stock: u32) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            sku: None,
            initial_stock,
            current_stock: initial_stock,
            minimum_stock_level: None,
            reserved_stock: 0,
            status: None,
            status_text: None,
            movements: Vec::new(),
        }
    }

    pub fn with_minimum_stock_level(mut self, level: u32) -> Self {
        self.minimum_stock_level = Some(level);
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn initial_stock(&self) -> u32 {
        self.initial_stock
    }

    pub fn current_stock(&self) -> u32 {
        self.current_stock
    }

    pub fn minimum_stock_level(&self) -> Option<u32> {
        self.minimum_stock_level
    }

    pub fn reserved_stock(&self) -> u32 {
        self.reserved_stock
    }

    /// Stock that is on hand and not reserved.
    pub fn available_stock(&self) -> u32 {
        self.current_stock.saturating_sub(self.reserved_stock())
    }

    pub fn movements(&self) -> &[StockMovement] {
        &self.movements
    }

    /// Classification derived from current stock and minimum level.
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.current_stock, self.minimum_stock_level)
    }

    /// Status code as last reported by the API, if any.
    pub fn reported_status(&self) -> Option<StockStatus> {
        self.status
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_text.as_deref()
    }

    /// Overwrite the wire `status`/`statusText` with locally derived values.
    pub fn with_derived_status(mut self) -> Self {
        self.refresh_status();
        self
    }

    fn refresh_status(&mut self) {
        let status = self.status();
        self.status = Some(status);
        self.status_text = Some(status.label().to_string());
    }

    /// Case-insensitive name (or SKU) search.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.product_name.to_lowercase().contains(&query)
            || self
                .sku
                .as_deref()
                .is_some_and(|sku| sku.to_lowercase().contains(&query))
    }

    /// Increase stock by `quantity` (restock).
    pub fn restock(&mut self, quantity: u32) -> DomainResult<StockChange> {
        ensure_positive(quantity)?;
        let previous = self.current_stock;
        self.current_stock = previous
            .checked_add(quantity)
            .ok_or_else(|| DomainError::invariant("stock quantity overflow"))?;
        self.refresh_status();
        Ok(self.change(StockMovementKind::StockIn, quantity, previous))
    }

    /// Decrease stock by `quantity` (sale, loss).
    ///
    /// Fails without mutating when fewer than `quantity` units are on hand.
    pub fn stock_out(&mut self, quantity: u32) -> DomainResult<StockChange> {
        ensure_positive(quantity)?;
        let previous = self.current_stock;
        if previous < quantity {
            return Err(DomainError::invariant(format!(
                "insufficient stock (requested: {quantity}, on hand: {previous})"
            )));
        }
        self.current_stock = previous - quantity;
        self.refresh_status();
        Ok(self.change(StockMovementKind::StockOut, quantity, previous))
    }

    /// Set aside `quantity` units for a pending order.
    pub fn reserve(&mut self, quantity: u32) -> DomainResult<StockChange> {
        ensure_positive(quantity)?;
        if self.available_stock() < quantity {
            return Err(DomainError::invariant(format!(
                "insufficient available stock to reserve (requested: {quantity}, available: {})",
                self.available_stock()
            )));
        }
        self.reserved_stock += quantity;
        Ok(self.change(StockMovementKind::Reserve, quantity, self.current_stock))
    }

    fn change(&self, kind: StockMovementKind, quantity: u32, previous_stock: u32) -> StockChange {
        StockChange {
            product_id: self.product_id,
            kind,
            quantity,
            previous_stock,
            current_stock: self.current_stock,
        }
    }
}

/// Decoders for server fields that are informational only.
mod wire {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    use crate::status::StockStatus;

    pub fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
    }

    /// Unknown or malformed status codes decode as `None`; the status is
    /// re-derived from stock anyway.
    pub fn lenient_status<'de, D>(deserializer: D) -> Result<Option<StockStatus>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Reported {
            Code(u64),
            Other(IgnoredAny),
        }

        Ok(match Option::<Reported>::deserialize(deserializer)? {
            Some(Reported::Code(code)) => u8::try_from(code).ok().and_then(StockStatus::from_code),
            Some(Reported::Other(_)) | None => None,
        })
    }
}

fn ensure_positive(quantity: u32) -> DomainResult<()> {
    if quantity == 0 {
        return Err(DomainError::validation("quantity must be at least 1"));
    }
    Ok(())
}

/// Request to register a new product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: String,
    pub current_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_stock_level: Option<u32>,
}

impl NewProduct {
    pub fn new(product_name: impl Into<String>, current_stock: u32) -> Self {
        Self {
            product_name: product_name.into(),
            current_stock,
            minimum_stock_level: None,
        }
    }

    pub fn with_minimum_stock_level(mut self, level: u32) -> Self {
        self.minimum_stock_level = Some(level);
        self
    }

    /// Status the product will have right after creation.
    pub fn expected_status(&self) -> StockStatus {
        StockStatus::classify(self.current_stock, self.minimum_stock_level)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.product_name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Ok(())
    }
}
