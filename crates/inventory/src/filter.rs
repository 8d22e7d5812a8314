//! Status filters and search used by the product list.

use serde::Serialize;

use crate::product::Product;
use crate::status::StockStatus;

/// A selectable status filter: display label plus discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockFilter {
    pub label: &'static str,
    pub value: StockStatus,
}

impl StockFilter {
    /// One filter per classifier outcome, ordered by `value`.
    pub const ALL: [StockFilter; 3] = [
        StockFilter {
            label: "In Stock",
            value: StockStatus::InStock,
        },
        StockFilter {
            label: "Low Stock",
            value: StockStatus::LowStock,
        },
        StockFilter {
            label: "Out of Stock",
            value: StockStatus::OutOfStock,
        },
    ];

    pub fn from_value(value: u8) -> Option<StockFilter> {
        StockFilter::ALL.into_iter().find(|f| f.value.code() == value)
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.status() == self.value
    }
}

/// Products whose derived status equals `status`, in input order.
pub fn filter_by_status(products: &[Product], status: StockStatus) -> Vec<&Product> {
    products.iter().filter(|p| p.status() == status).collect()
}

/// Combined search + optional status filter, as applied by the product list.
pub fn select<'a>(
    products: &'a [Product],
    filter: Option<StockFilter>,
    query: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| filter.is_none_or(|f| f.matches(p)))
        .filter(|p| p.matches_search(query))
        .collect()
}
