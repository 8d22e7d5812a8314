//! Dashboard summary over a product snapshot.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::status::StockStatus;

/// Headline counts shown on the dashboard.
///
/// Derived on demand; never cached or persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_product_count: usize,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

impl DashboardData {
    /// Summarize a snapshot of products.
    pub fn from_products(products: &[Product]) -> Self {
        products
            .iter()
            .fold(DashboardData::default(), |mut acc, product| {
                acc.total_product_count += 1;
                match product.status() {
                    StockStatus::LowStock => acc.low_stock_count += 1,
                    StockStatus::OutOfStock => acc.out_of_stock_count += 1,
                    StockStatus::InStock => {}
                }
                acc
            })
    }

    /// Products that need no attention.
    pub fn in_stock_count(&self) -> usize {
        self.total_product_count - self.low_stock_count - self.out_of_stock_count
    }

    pub fn count_for(&self, status: StockStatus) -> usize {
        match status {
            StockStatus::InStock => self.in_stock_count(),
            StockStatus::LowStock => self.low_stock_count,
            StockStatus::OutOfStock => self.out_of_stock_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_core::ProductId;

    fn product(id: u64, stock: u32, min: Option<u32>) -> Product {
        let p = Product::new(ProductId::new(id), format!("Item {id}"), stock);
        match min {
            Some(level) => p.with_minimum_stock_level(level),
            None => p,
        }
    }

    #[test]
    fn empty_snapshot_yields_zeroes() {
        assert_eq!(DashboardData::from_products(&[]), DashboardData::default());
    }

    #[test]
    fn mixed_snapshot() {
        let products = vec![
            product(1, 0, Some(5)),
            product(2, 3, Some(5)),
            product(3, 10, Some(5)),
        ];
        let statuses: Vec<_> = products.iter().map(Product::status).collect();
        assert_eq!(
            statuses,
            vec![StockStatus::OutOfStock, StockStatus::LowStock, StockStatus::InStock]
        );

        let data = DashboardData::from_products(&products);
        assert_eq!(
            data,
            DashboardData {
                total_product_count: 3,
                low_stock_count: 1,
                out_of_stock_count: 1,
            }
        );
        assert_eq!(data.in_stock_count(), 1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let data = DashboardData {
            total_product_count: 4,
            low_stock_count: 2,
            out_of_stock_count: 1,
        };
        assert_eq!(
            serde_json::to_value(data).unwrap(),
            serde_json::json!({
                "totalProductCount": 4,
                "lowStockCount": 2,
                "outOfStockCount": 1
            })
        );
    }

    fn arb_product() -> impl Strategy<Value = (u32, Option<u32>)> {
        (0u32..50, prop::option::of(0u32..50))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: counts agree with per-product classification and never exceed the total.
        #[test]
        fn counts_match_classification(rows in prop::collection::vec(arb_product(), 0..40)) {
            let products: Vec<Product> = rows
                .iter()
                .enumerate()
                .map(|(i, (stock, min))| product(i as u64, *stock, *min))
                .collect();

            let data = DashboardData::from_products(&products);
            let zeros = rows.iter().filter(|(stock, _)| *stock == 0).count();

            prop_assert_eq!(data.total_product_count, products.len());
            prop_assert_eq!(data.out_of_stock_count, zeros);
            prop_assert_eq!(
                data.low_stock_count,
                products.iter().filter(|p| p.status() == StockStatus::LowStock).count()
            );
            prop_assert_eq!(
                StockStatus::ALL.iter().map(|s| data.count_for(*s)).sum::<usize>(),
                data.total_product_count
            );
        }

        /// Property: summarizing the same snapshot twice gives the same result.
        #[test]
        fn aggregation_is_idempotent(rows in prop::collection::vec(arb_product(), 0..20)) {
            let products: Vec<Product> = rows
                .iter()
                .enumerate()
                .map(|(i, (stock, min))| product(i as u64, *stock, *min))
                .collect();

            prop_assert_eq!(
                DashboardData::from_products(&products),
                DashboardData::from_products(&products)
            );
        }
    }
}
