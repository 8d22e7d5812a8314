//! Stock status classification.

use serde::{Deserialize, Serialize};

use stockroom_core::DomainError;

/// Health of a product's stock.
///
/// Exactly one variant holds for any product at any time. On the wire the
/// status travels as its numeric code (`0`, `1`, `2`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StockStatus {
    /// Stock is above the minimum level (or no minimum is configured).
    InStock,
    /// Stock is above zero but at or below the minimum level.
    LowStock,
    /// Stock is exactly zero.
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    /// Classify a stock quantity against an optional minimum level.
    ///
    /// Zero always wins over the threshold check, so a product with
    /// `minimum_stock_level = Some(0)` is never `LowStock`.
    pub fn classify(current_stock: u32, minimum_stock_level: Option<u32>) -> Self {
        if current_stock == 0 {
            return StockStatus::OutOfStock;
        }
        match minimum_stock_level {
            Some(min) if current_stock <= min => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            StockStatus::InStock => 0,
            StockStatus::LowStock => 1,
            StockStatus::OutOfStock => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(StockStatus::InStock),
            1 => Some(StockStatus::LowStock),
            2 => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    /// Human label shown next to a product (`statusText`).
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<StockStatus> for u8 {
    fn from(value: StockStatus) -> Self {
        value.code()
    }
}

impl TryFrom<u8> for StockStatus {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        StockStatus::from_code(value)
            .ok_or_else(|| DomainError::validation(format!("unknown stock status code: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_stock_is_out_of_stock_regardless_of_threshold() {
        assert_eq!(StockStatus::classify(0, None), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(0, Some(0)), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(0, Some(5)), StockStatus::OutOfStock);
    }

    #[test]
    fn stock_at_threshold_is_low() {
        assert_eq!(StockStatus::classify(5, Some(5)), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(1, Some(5)), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(6, Some(5)), StockStatus::InStock);
    }

    #[test]
    fn missing_threshold_never_reports_low_stock() {
        assert_eq!(StockStatus::classify(1, None), StockStatus::InStock);
        assert_eq!(StockStatus::classify(u32::MAX, None), StockStatus::InStock);
    }

    #[test]
    fn codes_round_trip_and_reject_unknown() {
        for status in StockStatus::ALL {
            assert_eq!(StockStatus::from_code(status.code()), Some(status));
        }
        assert!(StockStatus::try_from(3u8).is_err());
        assert!(serde_json::from_str::<StockStatus>("9").is_err());
        assert_eq!(serde_json::to_string(&StockStatus::LowStock).unwrap(), "1");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: without a threshold, only zero stock is flagged.
        #[test]
        fn absent_threshold_is_out_iff_zero(stock in any::<u32>()) {
            let status = StockStatus::classify(stock, None);
            if stock == 0 {
                prop_assert_eq!(status, StockStatus::OutOfStock);
            } else {
                prop_assert_eq!(status, StockStatus::InStock);
            }
        }

        /// Property: with a threshold, the three outcomes partition the domain.
        #[test]
        fn present_threshold_partitions_outcomes(stock in any::<u32>(), min in any::<u32>()) {
            let status = StockStatus::classify(stock, Some(min));
            let expected = if stock == 0 {
                StockStatus::OutOfStock
            } else if stock <= min {
                StockStatus::LowStock
            } else {
                StockStatus::InStock
            };
            prop_assert_eq!(status, expected);
        }
    }
}
