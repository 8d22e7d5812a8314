use serde::{Deserialize, Serialize};

use crate::movement::StockMovementKind;

/// Which dialog is open over a product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductModalMode {
    View,
    Edit,
    Restock,
    StockOut,
}

impl ProductModalMode {
    pub fn title(&self) -> &'static str {
        match self {
            ProductModalMode::View => "Product details",
            ProductModalMode::Edit => "Edit product",
            ProductModalMode::Restock => "Restock",
            ProductModalMode::StockOut => "Stock out",
        }
    }

    /// Movement submitted when the dialog is confirmed, if any.
    pub fn movement(&self) -> Option<StockMovementKind> {
        match self {
            ProductModalMode::Restock => Some(StockMovementKind::StockIn),
            ProductModalMode::StockOut => Some(StockMovementKind::StockOut),
            ProductModalMode::View | ProductModalMode::Edit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_ui_modes() {
        assert_eq!(
            serde_json::to_string(&ProductModalMode::StockOut).unwrap(),
            "\"stockOut\""
        );
        let mode: ProductModalMode = serde_json::from_str("\"restock\"").unwrap();
        assert_eq!(mode.movement(), Some(StockMovementKind::StockIn));
        assert_eq!(ProductModalMode::View.movement(), None);
    }
}
