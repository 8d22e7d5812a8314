//! Stock movements: the audit trail of quantity changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{MovementId, ProductId};

/// Kind of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockMovementKind {
    /// Stock increase (purchase, restock, initial stock).
    #[serde(rename = "stock_in")]
    StockIn,
    /// Stock decrease (sale, damage, loss).
    #[serde(rename = "stock_out")]
    StockOut,
    /// Stock set aside for a pending order.
    #[serde(rename = "reserve_stock")]
    Reserve,
}

impl StockMovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockMovementKind::StockIn => "stock_in",
            StockMovementKind::StockOut => "stock_out",
            StockMovementKind::Reserve => "reserve_stock",
        }
    }

    /// Effect of a movement of this kind on `currentStock`.
    ///
    /// Reservations do not change the on-hand quantity.
    pub fn signed(&self, quantity: u32) -> i64 {
        match self {
            StockMovementKind::StockIn => i64::from(quantity),
            StockMovementKind::StockOut => -i64::from(quantity),
            StockMovementKind::Reserve => 0,
        }
    }
}

/// A recorded stock movement, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub movement_type: StockMovementKind,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

/// Timestamps arrive either as RFC 3339 or as naive ISO 8601 (server local
/// time without offset). Naive values are taken as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, de::Error};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(D::Error::custom)
    }
}

/// Outcome of applying a movement to a product locally.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub product_id: ProductId,
    pub kind: StockMovementKind,
    pub quantity: u32,
    pub previous_stock: u32,
    pub current_stock: u32,
}

/// Net change in on-hand stock across a movement history.
pub fn net_change(movements: &[StockMovement]) -> i64 {
    movements
        .iter()
        .map(|m| m.movement_type.signed(m.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn movement(kind: StockMovementKind, quantity: u32) -> StockMovement {
        StockMovement {
            id: MovementId::new(1),
            product_id: ProductId::new(10),
            movement_type: kind,
            quantity,
            note: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn kind_uses_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&StockMovementKind::Reserve).unwrap(),
            "\"reserve_stock\""
        );
        let kind: StockMovementKind = serde_json::from_str("\"stock_out\"").unwrap();
        assert_eq!(kind, StockMovementKind::StockOut);
        assert_eq!(kind.as_str(), "stock_out");
    }

    #[test]
    fn net_change_ignores_reservations() {
        let history = vec![
            movement(StockMovementKind::StockIn, 20),
            movement(StockMovementKind::StockOut, 5),
            movement(StockMovementKind::Reserve, 3),
        ];
        assert_eq!(net_change(&history), 15);
        assert_eq!(net_change(&[]), 0);
    }

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "id": 3,
            "productId": 10,
            "movementType": "stock_in",
            "quantity": 12,
            "note": "Initial Stock of Widget",
            "createdAt": "2025-01-01T12:00:00Z"
        }"#;
        let m: StockMovement = serde_json::from_str(json).unwrap();
        assert_eq!(m.product_id, ProductId::new(10));
        assert_eq!(m.movement_type, StockMovementKind::StockIn);
        assert_eq!(m.note.as_deref(), Some("Initial Stock of Widget"));
    }

    #[test]
    fn accepts_naive_timestamps_as_utc() {
        let json = r#"{
            "id": 4,
            "productId": 10,
            "movementType": "stock_out",
            "quantity": 1,
            "createdAt": "2025-01-01T12:00:00.250000"
        }"#;
        let m: StockMovement = serde_json::from_str(json).unwrap();
        assert_eq!(m.created_at.timestamp(), 1_735_732_800);
        assert!(m.note.is_none());
    }
}
