//! 采购单模型 (Purchase Orders)
//!
//! 草稿（DRAFT）可编辑、可删除；已确认（CONFIRMED）只读。
//! 该生命周期由后端强制执行，客户端只反映允许的操作。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 采购单状态
///
/// 后端以大写字符串传输；未识别的状态按非草稿处理，
/// 以免对未知状态的单据展示可变操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Draft,
    Confirmed,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn is_draft(self) -> bool {
        matches!(self, OrderStatus::Draft)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Draft
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub order_id: i64,
    pub seller_id: i64,
    #[serde(default)]
    pub seller_name: Option<String>,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub items: Option<Vec<OrderItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub variant_id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub variant_label: Option<String>,
    #[serde(default)]
    pub unit_abbr: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub rate_per_unit: f64,
    #[serde(default)]
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub seller_id: i64,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub variant_id: i64,
    pub quantity: f64,
    pub rate_per_unit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes_uppercase_and_tolerates_unknown() {
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"DRAFT\"").unwrap(),
            OrderStatus::Draft
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"CONFIRMED\"").unwrap(),
            OrderStatus::Confirmed
        );
        let odd: OrderStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert!(!odd.is_draft());
    }

    #[test]
    fn order_decodes_with_iso_date() {
        let order: PurchaseOrder = serde_json::from_str(
            r#"{"orderId":7,"sellerId":2,"orderDate":"2026-08-03","status":"CONFIRMED","totalAmount":120.5}"#,
        )
        .unwrap();
        assert_eq!(order.order_date.to_string(), "2026-08-03");
        assert!(!order.status.is_draft());
        assert!(order.items.is_none());
    }

    #[test]
    fn create_request_serializes_camel_case() {
        let req = CreateOrderRequest {
            seller_id: 2,
            order_date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            invoice_number: None,
            remarks: Some("monthly stock".into()),
            items: vec![OrderItemRequest {
                variant_id: 9,
                quantity: 3.0,
                rate_per_unit: 2.5,
            }],
        };
        let raw = serde_json::to_string(&req).unwrap();
        assert!(raw.contains("\"sellerId\":2"));
        assert!(raw.contains("\"ratePerUnit\":2.5"));
        assert!(raw.contains("\"orderDate\":\"2026-08-03\""));
    }
}
