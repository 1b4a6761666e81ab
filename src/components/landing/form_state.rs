//! 采购单表头表单状态
//!
//! 将零散的 signal 整合为 `OrderFormState` 结构体，负责：
//! - 数据的持有与重置
//! - 快照与校验后转换为请求对象
//!
//! 使用 `RwSignal` 因为它实现了 `Copy`，适合在组件间作为 Props 传递。

use chrono::NaiveDate;
use leptos::prelude::*;
use mts_purchase_shared::{CreateOrderRequest, OrderItemRequest};

use crate::util;

/// 表头表单状态
#[derive(Clone, Copy)]
pub struct OrderFormState {
    pub seller_id: RwSignal<String>,
    pub order_date: RwSignal<String>,
    pub invoice_number: RwSignal<String>,
    pub remarks: RwSignal<String>,
}

impl OrderFormState {
    pub fn new() -> Self {
        Self {
            seller_id: RwSignal::new(String::new()),
            order_date: RwSignal::new(util::today().to_string()),
            invoice_number: RwSignal::new(String::new()),
            remarks: RwSignal::new(String::new()),
        }
    }

    /// 重置到初始状态（日期回到今天）
    pub fn reset(&self) {
        self.seller_id.set(String::new());
        self.order_date.set(util::today().to_string());
        self.invoice_number.set(String::new());
        self.remarks.set(String::new());
    }

    /// 编辑对话框载入已有单据
    pub fn load(&self, seller_id: i64, order_date: NaiveDate, invoice: Option<String>, remarks: Option<String>) {
        self.seller_id.set(seller_id.to_string());
        self.order_date.set(order_date.to_string());
        self.invoice_number.set(invoice.unwrap_or_default());
        self.remarks.set(remarks.unwrap_or_default());
    }

    pub fn snapshot(&self) -> OrderFormSnapshot {
        OrderFormSnapshot {
            seller_id: self.seller_id.get_untracked(),
            order_date: self.order_date.get_untracked(),
            invoice_number: self.invoice_number.get_untracked(),
            remarks: self.remarks.get_untracked(),
        }
    }
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// 表头字段的纯数据快照
#[derive(Debug, Clone, Default)]
pub struct OrderFormSnapshot {
    pub seller_id: String,
    pub order_date: String,
    pub invoice_number: String,
    pub remarks: String,
}

/// 单行输入的纯数据快照
#[derive(Debug, Clone, Default)]
pub struct LineItemInput {
    pub variant_id: String,
    pub quantity: String,
    pub rate_per_unit: String,
}

const VALIDATION_MESSAGE: &str = "Please provide seller, date, and at least one valid item.";

/// 从表单快照构造请求对象
///
/// 未通过最小必填校验（卖家、日期、至少一条有效行）时返回
/// 面向用户的错误文案；无效行在此处静默过滤。
pub fn build_order_request(
    form: &OrderFormSnapshot,
    items: &[LineItemInput],
) -> Result<CreateOrderRequest, String> {
    let seller_id = form
        .seller_id
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0);
    let order_date = NaiveDate::parse_from_str(form.order_date.trim(), "%Y-%m-%d").ok();

    let items: Vec<OrderItemRequest> = items
        .iter()
        .filter_map(|item| {
            let variant_id = item.variant_id.trim().parse::<i64>().ok().filter(|id| *id > 0)?;
            let quantity = item.quantity.trim().parse::<f64>().ok().filter(|q| *q > 0.0)?;
            let rate_per_unit = item
                .rate_per_unit
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite() && *r >= 0.0)?;
            Some(OrderItemRequest {
                variant_id,
                quantity,
                rate_per_unit,
            })
        })
        .collect();

    match (seller_id, order_date) {
        (Some(seller_id), Some(order_date)) if !items.is_empty() => Ok(CreateOrderRequest {
            seller_id,
            order_date,
            invoice_number: none_if_empty(&form.invoice_number),
            remarks: none_if_empty(&form.remarks),
            items,
        }),
        _ => Err(VALIDATION_MESSAGE.to_string()),
    }
}

fn none_if_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// =========================================================
// 单元测试 (Unit Tests)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> OrderFormSnapshot {
        OrderFormSnapshot {
            seller_id: "2".into(),
            order_date: "2026-08-03".into(),
            invoice_number: "INV-9".into(),
            remarks: String::new(),
        }
    }

    fn valid_item() -> LineItemInput {
        LineItemInput {
            variant_id: "9".into(),
            quantity: "3".into(),
            rate_per_unit: "2.5".into(),
        }
    }

    #[test]
    fn builds_request_from_valid_input() {
        let request = build_order_request(&valid_form(), &[valid_item()]).unwrap();
        assert_eq!(request.seller_id, 2);
        assert_eq!(request.order_date.to_string(), "2026-08-03");
        assert_eq!(request.invoice_number.as_deref(), Some("INV-9"));
        assert!(request.remarks.is_none());
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].rate_per_unit, 2.5);
    }

    #[test]
    fn incomplete_rows_are_filtered_out() {
        let rows = vec![
            valid_item(),
            LineItemInput {
                variant_id: String::new(),
                quantity: "3".into(),
                rate_per_unit: "2".into(),
            },
            LineItemInput {
                variant_id: "4".into(),
                quantity: "nope".into(),
                rate_per_unit: "2".into(),
            },
        ];
        let request = build_order_request(&valid_form(), &rows).unwrap();
        assert_eq!(request.items.len(), 1);
    }

    #[test]
    fn missing_seller_fails_validation() {
        let mut form = valid_form();
        form.seller_id = String::new();
        assert!(build_order_request(&form, &[valid_item()]).is_err());
    }

    #[test]
    fn bad_date_fails_validation() {
        let mut form = valid_form();
        form.order_date = "03/08/2026".into();
        assert!(build_order_request(&form, &[valid_item()]).is_err());
    }

    #[test]
    fn all_rows_invalid_fails_validation() {
        let row = LineItemInput {
            variant_id: "9".into(),
            quantity: "0".into(),
            rate_per_unit: "2".into(),
        };
        assert!(build_order_request(&valid_form(), &[row]).is_err());
    }
}
