//! 当月采购金额按商品类型的分布
//!
//! 汇总是纯函数：以商品名（忽略大小写）关联商品主数据拿类型，
//! 关联不上的归入 "Others"。

use std::cmp::Ordering;
use std::collections::HashMap;

use mts_purchase_shared::{Product, PurchaseOrder};
use serde_json::{Value, json};

use crate::web::chart::{ChartRegistry, render_chart};

const PALETTE: [&str; 7] = [
    "#0e67d0", "#29a36a", "#d18b0e", "#8a5bd6", "#ca4f87", "#00a3a3", "#6c7a89",
];

/// 类型名 → 当月采购金额，按金额降序
pub fn monthly_type_totals(
    products: &[Product],
    orders: &[PurchaseOrder],
) -> Vec<(String, f64)> {
    let type_by_product: HashMap<String, String> = products
        .iter()
        .map(|product| {
            (
                product.product_name.trim().to_lowercase(),
                product
                    .type_name
                    .clone()
                    .unwrap_or_else(|| "Others".to_string()),
            )
        })
        .collect();

    let mut by_type: HashMap<String, f64> = HashMap::new();
    for order in orders {
        for item in order.items.iter().flatten() {
            let key = item
                .product_name
                .as_deref()
                .unwrap_or("")
                .trim()
                .to_lowercase();
            let type_name = type_by_product
                .get(&key)
                .cloned()
                .unwrap_or_else(|| "Others".to_string());
            let line_value = item.line_total;
            if !line_value.is_finite() || line_value <= 0.0 {
                continue;
            }
            *by_type.entry(type_name).or_default() += line_value;
        }
    }

    let mut totals: Vec<(String, f64)> = by_type.into_iter().collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    totals
}

/// 总金额（饼图旁的汇总面板）
pub fn monthly_total(totals: &[(String, f64)]) -> f64 {
    totals.iter().map(|(_, value)| value).sum()
}

/// 饼图配置；没有数据时画一块中性色占位
pub fn type_split_config(totals: &[(String, f64)]) -> Value {
    let (labels, values): (Vec<&str>, Vec<f64>) = totals
        .iter()
        .map(|(name, value)| (name.as_str(), (value * 100.0).round() / 100.0))
        .unzip();

    let (labels, values, colors): (Vec<&str>, Vec<f64>, Vec<&str>) = if labels.is_empty() {
        (vec!["No Data"], vec![1.0], vec!["#d9e2ef"])
    } else {
        let colors = (0..labels.len())
            .map(|index| PALETTE[index % PALETTE.len()])
            .collect();
        (labels, values, colors)
    };

    json!({
        "type": "pie",
        "data": {
            "labels": labels,
            "datasets": [{
                "data": values,
                "backgroundColor": colors,
                "borderColor": "#ffffff",
                "borderWidth": 2,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "position": "bottom", "labels": { "boxWidth": 14 } },
            },
        },
    })
}

/// 渲染当月类型分布饼图
pub fn render_monthly_type_chart(
    registry: &ChartRegistry,
    products: &[Product],
    orders: &[PurchaseOrder],
) {
    let totals = monthly_type_totals(products, orders);
    render_chart(
        registry,
        "monthly-type-split",
        "chart-monthly-type-split",
        &type_split_config(&totals),
    );
}

// =========================================================
// 单元测试 (Unit Tests)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;
    use mts_purchase_shared::{OrderItem, OrderStatus};

    fn product(name: &str, type_name: Option<&str>) -> Product {
        Product {
            product_id: 1,
            product_name: name.to_string(),
            type_id: None,
            type_name: type_name.map(str::to_string),
            description: None,
            variants: None,
        }
    }

    fn order_with_items(items: Vec<OrderItem>) -> PurchaseOrder {
        PurchaseOrder {
            order_id: 1,
            seller_id: 1,
            seller_name: None,
            order_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            invoice_number: None,
            remarks: None,
            status: OrderStatus::Confirmed,
            total_amount: 0.0,
            items: Some(items),
        }
    }

    fn item(product_name: &str, line_total: f64) -> OrderItem {
        OrderItem {
            variant_id: 1,
            product_name: Some(product_name.to_string()),
            variant_label: None,
            unit_abbr: None,
            quantity: 1.0,
            rate_per_unit: line_total,
            line_total,
        }
    }

    #[test]
    fn totals_group_by_type_case_insensitively() {
        let products = vec![product("Rice", Some("Grains")), product("Oil", Some("Oils"))];
        let orders = vec![order_with_items(vec![
            item("rice", 10.0),
            item("RICE", 5.0),
            item("Oil", 7.5),
        ])];
        let totals = monthly_type_totals(&products, &orders);
        assert_eq!(totals[0], ("Grains".to_string(), 15.0));
        assert_eq!(totals[1], ("Oils".to_string(), 7.5));
    }

    #[test]
    fn unknown_products_fall_into_others_and_junk_lines_are_skipped() {
        let products = vec![product("Rice", Some("Grains"))];
        let orders = vec![order_with_items(vec![
            item("Mystery", 4.0),
            item("Rice", -2.0),
            item("Rice", 0.0),
        ])];
        let totals = monthly_type_totals(&products, &orders);
        assert_eq!(totals, vec![("Others".to_string(), 4.0)]);
    }

    #[test]
    fn config_has_placeholder_when_empty() {
        let config = type_split_config(&[]);
        assert_eq!(config["data"]["labels"][0], "No Data");
        assert_eq!(config["data"]["datasets"][0]["data"][0], 1.0);
    }

    #[test]
    fn monthly_total_sums_all_types() {
        let totals = vec![("A".to_string(), 1.5), ("B".to_string(), 2.25)];
        assert_eq!(monthly_total(&totals), 3.75);
    }
}
