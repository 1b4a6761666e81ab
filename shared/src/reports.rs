//! 报表模型 (Reports)
//!
//! 所有报表只统计已确认（CONFIRMED）的采购单。

use serde::{Deserialize, Serialize};

// =========================================================
// 每日采购趋势 (Daily Purchase Trend)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    #[serde(default)]
    pub total_purchase: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrend {
    #[serde(default)]
    pub points: Vec<TrendPoint>,
}

// =========================================================
// 商品采购量排行 (Top Products By Units)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRank {
    pub variant_label: String,
    #[serde(default)]
    pub total_units: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRank {
    pub product_name: String,
    #[serde(default)]
    pub total_units: f64,
    #[serde(default)]
    pub variants: Vec<VariantRank>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProducts {
    #[serde(default)]
    pub products: Vec<ProductRank>,
}

// =========================================================
// 卖家采购额排行 (Top Sellers By Purchase Value)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRank {
    pub seller_name: String,
    #[serde(default)]
    pub total_purchase: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellers {
    #[serde(default)]
    pub sellers: Vec<SellerRank>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_points_default_to_empty() {
        let trend: DailyTrend = serde_json::from_str("{}").unwrap();
        assert!(trend.points.is_empty());
    }

    #[test]
    fn product_rank_carries_variant_drill_down() {
        let rank: ProductRank = serde_json::from_str(
            r#"{"productName":"Rice","totalUnits":40,"variants":[{"variantLabel":"25kg","totalUnits":30}]}"#,
        )
        .unwrap();
        assert_eq!(rank.variants.len(), 1);
        assert_eq!(rank.variants[0].total_units, 30.0);
    }
}
