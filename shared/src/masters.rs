//! 主数据模型 (Master Data)
//!
//! 卖家、单位、商品类型、商品与规格（variant）。
//! 列表端点返回的可选字段一律容错为默认值。

use serde::{Deserialize, Serialize};

// =========================================================
// 卖家 (Sellers)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub seller_id: i64,
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// 停用的卖家仍会出现在 /api/sellers/all 中
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSellerRequest {
    pub name: String,
    pub contact_person: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// =========================================================
// 单位 (Units)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub unit_id: i64,
    pub unit_name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitRequest {
    pub unit_name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub description: Option<String>,
}

// =========================================================
// 商品类型 (Product Types)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub type_id: i64,
    pub type_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductTypeRequest {
    pub type_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// =========================================================
// 商品与规格 (Products & Variants)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub type_id: Option<i64>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// 仅当列表请求带 includeVariants 时返回
    #[serde(default)]
    pub variants: Option<Vec<Variant>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_name: String,
    pub type_id: i64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub variant_id: i64,
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub unit_id: i64,
    pub variant_label: String,
    #[serde(default)]
    pub unit_name: Option<String>,
    #[serde(default)]
    pub unit_abbr: Option<String>,
    #[serde(default)]
    pub pack_size: f64,
    #[serde(default)]
    pub pieces_per_pack: i64,
    #[serde(default)]
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariantRequest {
    pub unit_id: i64,
    pub variant_label: String,
    pub pack_size: f64,
    pub pieces_per_pack: i64,
    #[serde(default)]
    pub barcode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seller_defaults_active_when_missing() {
        let seller: Seller =
            serde_json::from_str(r#"{"sellerId":3,"name":"Acme","contactPerson":"Ria"}"#)
                .unwrap();
        assert!(seller.active);
        assert!(seller.phone.is_none());
    }

    #[test]
    fn product_variants_optional() {
        let product: Product =
            serde_json::from_str(r#"{"productId":1,"productName":"Rice"}"#).unwrap();
        assert!(product.variants.is_none());

        let with: Product = serde_json::from_str(
            r#"{"productId":1,"productName":"Rice","variants":[{"variantId":9,"variantLabel":"25kg bag"}]}"#,
        )
        .unwrap();
        assert_eq!(with.variants.unwrap().len(), 1);
    }
}
