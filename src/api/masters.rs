//! 主数据端点（卖家 / 单位 / 商品类型 / 商品与规格）

use gloo_net::http::Method;
use mts_purchase_shared::{
    CreateProductRequest, CreateProductTypeRequest, CreateSellerRequest, CreateUnitRequest,
    CreateVariantRequest, Product, ProductType, Seller, Unit, Variant,
};

use super::{ApiClient, ApiError, endpoints, with_query};

impl ApiClient {
    /// 活跃卖家（采购单表头下拉用）
    pub async fn sellers(&self) -> Result<Vec<Seller>, ApiError> {
        self.request_data_or_default(Method::GET, endpoints::SELLERS, None)
            .await
    }

    /// 全部卖家（含停用，维护页列表用）
    pub async fn sellers_all(&self) -> Result<Vec<Seller>, ApiError> {
        self.request_data_or_default(Method::GET, endpoints::SELLERS_ALL, None)
            .await
    }

    pub async fn create_seller(&self, request: &CreateSellerRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(Method::POST, endpoints::SELLERS, Some(&body)).await
    }

    pub async fn units(&self) -> Result<Vec<Unit>, ApiError> {
        self.request_data_or_default(Method::GET, endpoints::UNITS, None)
            .await
    }

    pub async fn create_unit(&self, request: &CreateUnitRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(Method::POST, endpoints::UNITS, Some(&body)).await
    }

    pub async fn product_types(&self) -> Result<Vec<ProductType>, ApiError> {
        self.request_data_or_default(Method::GET, endpoints::PRODUCT_TYPES, None)
            .await
    }

    pub async fn create_product_type(
        &self,
        request: &CreateProductTypeRequest,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(Method::POST, endpoints::PRODUCT_TYPES, Some(&body))
            .await
    }

    /// 商品列表；`include_variants` 时附带各商品的规格
    pub async fn products(&self, include_variants: bool) -> Result<Vec<Product>, ApiError> {
        let path = if include_variants {
            with_query(
                endpoints::PRODUCTS,
                &[("includeVariants", Some("true".to_string()))],
            )
        } else {
            endpoints::PRODUCTS.to_string()
        };
        self.request_data_or_default(Method::GET, &path, None).await
    }

    pub async fn create_product(&self, request: &CreateProductRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(Method::POST, endpoints::PRODUCTS, Some(&body)).await
    }

    /// 某商品的全部规格
    pub async fn product_variants(&self, product_id: i64) -> Result<Vec<Variant>, ApiError> {
        self.request_data_or_default(Method::GET, &endpoints::product_variants(product_id), None)
            .await
    }

    pub async fn add_variant(
        &self,
        product_id: i64,
        request: &CreateVariantRequest,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(
            Method::POST,
            &endpoints::product_variants(product_id),
            Some(&body),
        )
        .await
    }

    pub async fn variant_by_id(&self, variant_id: i64) -> Result<Variant, ApiError> {
        self.request_data(Method::GET, &endpoints::variant_by_id(variant_id), None)
            .await
    }
}
