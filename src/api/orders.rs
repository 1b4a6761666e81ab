//! 采购单端点

use chrono::NaiveDate;
use gloo_net::http::Method;
use mts_purchase_shared::{CreateOrderRequest, PurchaseOrder};

use super::{ApiClient, ApiError, endpoints, with_query};

impl ApiClient {
    /// 指定日期的采购单列表
    pub async fn orders_for_date(&self, date: NaiveDate) -> Result<Vec<PurchaseOrder>, ApiError> {
        let path = with_query(
            endpoints::PURCHASE_ORDERS,
            &[("date", Some(date.to_string()))],
        );
        self.request_data_or_default(Method::GET, &path, None).await
    }

    pub async fn order_by_id(&self, order_id: i64) -> Result<PurchaseOrder, ApiError> {
        self.request_data(Method::GET, &endpoints::purchase_order_by_id(order_id), None)
            .await
    }

    /// 新建草稿，返回创建后的单据（含 orderId）
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<PurchaseOrder, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request_data(Method::POST, endpoints::PURCHASE_ORDERS, Some(&body))
            .await
    }

    /// 整体覆盖草稿内容（仅草稿允许，由后端强制）
    pub async fn update_order(
        &self,
        order_id: i64,
        request: &CreateOrderRequest,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(
            Method::PUT,
            &endpoints::purchase_order_by_id(order_id),
            Some(&body),
        )
        .await
    }

    pub async fn delete_order(&self, order_id: i64) -> Result<(), ApiError> {
        self.send(Method::DELETE, &endpoints::purchase_order_by_id(order_id), None)
            .await
    }

    pub async fn confirm_order(&self, order_id: i64) -> Result<(), ApiError> {
        self.send(Method::PATCH, &endpoints::confirm_purchase_order(order_id), None)
            .await
    }
}
