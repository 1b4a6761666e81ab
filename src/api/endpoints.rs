//! 端点路径表
//!
//! 带参数的资源用构建函数表达；路径表与解析出的 base 一样，
//! 进程生命周期内只读。

pub const AUTH_SETUP: &str = "/api/auth/setup";
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_ME: &str = "/api/auth/me";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
// 注册验证码端点的具体路径由后端定义，此处跟随当前部署
pub const AUTH_REGISTER_REQUEST_OTP: &str = "/api/auth/register/request-otp";
pub const AUTH_REGISTER_VERIFY_OTP: &str = "/api/auth/register/verify-otp";

pub const SELLERS: &str = "/api/sellers";
pub const SELLERS_ALL: &str = "/api/sellers/all";
pub const UNITS: &str = "/api/units";
pub const PRODUCT_TYPES: &str = "/api/product-types";
pub const PRODUCTS: &str = "/api/products";

pub fn product_variants(product_id: i64) -> String {
    format!("/api/products/{product_id}/variants")
}

pub fn variant_by_id(variant_id: i64) -> String {
    format!("/api/variants/{variant_id}")
}

pub const PURCHASE_ORDERS: &str = "/api/purchase-orders";

pub fn purchase_order_by_id(order_id: i64) -> String {
    format!("/api/purchase-orders/{order_id}")
}

pub fn confirm_purchase_order(order_id: i64) -> String {
    format!("/api/purchase-orders/{order_id}/confirm")
}

pub const REPORTS_DAILY_TREND: &str = "/api/reports/trends/daily-purchase";
pub const REPORTS_TOP_PRODUCTS: &str = "/api/reports/trends/top-products";
pub const REPORTS_TOP_SELLERS: &str = "/api/reports/trends/top-sellers";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterized_paths_embed_ids() {
        assert_eq!(product_variants(7), "/api/products/7/variants");
        assert_eq!(variant_by_id(12), "/api/variants/12");
        assert_eq!(purchase_order_by_id(3), "/api/purchase-orders/3");
        assert_eq!(confirm_purchase_order(3), "/api/purchase-orders/3/confirm");
    }
}
