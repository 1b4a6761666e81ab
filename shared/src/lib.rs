//! MTS 采购系统共享数据模型
//!
//! 前端与采购后端 REST 服务之间的线上契约（wire contract）。
//! 所有字段名与后端 JSON 保持 camelCase 一致。

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod masters;
pub mod orders;
pub mod reports;

pub use auth::*;
pub use masters::*;
pub use orders::*;
pub use reports::*;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// sessionStorage 中会话的存储键
pub const AUTH_STORAGE_KEY: &str = "mts_finance_auth";
/// localStorage 中 API base 覆盖值的存储键
pub const API_BASE_STORAGE_KEY: &str = "mtsApiBase";
/// localStorage 中环境标签的存储键
pub const API_ENV_STORAGE_KEY: &str = "mtsEnv";

// =========================================================
// 响应信封 (Response Envelope)
// =========================================================

/// 后端统一响应信封：`{ data: ..., message?: string }`
///
/// `data` 的形状由各端点自行定义，错误响应中可能缺失。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_data_and_message() {
        let env: ApiEnvelope<Vec<i64>> =
            serde_json::from_str(r#"{"data":[1,2],"message":"ok"}"#).unwrap();
        assert_eq!(env.data, Some(vec![1, 2]));
        assert_eq!(env.message.as_deref(), Some("ok"));
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let env: ApiEnvelope<Vec<i64>> = serde_json::from_str("{}").unwrap();
        assert!(env.data.is_none());
        assert!(env.message.is_none());
    }
}
