//! API 客户端
//!
//! 包装对采购后端的所有出站调用：注入 JSON 与 Bearer 头、
//! 把响应体统一按 JSON 解析、在 401 时清空会话。
//! 各资源的类型化方法按模块拆分（auth / masters / orders / reports）。

use gloo_net::http::{Method, RequestBuilder};
use leptos::prelude::*;
use mts_purchase_shared::ApiEnvelope;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::auth::AuthContext;

pub mod endpoints;

mod auth;
mod masters;
mod orders;
mod reports;

pub use reports::ReportRange;

/// 请求错误
///
/// 非 2xx 响应保留状态码与原始负载，调用方可据此分支。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 非 2xx 响应；message 优先取服务端的 message 字段
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        payload: Option<Value>,
    },
    /// fetch 本身失败（网络不可达、请求被拒绝等）
    #[error("network request failed: {0}")]
    Network(String),
    /// 2xx 但响应体不符合期望形状
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// API 客户端实例
///
/// base 在启动时由 [`crate::config`] 解析，进程内不变。
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, auth: AuthContext) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, auth }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }

    /// 发出请求并返回解析后的 JSON 负载
    ///
    /// 无论状态码如何都尝试解析响应体，解析失败得到 `None` 而非报错。
    /// 401 无条件清空会话（与调用方自身的成败无关），错误照常返回。
    async fn fetch_payload(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        extra_headers: &[(String, String)],
    ) -> Result<Option<Value>, ApiError> {
        let mut defaults = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(session) = self.auth.session() {
            defaults.push(("Authorization".to_string(), format!("Bearer {}", session.token)));
        }

        let mut builder = RequestBuilder::new(&self.url(path)).method(method);
        for (key, value) in merge_headers(defaults, extra_headers) {
            builder = builder.header(&key, &value);
        }

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let payload = match response.text().await {
            Ok(text) => serde_json::from_str::<Value>(&text).ok(),
            Err(_) => None,
        };

        if status == 401 {
            tracing::warn!(path, "unauthorized response, clearing session");
            self.auth.save(None);
        }

        if !(200..300).contains(&status) {
            return Err(ApiError::Status {
                status,
                message: error_message(status, payload.as_ref()),
                payload,
            });
        }

        Ok(payload)
    }

    /// 类型化请求：2xx 负载解码为 `T`（通常是 [`ApiEnvelope`]）
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let payload = self.fetch_payload(method, path, body, &[]).await?;
        serde_json::from_value(payload.unwrap_or(Value::Null))
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 只关心成败、忽略响应负载的请求（confirm / delete / logout 等）
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(), ApiError> {
        self.fetch_payload(method, path, body, &[]).await?;
        Ok(())
    }

    /// 取信封中的 data，列表端点缺失时回落为默认值
    async fn request_data_or_default<T: DeserializeOwned + Default>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let envelope: ApiEnvelope<T> = self.request(method, path, body).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// 取信封中的 data，对象端点缺失即视为契约破坏
    async fn request_data<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let envelope: ApiEnvelope<T> = self.request(method, path, body).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Decode(format!("missing data field in response from {path}")))
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}

/// 查询串辅助：仅追加既非缺失也非空串的参数，保持给定顺序
pub fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut query = String::new();
    for (key, value) in params {
        let Some(value) = value else { continue };
        if value.is_empty() {
            continue;
        }
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.push_str(&encode_component(value));
    }
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// 与 URLSearchParams 一致的最小转义：非未保留字节按 %XX 编码，空格按 +
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'*' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// 浅合并请求头：调用方提供的键覆盖默认键
fn merge_headers(
    defaults: Vec<(String, String)>,
    extra: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged = defaults;
    for (key, value) in extra {
        if let Some(slot) = merged.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            slot.1 = value.clone();
        } else {
            merged.push((key.clone(), value.clone()));
        }
    }
    merged
}

/// 错误消息：优先服务端 message 字段，否则报状态码
fn error_message(status: u16, payload: Option<&Value>) -> String {
    payload
        .and_then(|p| p.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

// =========================================================
// 单元测试 (Unit Tests)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn with_query_keeps_only_present_non_empty_params_in_order() {
        let path = with_query(
            "/api/things",
            &[
                ("a", Some("1".into())),
                ("b", Some(String::new())),
                ("c", None),
                ("d", None),
                ("e", Some("x".into())),
            ],
        );
        assert_eq!(path, "/api/things?a=1&e=x");
    }

    #[test]
    fn with_query_returns_path_unchanged_when_nothing_survives() {
        let path = with_query("/api/things", &[("a", None), ("b", Some(String::new()))]);
        assert_eq!(path, "/api/things");
    }

    #[test]
    fn with_query_encodes_reserved_characters() {
        let path = with_query("/api/things", &[("q", Some("a b&c".into()))]);
        assert_eq!(path, "/api/things?q=a+b%26c");
    }

    #[test]
    fn caller_headers_win_on_conflict() {
        let merged = merge_headers(
            vec![("Content-Type".into(), "application/json".into())],
            &[
                ("content-type".into(), "text/plain".into()),
                ("X-Extra".into(), "1".into()),
            ],
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].1, "text/plain");
        assert_eq!(merged[1], ("X-Extra".into(), "1".into()));
    }

    #[test]
    fn error_message_prefers_server_message() {
        let payload = json!({"message": "invoice already confirmed"});
        assert_eq!(error_message(409, Some(&payload)), "invoice already confirmed");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(503, None), "Request failed with status 503");
        let payload = json!({"message": 42});
        assert_eq!(
            error_message(500, Some(&payload)),
            "Request failed with status 500"
        );
    }
}
