//! API base 与环境解析
//!
//! 解析只在启动时发生一次，结果通过 Context 只读共享；
//! 修改任何覆盖源后需要整页刷新才会生效。
//!
//! API base 优先级：
//!   0) URL 查询参数 `?apiBase=...`
//!   1) 全局变量 `window.__MTS_API_BASE__`
//!   2) localStorage 键 `mtsApiBase`
//!   3) 环境标签映射（默认表可被 `window.__MTS_API_BASES__` 逐项覆盖）
//!   4) 按主机名推断
//!
//! 环境标签优先级：`?env=` → `window.__MTS_ENV__` → localStorage `mtsEnv`。
//! 首个命中的非空来源即生效，之后的来源不再参与。

use gloo_storage::Storage;
use js_sys::Reflect;
use mts_purchase_shared::{API_BASE_STORAGE_KEY, API_ENV_STORAGE_KEY};
use wasm_bindgen::JsValue;

pub const DEV_DEFAULT_BASE: &str = "http://localhost:8080";
pub const PROD_DEFAULT_BASE: &str = "https://mts-purchase-service-1.onrender.com";

/// 环境标签，只认 dev / prod；其余值（含历史遗留的 "uat"）视为未设置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEnv {
    Dev,
    Prod,
}

impl ApiEnv {
    fn parse(raw: Option<&str>) -> Option<Self> {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("dev") => Some(Self::Dev),
            Some("prod") => Some(Self::Prod),
            _ => None,
        }
    }
}

/// 部署侧对环境基址表的逐项覆盖
#[derive(Debug, Clone, Default)]
pub struct EnvBases {
    pub dev: Option<String>,
    pub prod: Option<String>,
}

/// 一次性采集到的全部解析输入
#[derive(Debug, Clone, Default)]
pub struct ResolutionInputs {
    pub query_api_base: Option<String>,
    pub runtime_api_base: Option<String>,
    pub storage_api_base: Option<String>,
    pub query_env: Option<String>,
    pub runtime_env: Option<String>,
    pub storage_env: Option<String>,
    pub env_bases: EnvBases,
    pub hostname: Option<String>,
}

/// 解析结果，进程生命周期内只读
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub api_base: String,
    pub env: Option<ApiEnv>,
}

/// 纯解析核心：对采集好的输入应用优先级链
pub fn resolve(inputs: &ResolutionInputs) -> RuntimeConfig {
    let env = ApiEnv::parse(inputs.query_env.as_deref())
        .or_else(|| ApiEnv::parse(inputs.runtime_env.as_deref()))
        .or_else(|| ApiEnv::parse(inputs.storage_env.as_deref()));

    let env_mapped = env.map(|env| match env {
        ApiEnv::Dev => non_empty(inputs.env_bases.dev.as_deref())
            .unwrap_or_else(|| DEV_DEFAULT_BASE.to_string()),
        ApiEnv::Prod => non_empty(inputs.env_bases.prod.as_deref())
            .unwrap_or_else(|| PROD_DEFAULT_BASE.to_string()),
    });

    let api_base = non_empty(inputs.query_api_base.as_deref())
        .or_else(|| non_empty(inputs.runtime_api_base.as_deref()))
        .or_else(|| non_empty(inputs.storage_api_base.as_deref()))
        .or(env_mapped)
        .unwrap_or_else(|| infer_from_host(inputs.hostname.as_deref()));

    RuntimeConfig { api_base, env }
}

/// 主机名推断兜底：回环地址走本地后端；托管商域名走生产；
/// 其余（手机/局域网联调）猜同主机的 8080 端口。
fn infer_from_host(hostname: Option<&str>) -> String {
    let host = match non_empty(hostname) {
        Some(host) => host,
        None => return DEV_DEFAULT_BASE.to_string(),
    };

    if host == "localhost" || host == "127.0.0.1" {
        return DEV_DEFAULT_BASE.to_string();
    }
    if host.ends_with("onrender.com") {
        return PROD_DEFAULT_BASE.to_string();
    }
    format!("http://{host}:8080")
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// 从浏览器环境采集输入并完成解析（仅在启动时调用一次）
pub fn from_browser() -> RuntimeConfig {
    let window = web_sys::window();
    let params = window
        .as_ref()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok());

    let inputs = ResolutionInputs {
        query_api_base: params.as_ref().and_then(|p| p.get("apiBase")),
        runtime_api_base: global_string("__MTS_API_BASE__"),
        storage_api_base: raw_storage_get(API_BASE_STORAGE_KEY),
        query_env: params.as_ref().and_then(|p| p.get("env")),
        runtime_env: global_string("__MTS_ENV__"),
        storage_env: raw_storage_get(API_ENV_STORAGE_KEY),
        env_bases: global_env_bases(),
        hostname: window.as_ref().and_then(|w| w.location().hostname().ok()),
    };

    let config = resolve(&inputs);
    tracing::info!(api_base = %config.api_base, env = ?config.env, "resolved runtime config");
    config
}

/// 运维写入 localStorage 的是裸字符串而非 JSON，所以绕过序列化层直接读
fn raw_storage_get(key: &str) -> Option<String> {
    gloo_storage::LocalStorage::raw().get_item(key).ok().flatten()
}

fn global_string(name: &str) -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
}

fn global_env_bases() -> EnvBases {
    let table = match Reflect::get(&js_sys::global(), &JsValue::from_str("__MTS_API_BASES__")) {
        Ok(value) if value.is_object() => value,
        _ => return EnvBases::default(),
    };
    let field = |name: &str| {
        Reflect::get(&table, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_string())
    };
    EnvBases {
        dev: field("dev"),
        prod: field("prod"),
    }
}

// =========================================================
// 单元测试 (Unit Tests)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_wins_over_everything() {
        let inputs = ResolutionInputs {
            query_api_base: Some("https://x".into()),
            runtime_api_base: Some("https://runtime".into()),
            storage_api_base: Some("https://stored".into()),
            query_env: Some("prod".into()),
            ..Default::default()
        };
        assert_eq!(resolve(&inputs).api_base, "https://x");
    }

    #[test]
    fn priority_chain_falls_through_in_order() {
        let mut inputs = ResolutionInputs {
            runtime_api_base: Some("https://runtime".into()),
            storage_api_base: Some("https://stored".into()),
            ..Default::default()
        };
        assert_eq!(resolve(&inputs).api_base, "https://runtime");

        inputs.runtime_api_base = None;
        assert_eq!(resolve(&inputs).api_base, "https://stored");
    }

    #[test]
    fn empty_overrides_are_skipped() {
        let inputs = ResolutionInputs {
            query_api_base: Some("   ".into()),
            runtime_api_base: Some(String::new()),
            storage_api_base: Some("https://stored".into()),
            ..Default::default()
        };
        assert_eq!(resolve(&inputs).api_base, "https://stored");
    }

    #[test]
    fn env_tag_maps_through_table_with_overrides() {
        let inputs = ResolutionInputs {
            query_env: Some("prod".into()),
            env_bases: EnvBases {
                prod: Some("https://prod-override".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let config = resolve(&inputs);
        assert_eq!(config.env, Some(ApiEnv::Prod));
        assert_eq!(config.api_base, "https://prod-override");
    }

    #[test]
    fn env_tag_resolution_has_its_own_priority() {
        let inputs = ResolutionInputs {
            runtime_env: Some("dev".into()),
            storage_env: Some("prod".into()),
            ..Default::default()
        };
        let config = resolve(&inputs);
        assert_eq!(config.env, Some(ApiEnv::Dev));
        assert_eq!(config.api_base, DEV_DEFAULT_BASE);
    }

    #[test]
    fn unknown_env_values_are_dropped() {
        assert_eq!(ApiEnv::parse(Some("uat")), None);
        assert_eq!(ApiEnv::parse(Some(" PROD ")), Some(ApiEnv::Prod));
        assert_eq!(ApiEnv::parse(None), None);
    }

    #[test]
    fn hostname_inference_fallback() {
        let by_host = |host: &str| {
            resolve(&ResolutionInputs {
                hostname: Some(host.into()),
                ..Default::default()
            })
            .api_base
        };
        assert_eq!(by_host("localhost"), DEV_DEFAULT_BASE);
        assert_eq!(by_host("127.0.0.1"), DEV_DEFAULT_BASE);
        assert_eq!(by_host("mts-dashboard.onrender.com"), PROD_DEFAULT_BASE);
        assert_eq!(by_host("192.168.1.20"), "http://192.168.1.20:8080");
    }

    #[test]
    fn missing_hostname_defaults_to_dev() {
        assert_eq!(resolve(&ResolutionInputs::default()).api_base, DEV_DEFAULT_BASE);
    }
}
