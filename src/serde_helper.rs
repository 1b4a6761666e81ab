//! Rust 数据结构与 JsValue 之间的序列化辅助

use serde::Serialize;
use wasm_bindgen::JsValue;

/// 序列化错误
#[derive(Debug)]
pub struct Error(serde_wasm_bindgen::Error);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "serde wasm bindgen error: {}", self.0)
    }
}

impl std::error::Error for Error {}

/// 将 Rust 数据结构序列化为 JsValue
///
/// 大整数按 JS number 处理，避免 BigInt 进入 Chart.js 配置。
pub fn to_value<T: Serialize>(value: &T) -> Result<JsValue, Error> {
    let serializer =
        serde_wasm_bindgen::Serializer::new().serialize_large_number_types_as_bigints(false);
    value.serialize(&serializer).map_err(Error)
}
