//! 认证相关模型
//!
//! 会话由登录/注册成功时整体创建，登出或后端 401 时整体销毁，
//! 从不原地修改。

use serde::{Deserialize, Serialize};

/// 客户端会话：认证令牌与身份
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 一次性初始凭据创建（首次部署时使用）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupRequest {
    pub username: String,
    pub password: String,
}

/// 注册第一步：请求发送一次性验证码
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestOtp {
    pub username: String,
    pub email: String,
}

/// 注册第二步：校验验证码并设置密码
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterVerifyOtp {
    pub username: String,
    pub otp: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trip_uses_camel_case() {
        let raw = r#"{"username":"ops","token":"t0k","expiresAt":"2026-09-01T00:00:00Z"}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.username, "ops");
        let back = serde_json::to_string(&session).unwrap();
        assert!(back.contains("\"expiresAt\""));
    }

    #[test]
    fn session_without_expiry_decodes() {
        let session: Session =
            serde_json::from_str(r#"{"username":"ops","token":"t0k"}"#).unwrap();
        assert!(session.expires_at.is_none());
    }
}
