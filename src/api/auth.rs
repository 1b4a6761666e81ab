//! 认证端点

use gloo_net::http::Method;
use mts_purchase_shared::{
    LoginRequest, RegisterRequestOtp, RegisterVerifyOtp, Session, SetupRequest,
};
use serde_json::json;

use super::{ApiClient, ApiError, endpoints};

impl ApiClient {
    /// 登录，成功返回新会话
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request_data(Method::POST, endpoints::AUTH_LOGIN, Some(&body))
            .await
    }

    /// 一次性初始凭据创建
    pub async fn setup(&self, request: &SetupRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(Method::POST, endpoints::AUTH_SETUP, Some(&body)).await
    }

    /// 校验当前令牌对应的身份；令牌失效时 401 副作用会清空会话
    pub async fn me(&self) -> Result<Session, ApiError> {
        self.request_data(Method::GET, endpoints::AUTH_ME, None).await
    }

    /// 通知后端注销（尽力而为，本地清理不依赖其结果）
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(Method::POST, endpoints::AUTH_LOGOUT, Some(&json!({})))
            .await
    }

    /// 注册：请求发送验证码，返回服务端提示语
    pub async fn register_request_otp(
        &self,
        request: &RegisterRequestOtp,
    ) -> Result<Option<String>, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let envelope: mts_purchase_shared::ApiEnvelope<serde_json::Value> = self
            .request(Method::POST, endpoints::AUTH_REGISTER_REQUEST_OTP, Some(&body))
            .await?;
        Ok(envelope.message)
    }

    /// 注册：校验验证码并创建凭据
    pub async fn register_verify_otp(
        &self,
        request: &RegisterVerifyOtp,
    ) -> Result<Option<String>, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let envelope: mts_purchase_shared::ApiEnvelope<serde_json::Value> = self
            .request(Method::POST, endpoints::AUTH_REGISTER_VERIFY_OTP, Some(&body))
            .await?;
        Ok(envelope.message)
    }
}
