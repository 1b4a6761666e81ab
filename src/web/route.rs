//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 路由完全由 location 片段推导，除字符串本身外没有别的身份。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由，仅限未认证访问)
    #[default]
    Login,
    /// 采购单录入与当月历史 (需要认证)
    Landing,
    /// 主数据维护 (需要认证)
    Maintenance,
    /// 报表面板 (需要认证)
    Reports,
}

impl AppRoute {
    /// 将 location 片段解析为路由；未识别的片段返回 `None`，
    /// 由路由服务回落到默认跳转。
    pub fn from_hash(hash: &str) -> Option<Self> {
        match hash {
            // 空片段按登录页处理
            "" | "#" | "#/" | "#/login" => Some(Self::Login),
            "#/landing" => Some(Self::Landing),
            "#/maintenance" => Some(Self::Maintenance),
            "#/reports" => Some(Self::Reports),
            _ => None,
        }
    }

    /// 路由对应的 location 片段
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Login => "#/login",
            Self::Landing => "#/landing",
            Self::Maintenance => "#/maintenance",
            Self::Reports => "#/reports",
        }
    }

    /// **核心守卫逻辑：该路由是否需要认证**
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Login)
    }

    /// 顶栏标题
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Landing => "Purchase Dashboard",
            Self::Maintenance => "Maintenance",
            Self::Reports => "Reporting Dashboard",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trip() {
        for route in [
            AppRoute::Login,
            AppRoute::Landing,
            AppRoute::Maintenance,
            AppRoute::Reports,
        ] {
            assert_eq!(AppRoute::from_hash(route.to_hash()), Some(route));
        }
    }

    #[test]
    fn empty_fragment_is_login() {
        assert_eq!(AppRoute::from_hash(""), Some(AppRoute::Login));
        assert_eq!(AppRoute::from_hash("#/"), Some(AppRoute::Login));
    }

    #[test]
    fn unknown_fragment_is_none() {
        assert_eq!(AppRoute::from_hash("#/bogus"), None);
        assert_eq!(AppRoute::from_hash("#/landing/extra"), None);
    }

    #[test]
    fn only_login_skips_the_auth_gate() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(AppRoute::Landing.requires_auth());
        assert!(AppRoute::Maintenance.requires_auth());
        assert!(AppRoute::Reports.requires_auth());
    }
}
