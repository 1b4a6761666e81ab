//! MTS 采购面板前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，纯转移函数 + 驱动）
//! - `config`: API base / 环境解析（启动时一次）
//! - `api`: REST 客户端（按资源分模块）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

pub mod api;
pub mod auth;
pub mod config;
pub mod logging;

mod serde_helper;
mod util;

mod components {
    pub mod icons;
    pub mod landing;
    pub mod login;
    pub mod maintenance;
    pub mod navbar;
    pub mod reports;
    pub mod toast;
}

// 浏览器原生 API 封装模块
pub(crate) mod web {
    pub mod chart;
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::maintenance::MaintenancePage;
use crate::components::navbar::AppShell;
use crate::components::reports::ReportsPage;
use crate::components::toast::{ToastContext, ToastHost};
use crate::web::chart::ChartRegistry;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 登录页全页渲染；其余视图套在应用外壳里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Landing => shell(route, view! { <LandingPage /> }.into_any()),
        AppRoute::Maintenance => shell(route, view! { <MaintenancePage /> }.into_any()),
        AppRoute::Reports => shell(route, view! { <ReportsPage /> }.into_any()),
    }
}

fn shell(active: AppRoute, content: AnyView) -> AnyView {
    view! { <AppShell active=active content=content /> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 基础上下文：认证（从 sessionStorage 播种）、通知、图表句柄
    let auth = AuthContext::new();
    provide_context(auth);
    provide_context(ToastContext::new());
    provide_context(ChartRegistry::new());

    // 2. 解析运行时配置并构造 API 客户端
    let runtime = config::from_browser();
    let api = ApiClient::new(runtime.api_base, auth);
    provide_context(api.clone());

    // 3. 有持久化会话时后台校验令牌；失效由 401 副作用清空会话，
    //    当前视图保持挂载，下一次导航事件重新评估守卫
    if auth.session().is_some() {
        spawn_local(async move {
            if let Err(error) = api.me().await {
                tracing::info!(%error, "stored session rejected by backend");
            }
        });
    }

    // 4. 路由器注入认证信号实现守卫
    let is_authenticated = auth.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <ToastHost />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
