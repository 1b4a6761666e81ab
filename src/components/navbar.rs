//! 应用外壳：侧边导航 + 顶栏
//!
//! 登录页之外的视图共用这层外壳；视图内容由路由出口填入 `#route-root`。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::{LogoutIcon, UserIcon};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
fn NavLink(route: AppRoute, active: AppRoute, label: &'static str) -> impl IntoView {
    view! {
        <a class="sidebar-link" class:active=move || active == route href=route.to_hash()>
            <span>{label}</span>
        </a>
    }
}

#[component]
pub fn AppShell(active: AppRoute, content: AnyView) -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let router = use_router();

    let username = move || {
        auth.session_signal()
            .get()
            .map(|session| session.username)
            .unwrap_or_else(|| "User".to_string())
    };

    let on_logout = move |_| {
        let api = api.clone();
        spawn_local(async move {
            // 先带着当前令牌通知后端，再清理本地会话；
            // 重定向由下一次导航事件里的守卫完成
            if let Err(error) = api.logout().await {
                tracing::debug!(%error, "logout call failed, clearing local session anyway");
            }
            auth.save(None);
            router.navigate(AppRoute::Login);
        });
    };

    view! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="sidebar-brand-wrap">
                    <div class="sidebar-brand-title">"Sah and Sons Group"</div>
                    <div class="sidebar-brand-sub">"With blessings of Maa Tara"</div>
                </div>
                <div class="sidebar-group">
                    <div class="sidebar-group-title">"Menu"</div>
                    <NavLink route=AppRoute::Landing active=active label="Landing" />
                    <NavLink route=AppRoute::Maintenance active=active label="Maintenance" />
                    <NavLink route=AppRoute::Reports active=active label="Reporting" />
                </div>
            </aside>
            <div class="main-col">
                <header class="nav topbar">
                    <div class="topbar-copy">
                        <div class="nav-title">{active.title()}</div>
                        <div class="muted">"MTS purchase operations and analytics"</div>
                    </div>
                    <div class="topbar-actions">
                        <span class="user-chip" title=username>
                            <UserIcon />
                            <span class="user-chip-name">{username}</span>
                        </span>
                        <button
                            class="icon-btn"
                            type="button"
                            title="Logout"
                            aria-label="Logout"
                            on:click=on_logout
                        >
                            <LogoutIcon />
                        </button>
                    </div>
                </header>
                <div id="route-root">{content}</div>
            </div>
        </div>
    }
}
