//! 认证状态管理
//!
//! 会话缓存在内存信号中，持久化到 sessionStorage；
//! 读取永远走内存，存储只在进程启动时读一次做种子。
//! 路由守卫通过注入的认证信号检查状态，与本模块解耦。

use gloo_storage::{SessionStorage, Storage};
use leptos::prelude::*;
use mts_purchase_shared::{AUTH_STORAGE_KEY, Session};

/// 认证上下文
///
/// 信号对实现 `Copy`，可直接在组件与闭包之间传递。
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: ReadSignal<Option<Session>>,
    set_state: WriteSignal<Option<Session>>,
}

impl AuthContext {
    /// 创建并从 sessionStorage 播种；损坏的持久化值按未登录处理
    pub fn new() -> Self {
        let seed = SessionStorage::get::<Session>(AUTH_STORAGE_KEY).ok();
        let (state, set_state) = signal(seed);
        Self { state, set_state }
    }

    /// 当前会话（非响应式读取，供 API 客户端注入令牌）
    pub fn session(&self) -> Option<Session> {
        self.state.get_untracked()
    }

    /// 会话信号（响应式读取，供界面展示）
    pub fn session_signal(&self) -> ReadSignal<Option<Session>> {
        self.state
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_some())
    }

    /// 整体替换会话：同时更新内存缓存与持久化条目
    ///
    /// `None` 表示登出或后端判定失效，两处一起清空。
    pub fn save(&self, session: Option<Session>) {
        match &session {
            Some(session) => {
                if let Err(error) = SessionStorage::set(AUTH_STORAGE_KEY, session) {
                    tracing::warn!(%error, "failed to persist session");
                }
            }
            None => SessionStorage::delete(AUTH_STORAGE_KEY),
        }
        self.set_state.set(session);
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
