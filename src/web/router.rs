//! 路由服务模块 - 核心引擎
//!
//! 导航流程建模为纯转移函数 [`plan_navigation`]：给定（当前视图，目标路由，
//! 认证状态）产出一组效果，由 [`RouterService`] 按序执行。改写片段的效果会
//! 触发新的 `hashchange` 事件重入整个流程，与浏览器前进/后退共用一条路径。
//!
//! 旧视图的清理总是在新视图挂载之前同步完成。挂载本身不会被取消，
//! 每次展示会递增 generation，迟到的挂载结果据此丢弃。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::chart::ChartRegistry;
use super::route::AppRoute;

/// 单次导航要执行的效果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// 销毁已登记的图表句柄；只要上一个视图是报表页就必须最先执行，
    /// 即使目标仍是报表页（防止重入泄漏）
    TeardownReports,
    /// 改写 location 片段并结束本轮（由随后的导航事件重入）
    RedirectTo(AppRoute),
    /// 全页渲染登录视图，不带应用外壳
    ShowLogin,
    /// 立即渲染应用外壳，异步挂载对应视图
    ShowShell(AppRoute),
}

/// 纯转移函数：每个导航事件对应一次调用
///
/// `target` 为 `None` 表示未识别的片段，默认回落到 landing。
pub fn plan_navigation(
    active: Option<AppRoute>,
    target: Option<AppRoute>,
    authenticated: bool,
) -> Vec<NavEffect> {
    let mut effects = Vec::new();

    if active == Some(AppRoute::Reports) {
        effects.push(NavEffect::TeardownReports);
    }

    let is_login_target = target == Some(AppRoute::Login);

    if !authenticated && !is_login_target {
        effects.push(NavEffect::RedirectTo(AppRoute::Login));
        return effects;
    }
    if authenticated && is_login_target {
        effects.push(NavEffect::RedirectTo(AppRoute::Landing));
        return effects;
    }

    match target {
        Some(AppRoute::Login) => effects.push(NavEffect::ShowLogin),
        Some(route) => effects.push(NavEffect::ShowShell(route)),
        None => effects.push(NavEffect::RedirectTo(AppRoute::Landing)),
    }
    effects
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn set_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(hash);
    }
}

/// 路由器服务
///
/// 会话、当前视图、generation 与图表句柄全部挂在显式上下文里，
/// 没有模块级可变状态。认证检查通过注入的信号完成，实现与认证系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前激活视图；首个导航事件处理前为 `None`
    active: RwSignal<Option<AppRoute>>,
    /// 展示代数：每次 ShowLogin / ShowShell 递增
    generation: RwSignal<u64>,
    /// 认证状态检查（注入的信号）
    is_authenticated: Signal<bool>,
    /// 报表图表句柄登记表（清理效果的执行对象）
    charts: ChartRegistry,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, charts: ChartRegistry) -> Self {
        Self {
            active: RwSignal::new(None),
            generation: RwSignal::new(0),
            is_authenticated,
            charts,
        }
    }

    /// 当前激活视图信号
    pub fn active_route(&self) -> ReadSignal<Option<AppRoute>> {
        self.active.read_only()
    }

    /// 当前展示代数；挂载流程在发起异步加载前捕获
    pub fn generation(&self) -> u64 {
        self.generation.get_untracked()
    }

    /// 捕获的代数是否仍然有效；无效说明导航已离开，结果应丢弃
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get_untracked() == generation
    }

    /// 程序化跳转：统一改写片段，走与浏览器导航相同的处理路径
    pub fn navigate(&self, route: AppRoute) {
        set_hash(route.to_hash());
    }

    /// **核心方法：处理一次导航事件**
    fn handle_navigation(&self) {
        let hash = current_hash();
        let target = AppRoute::from_hash(&hash);
        let authenticated = self.is_authenticated.get_untracked();
        let active = self.active.get_untracked();

        for effect in plan_navigation(active, target, authenticated) {
            match effect {
                NavEffect::TeardownReports => {
                    // 同步销毁，保证先于任何新视图挂载
                    self.charts.destroy_all();
                }
                NavEffect::RedirectTo(route) => {
                    tracing::info!(from = %hash, to = %route, "router redirect");
                    set_hash(route.to_hash());
                }
                NavEffect::ShowLogin => {
                    self.generation.update(|g| *g += 1);
                    self.active.set(Some(AppRoute::Login));
                }
                NavEffect::ShowShell(route) => {
                    self.generation.update(|g| *g += 1);
                    self.active.set(Some(route));
                }
            }
        }
    }

    /// 监听 hashchange（覆盖地址栏输入、链接点击与程序化跳转）
    fn init_hash_listener(&self) {
        let service = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            service.handle_navigation();
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并执行首次导航
fn provide_router(is_authenticated: Signal<bool>, charts: ChartRegistry) -> RouterService {
    let router = RouterService::new(is_authenticated, charts);
    router.init_hash_listener();
    router.handle_navigation();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部、图表登记表之后使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    let charts = use_context::<ChartRegistry>()
        .expect("ChartRegistry not found in context. Provide it before Router.");
    provide_router(is_authenticated, charts);

    children()
}

/// 路由出口组件
///
/// 根据当前激活视图渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收激活路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.active_route().get() {
        Some(route) => matcher(route),
        None => ().into_any(),
    }
}

// =========================================================
// 单元测试 (Unit Tests)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_protected_target_redirects_without_mounting() {
        let effects = plan_navigation(None, Some(AppRoute::Landing), false);
        assert_eq!(effects, vec![NavEffect::RedirectTo(AppRoute::Login)]);
    }

    #[test]
    fn unauthenticated_unknown_target_also_goes_to_login() {
        let effects = plan_navigation(None, None, false);
        assert_eq!(effects, vec![NavEffect::RedirectTo(AppRoute::Login)]);
    }

    #[test]
    fn authenticated_login_target_redirects_to_landing() {
        let effects = plan_navigation(Some(AppRoute::Landing), Some(AppRoute::Login), true);
        assert_eq!(effects, vec![NavEffect::RedirectTo(AppRoute::Landing)]);
    }

    #[test]
    fn login_renders_without_shell() {
        let effects = plan_navigation(None, Some(AppRoute::Login), false);
        assert_eq!(effects, vec![NavEffect::ShowLogin]);
    }

    #[test]
    fn protected_routes_render_in_shell() {
        for route in [AppRoute::Landing, AppRoute::Maintenance, AppRoute::Reports] {
            let effects = plan_navigation(Some(AppRoute::Landing), Some(route), true);
            assert_eq!(effects, vec![NavEffect::ShowShell(route)]);
        }
    }

    #[test]
    fn unknown_target_defaults_to_landing_when_authenticated() {
        let effects = plan_navigation(Some(AppRoute::Landing), None, true);
        assert_eq!(effects, vec![NavEffect::RedirectTo(AppRoute::Landing)]);
    }

    #[test]
    fn reports_teardown_always_precedes_everything_else() {
        let effects = plan_navigation(Some(AppRoute::Reports), Some(AppRoute::Landing), true);
        assert_eq!(
            effects,
            vec![
                NavEffect::TeardownReports,
                NavEffect::ShowShell(AppRoute::Landing)
            ]
        );
    }

    #[test]
    fn reports_reentry_still_tears_down_first() {
        let effects = plan_navigation(Some(AppRoute::Reports), Some(AppRoute::Reports), true);
        assert_eq!(
            effects,
            vec![
                NavEffect::TeardownReports,
                NavEffect::ShowShell(AppRoute::Reports)
            ]
        );
    }

    #[test]
    fn teardown_runs_even_when_session_expired_on_reports() {
        let effects = plan_navigation(Some(AppRoute::Reports), Some(AppRoute::Landing), false);
        assert_eq!(
            effects,
            vec![
                NavEffect::TeardownReports,
                NavEffect::RedirectTo(AppRoute::Login)
            ]
        );
    }

    #[test]
    fn every_plan_yields_exactly_one_terminal_effect() {
        // 终态效果 = 重定向或展示；任何导航都恰好得到一个
        let routes = [
            None,
            Some(AppRoute::Login),
            Some(AppRoute::Landing),
            Some(AppRoute::Maintenance),
            Some(AppRoute::Reports),
        ];
        for active in routes {
            for target in routes {
                for authenticated in [false, true] {
                    let effects = plan_navigation(active, target, authenticated);
                    let terminal = effects
                        .iter()
                        .filter(|e| !matches!(e, NavEffect::TeardownReports))
                        .count();
                    assert_eq!(terminal, 1, "active={active:?} target={target:?} auth={authenticated}");
                    // 清理（若有）必须排在最前
                    if effects.contains(&NavEffect::TeardownReports) {
                        assert_eq!(effects[0], NavEffect::TeardownReports);
                    }
                }
            }
        }
    }
}
