//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫 -> 写入 History -> 更新路由信号"。
//!
//! 守卫拦截未认证用户时会记住原目标路径（来源页面），
//! 登录 / 注册成功后据此回跳。

use leptos::prelude::*;
use printstrokes::Navigation;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History 状态，`replace` 为 true 时替换当前记录
fn write_history_state(path: &str, replace: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let result = if replace {
                history.replace_state_with_url(&JsValue::NULL, "", Some(path))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(path))
            };
            if result.is_err() {
                log::warn!("[Router] failed to update history for {}", path);
            }
        }
    }
}

/// 路由器服务
///
/// 通过注入认证信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 被守卫拦截时记录的原目标路径
    redirect_from: RwSignal<Option<String>>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));

        Self {
            current_route,
            set_route,
            redirect_from: RwSignal::new(None),
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 认证成功后应回跳的来源路径
    pub fn redirect_from(&self) -> Option<String> {
        self.redirect_from.get_untracked()
    }

    /// 新增一条历史记录并导航
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), false);
    }

    /// 执行业务层返回的导航指令
    pub fn follow(&self, navigation: &Navigation) {
        self.navigate_to_route(AppRoute::from_path(&navigation.path), navigation.replace);
    }

    /// **核心方法：导航与守卫**
    fn navigate_to_route(&self, target_route: AppRoute, replace: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        if target_route.requires_auth() && !is_auth {
            log::info!("[Router] Access denied to {}. Redirecting to login.", target_route);
            self.redirect_from.set(Some(target_route.to_path()));
            let redirect = AppRoute::auth_failure_redirect();
            write_history_state(&redirect.to_path(), replace);
            self.set_route.set(redirect);
            return;
        }

        // 离开登录页后来源路径失效
        if target_route != AppRoute::Login {
            self.redirect_from.set(None);
        }

        write_history_state(&target_route.to_path(), replace);
        self.set_route.set(target_route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let redirect_from = self.redirect_from;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());

            // popstate 时也执行守卫逻辑
            if target_route.requires_auth() && !is_authenticated.get_untracked() {
                redirect_from.set(Some(target_route.to_path()));
                let redirect = AppRoute::auth_failure_redirect();
                write_history_state(&redirect.to_path(), true);
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 首次加载时对初始路由执行一次守卫
    fn guard_initial_route(&self) {
        let initial = self.current_route.get_untracked();
        if initial.requires_auth() {
            self.navigate_to_route(initial, true);
        }
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.guard_initial_route();

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
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，拦截点击并走路由服务
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
