//! Print Strokes 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `components`: UI 组件层
//!
//! 请求、校验与令牌持久化都在核心库 `printstrokes` 中完成，这里只负责渲染。

mod api;
mod auth;
mod components {
    pub mod category_grid;
    mod icons;
    pub mod login;
    pub mod toast;
}

use crate::auth::{AuthContext, use_auth};
use crate::components::category_grid::CategoryGrid;
use crate::components::login::LoginPage;
use crate::components::toast::{ToastContext, Toaster};

use leptos::prelude::*;

// 浏览器 API 适配：把核心库的 HTTP / 存储接口接到 fetch 与 LocalStorage 上
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Category(id) => view! { <CategoryPage id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to="/" class="btn btn-ghost mt-6">"← Back to Home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <header class="navbar bg-base-100 shadow-sm px-4">
            <div class="flex-1">
                <Link to="/" class="text-xl font-heading font-bold text-gradient-brand">
                    "Print Strokes"
                </Link>
            </div>
            <Show when=move || !auth.is_authenticated_signal().get()>
                <Link to="/login" class="btn btn-primary btn-sm">"Sign In"</Link>
            </Show>
        </header>
        <main>
            <CategoryGrid />
        </main>
    }
}

/// 分类详情页，目前只展示分类标识
#[component]
fn CategoryPage(id: String) -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-16 text-center">
            <h1 class="text-3xl font-heading font-bold mb-4">"Category " {id}</h1>
            <p class="text-muted-foreground mb-8">"Products for this category are coming soon."</p>
            <Link to="/" class="text-sm text-muted-foreground hover:text-primary">
                "← Back to Home"
            </Link>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话上下文：初始状态取自 LocalStorage 中的访问令牌
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 全局提示，跨页面保留
    provide_context(ToastContext::new());

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <Toaster />
    }
}
