//! 认证模块
//!
//! 管理"是否持有会话"的前端状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//! 令牌本身只存在 LocalStorage 中，这里只关心是否存在。

use crate::web::LocalStorage;
use leptos::prelude::*;
use printstrokes::KeyValueStore;
use printstrokes::shared::ACCESS_TOKEN_KEY;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    has_session: RwSignal<bool>,
}

impl AuthContext {
    /// 创建新的认证上下文，初始值取自 LocalStorage
    pub fn new() -> Self {
        Self {
            has_session: RwSignal::new(has_stored_token()),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.has_session.into()
    }

    /// 登录成功写入令牌后重新读取
    pub fn refresh(&self) {
        self.has_session.set(has_stored_token());
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

fn has_stored_token() -> bool {
    LocalStorage
        .get(ACCESS_TOKEN_KEY)
        .is_some_and(|token| !token.is_empty())
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
