//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页（分类网格）
    #[default]
    Home,
    /// 登录 / 注册页
    Login,
    /// 分类详情页 (需要认证)
    Category(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "" => Self::Home,
            "/login" => Self::Login,
            _ => match path.strip_prefix("/category/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Category(id.to_string()),
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Category(id) => format!("/category/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Category(_))
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(
            AppRoute::from_path("/category/42"),
            AppRoute::Category("42".into())
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/forgot-password"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/category/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/category/1/extra"), AppRoute::NotFound);
    }

    #[test]
    fn category_paths_round_trip() {
        let route = AppRoute::Category("c-9".into());
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
        assert_eq!(route.to_string(), "/category/c-9");
    }

    #[test]
    fn only_category_pages_are_guarded() {
        assert!(AppRoute::Category("1".into()).requires_auth());
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
    }
}
