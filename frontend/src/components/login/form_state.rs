//! 表单状态管理模块
//!
//! 登录与注册各自持有一组 `RwSignal`，互不影响：
//! - 数据的持有（随输入逐字段更新）
//! - 提交时转换为核心库的表单快照
//!
//! 提交失败不清空表单，方便用户直接重试。
//!
//! 两个表单共用一个 [`SubmitGate`]：任一表单提交中时另一个也不能提交。

use leptos::prelude::*;
use printstrokes::{LoginForm, Notice, RegisterForm};

/// 登录表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    /// 当前输入的快照
    pub fn snapshot(&self) -> LoginForm {
        LoginForm {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// 注册表单状态
#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl RegisterFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
        }
    }

    pub fn snapshot(&self) -> RegisterForm {
        RegisterForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// 提交前检查的结果
#[derive(Debug, PartialEq)]
pub enum Submission<F> {
    /// 已有请求在进行中，忽略本次提交
    Busy,
    /// 本地校验未通过，不进入提交状态
    Invalid(Notice),
    /// 已进入提交状态，可以发请求
    Ready(F),
}

/// 登录与注册共用的提交中标记
#[derive(Clone, Copy)]
pub struct SubmitGate {
    is_submitting: RwSignal<bool>,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self {
            is_submitting: RwSignal::new(false),
        }
    }

    /// 按钮禁用与文案切换用，会被追踪
    pub fn is_submitting(&self) -> bool {
        self.is_submitting.get()
    }

    pub fn begin_login(&self, form: &LoginFormState) -> Submission<LoginForm> {
        if self.is_submitting.get_untracked() {
            return Submission::Busy;
        }
        self.is_submitting.set(true);
        Submission::Ready(form.snapshot())
    }

    pub fn begin_register(&self, form: &RegisterFormState) -> Submission<RegisterForm> {
        if self.is_submitting.get_untracked() {
            return Submission::Busy;
        }
        let details = form.snapshot();
        if let Err(e) = details.validate() {
            return Submission::Invalid(Notice::error(e.to_string()));
        }
        self.is_submitting.set(true);
        Submission::Ready(details)
    }

    /// 请求结束后复位；页面已卸载时信号已释放，直接忽略
    pub fn finish(&self) {
        if self.is_submitting.try_set(false).is_some() {
            log::debug!("login page unmounted before the request resolved");
        }
    }
}

impl Default for SubmitGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn filled_register(form: &RegisterFormState, password: &str, confirm: &str) {
        form.name.set("Ada Lovelace".into());
        form.email.set("ada@example.com".into());
        form.password.set(password.into());
        form.confirm_password.set(confirm.into());
    }

    #[test]
    fn login_enters_submitting_state() {
        Owner::new().with(|| {
            let gate = SubmitGate::new();
            let form = LoginFormState::new();
            form.email.set("ada@example.com".into());
            form.password.set("abc123".into());

            let submission = gate.begin_login(&form);

            assert_eq!(
                submission,
                Submission::Ready(LoginForm {
                    email: "ada@example.com".into(),
                    password: "abc123".into(),
                })
            );
            assert!(gate.is_submitting.get_untracked());
        });
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        Owner::new().with(|| {
            let gate = SubmitGate::new();
            let form = LoginFormState::new();

            assert!(matches!(gate.begin_login(&form), Submission::Ready(_)));
            assert_eq!(gate.begin_login(&form), Submission::Busy);

            gate.finish();
            assert!(!gate.is_submitting.get_untracked());
            assert!(matches!(gate.begin_login(&form), Submission::Ready(_)));
        });
    }

    #[test]
    fn flag_is_shared_between_both_forms() {
        Owner::new().with(|| {
            let gate = SubmitGate::new();
            let login = LoginFormState::new();
            let register = RegisterFormState::new();
            filled_register(&register, "abc123", "abc123");

            assert!(matches!(gate.begin_login(&login), Submission::Ready(_)));
            assert_eq!(gate.begin_register(&register), Submission::Busy);

            gate.finish();
            assert!(matches!(gate.begin_register(&register), Submission::Ready(_)));
            assert_eq!(gate.begin_login(&login), Submission::Busy);
        });
    }

    #[test]
    fn password_mismatch_never_enters_submitting_state() {
        Owner::new().with(|| {
            let gate = SubmitGate::new();
            let register = RegisterFormState::new();
            filled_register(&register, "abc123", "abc124");

            assert_eq!(
                gate.begin_register(&register),
                Submission::Invalid(Notice::error("Passwords don't match"))
            );
            assert!(!gate.is_submitting.get_untracked());
        });
    }

    #[test]
    fn finish_after_unmount_does_not_panic() {
        let owner = Owner::new();
        let gate = owner.with(|| {
            let gate = SubmitGate::new();
            assert!(matches!(
                gate.begin_login(&LoginFormState::new()),
                Submission::Ready(_)
            ));
            gate
        });

        owner.cleanup();
        gate.finish();
    }
}
