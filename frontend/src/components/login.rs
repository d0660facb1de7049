mod fields;
mod form_state;

use crate::api::auth_service;
use crate::auth::{AuthContext, use_auth};
use crate::components::icons::{Mail, User};
use crate::components::toast::{ToastContext, use_toasts};
use crate::web::router::{Link, RouterService, use_router};
use fields::{LEADING_ICON, PasswordField, TextField};
use form_state::{LoginFormState, RegisterFormState, SubmitGate, Submission};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use printstrokes::AuthOutcome;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    SignIn,
    Register,
}

/// 两个表单共用的控制信号
#[derive(Clone, Copy)]
struct SharedControls {
    show_password: RwSignal<bool>,
    gate: SubmitGate,
}

/// 提交结果的收尾：提示、刷新会话、回跳来源页面
///
/// 只使用 App 级别的上下文，登录页卸载后仍然安全。
#[derive(Clone, Copy)]
struct OutcomeSink {
    auth: AuthContext,
    router: RouterService,
    toasts: ToastContext,
}

impl OutcomeSink {
    fn from_context() -> Self {
        Self {
            auth: use_auth(),
            router: use_router(),
            toasts: use_toasts(),
        }
    }

    fn apply(&self, outcome: AuthOutcome) {
        self.toasts.show(outcome.notice().clone());
        if let AuthOutcome::Success { redirect, .. } = outcome {
            self.auth.refresh();
            self.router.follow(&redirect);
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let tab = RwSignal::new(AuthTab::SignIn);
    let login_form = LoginFormState::new();
    let register_form = RegisterFormState::new();

    let controls = SharedControls {
        show_password: RwSignal::new(false),
        gate: SubmitGate::new(),
    };

    let tab_class = move |which: AuthTab| {
        if tab.get() == which {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="container mx-auto px-4 py-16">
            <div class="max-w-md mx-auto">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-heading font-bold text-gradient-brand mb-2">
                        "Welcome to Print Strokes"
                    </h1>
                    <p class="text-muted-foreground">
                        "Sign in to access your personalized designs"
                    </p>
                </div>

                <div class="card-elegant p-6">
                    <div role="tablist" class="tabs tabs-boxed grid w-full grid-cols-2 mb-6">
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_class(AuthTab::SignIn)
                            on:click=move |_| tab.set(AuthTab::SignIn)
                        >
                            "Sign In"
                        </button>
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_class(AuthTab::Register)
                            on:click=move |_| tab.set(AuthTab::Register)
                        >
                            "Create Account"
                        </button>
                    </div>

                    {move || match tab.get() {
                        AuthTab::SignIn => {
                            view! { <LoginPanel form=login_form controls=controls /> }.into_any()
                        }
                        AuthTab::Register => {
                            view! { <RegisterPanel form=register_form controls=controls /> }
                                .into_any()
                        }
                    }}
                </div>

                <div class="text-center mt-6">
                    <Link to="/" class="text-sm text-muted-foreground hover:text-primary">
                        "← Back to Home"
                    </Link>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LoginPanel(form: LoginFormState, controls: SharedControls) -> impl IntoView {
    let sink = OutcomeSink::from_context();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Submission::Ready(credentials) = controls.gate.begin_login(&form) else {
            return;
        };
        let from = sink.router.redirect_from();

        spawn_local(async move {
            let outcome = auth_service().login(&credentials, from.as_deref()).await;
            controls.gate.finish();
            sink.apply(outcome);
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <TextField
                id="login-email"
                label="Email"
                input_type="email"
                placeholder="your@email.com"
                value=form.email
            >
                <Mail class=LEADING_ICON />
            </TextField>

            <PasswordField
                id="login-password"
                label="Password"
                placeholder="Enter your password"
                value=form.password
                show_password=controls.show_password
                toggle=true
            />

            <button
                type="submit"
                class="btn btn-primary w-full"
                disabled=move || controls.gate.is_submitting()
            >
                {move || if controls.gate.is_submitting() { "Signing in..." } else { "Sign In" }}
            </button>

            <div class="text-center">
                <Link to="/forgot-password" class="text-sm text-primary hover:underline">
                    "Forgot your password?"
                </Link>
            </div>
        </form>
    }
}

#[component]
fn RegisterPanel(form: RegisterFormState, controls: SharedControls) -> impl IntoView {
    let sink = OutcomeSink::from_context();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let details = match controls.gate.begin_register(&form) {
            Submission::Ready(details) => details,
            Submission::Invalid(notice) => {
                sink.toasts.show(notice);
                return;
            }
            Submission::Busy => return,
        };
        let from = sink.router.redirect_from();

        spawn_local(async move {
            let outcome = auth_service().register(&details, from.as_deref()).await;
            controls.gate.finish();
            sink.apply(outcome);
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <TextField
                id="register-name"
                label="Full Name"
                input_type="text"
                placeholder="Your full name"
                value=form.name
            >
                <User class=LEADING_ICON />
            </TextField>

            <TextField
                id="register-email"
                label="Email"
                input_type="email"
                placeholder="your@email.com"
                value=form.email
            >
                <Mail class=LEADING_ICON />
            </TextField>

            <PasswordField
                id="register-password"
                label="Password"
                placeholder="Create a password"
                value=form.password
                show_password=controls.show_password
                toggle=true
                min_length=6
            />

            <PasswordField
                id="confirm-password"
                label="Confirm Password"
                placeholder="Confirm your password"
                value=form.confirm_password
                show_password=controls.show_password
            />

            <button
                type="submit"
                class="btn btn-primary w-full"
                disabled=move || controls.gate.is_submitting()
            >
                {move || {
                    if controls.gate.is_submitting() { "Creating account..." } else { "Create Account" }
                }}
            </button>
        </form>
    }
}
