//! 带图标的输入框
//!
//! 所有字段都是 required；密码框的明文开关由两个表单共用。

use crate::components::icons::{Eye, EyeOff, Lock};
use leptos::prelude::*;

pub const LEADING_ICON: &str =
    "absolute left-3 top-1/2 transform -translate-y-1/2 text-muted-foreground h-4 w-4";

/// 普通文本 / 邮箱输入框，`children` 为左侧图标
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id.clone() class="label">{label}</label>
            <div class="relative">
                {children()}
                <input
                    id=id
                    type=input_type
                    placeholder=placeholder
                    class="input input-bordered w-full pl-10"
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// 密码输入框
#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    show_password: RwSignal<bool>,
    /// 是否显示明文开关按钮
    #[prop(optional)]
    toggle: bool,
    #[prop(optional)] min_length: Option<u32>,
) -> impl IntoView {
    let input_class = if toggle {
        "input input-bordered w-full pl-10 pr-10"
    } else {
        "input input-bordered w-full pl-10"
    };

    view! {
        <div class="space-y-2">
            <label for=id.clone() class="label">{label}</label>
            <div class="relative">
                <Lock class=LEADING_ICON />
                <input
                    id=id
                    type=move || if show_password.get() { "text" } else { "password" }
                    placeholder=placeholder
                    class=input_class
                    required
                    minlength=min_length.map(|n| n.to_string())
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                {toggle.then(|| view! {
                    <button
                        type="button"
                        class="btn btn-ghost btn-sm absolute right-2 top-1/2 transform -translate-y-1/2 h-6 w-6 p-0"
                        on:click=move |_| show_password.update(|shown| *shown = !*shown)
                    >
                        {move || if show_password.get() {
                            view! { <EyeOff class="h-3 w-3" /> }.into_any()
                        } else {
                            view! { <Eye class="h-3 w-3" /> }.into_any()
                        }}
                    </button>
                })}
            </div>
        </div>
    }
}
