//! 全局提示（toast）
//!
//! 挂在 App 根部，跨页面导航后仍然可见；3 秒后自动消失。

use leptos::prelude::*;
use printstrokes::Notice;
use std::time::Duration;

const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Notice>>,
    /// 每次展示递增，旧定时器只清除自己那一条
    serial: RwSignal<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            serial: RwSignal::new(0),
        }
    }

    pub fn show(&self, notice: Notice) {
        if notice.is_error() {
            log::warn!("{}", notice.message);
        }
        let serial = self.serial.get_untracked() + 1;
        self.serial.set(serial);
        self.current.set(Some(notice));

        let ctx = *self;
        set_timeout(
            move || {
                if ctx.serial.get_untracked() == serial {
                    ctx.current.set(None);
                }
            },
            DISMISS_AFTER,
        );
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    move || {
        toasts.current.get().map(|notice| {
            let class = if notice.is_error() {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div role="status" class=class>
                        <span>{notice.message}</span>
                    </div>
                </div>
            }
        })
    }
}
