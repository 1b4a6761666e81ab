//! 全局通知组件
//!
//! 所有视图级操作自行捕获失败并在这里呈现为短暂提示，
//! 不向任何全局处理器传播。

use std::time::Duration;

use leptos::prelude::*;

/// 提示自动消失时间
const DISMISS_AFTER: Duration = Duration::from_millis(3200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub text: String,
    pub level: ToastLevel,
}

/// 通知上下文
#[derive(Clone, Copy)]
pub struct ToastContext {
    messages: RwSignal<Vec<(u64, ToastMessage)>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastMessage {
            text: text.into(),
            level: ToastLevel::Success,
        });
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastMessage {
            text: text.into(),
            level: ToastLevel::Error,
        });
    }

    fn push(&self, message: ToastMessage) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.messages.update(|messages| messages.push((id, message)));

        let messages = self.messages;
        set_timeout(
            move || {
                let _ = messages.try_update(|messages| {
                    messages.retain(|(message_id, _)| *message_id != id);
                });
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

/// 从 Context 获取通知上下文
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 通知宿主，挂在应用根部
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    view! {
        <div class="toast-root">
            <For
                each=move || toast.messages.get()
                key=|(id, _)| *id
                children=move |(_, message)| {
                    let class = match message.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    };
                    view! { <div class=class>{message.text.clone()}</div> }
                }
            />
        </div>
    }
}
