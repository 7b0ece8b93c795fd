//! Transient notices (toasts) for user-visible feedback.
//!
//! Views push notices from event handlers; the [`NoticeStack`] renders them
//! in a fixed corner. On the web each notice dismisses itself after a few
//! seconds; everywhere a notice can be dismissed by hand.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Warning => "notice notice--warning",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Append a notice. On wasm it auto-dismisses after six seconds.
pub fn push_notice(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    let id = {
        let mut state = notices.write();
        state.next_id += 1;
        let id = state.next_id;
        state.entries.push(Notice {
            id,
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
        id
    };

    #[cfg(target_arch = "wasm32")]
    {
        let mut notices = *notices;
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(6)).await;
            notices.write().entries.retain(|notice| notice.id != id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Provider that owns the notice list and renders the stack on top of the
/// app. Wrap the router with this.
#[component]
pub fn NoticeProvider(children: Element) -> Element {
    let notices = use_signal(Notices::default);
    use_context_provider(|| notices);

    rsx! {
        {children}
        NoticeStack {}
    }
}

#[component]
pub fn NoticeStack() -> Element {
    let mut notices = use_notices();
    let entries = notices().entries;

    rsx! {
        div {
            class: "notice-stack",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: "{notice.level.class()}",
                    span { class: "notice__time", "{notice.timestamp}" }
                    span { class: "notice__message", "{notice.message}" }
                    button {
                        class: "notice__dismiss",
                        aria_label: "Dismiss",
                        onclick: move |_| {
                            let id = notice.id;
                            notices.write().entries.retain(|n| n.id != id);
                        },
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
