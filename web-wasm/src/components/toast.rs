//! 通知トースト（閉じるまで表示）

use leptos::prelude::*;
use genfarm_common::Notification;

#[component]
pub fn Toast(notification: RwSignal<Option<Notification>>) -> impl IntoView {
    move || {
        notification.get().map(|note| {
            let class = if note.is_failure() { "toast toast-destructive" } else { "toast" };
            view! {
                <div class=class role="status">
                    <div class="toast-body">
                        <div class="toast-title">{note.title}</div>
                        <div class="toast-description">{note.description}</div>
                    </div>
                    <button
                        class="toast-close"
                        aria-label="Dismiss"
                        on:click=move |_| notification.set(None)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
