//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-brand">
                <div class="header-icon">"🍃"</div>
                <h1>"Genfarm"</h1>
            </div>
            <p class="header-subtitle">"AI-Powered Plant Health Checker"</p>
        </header>
    }
}
