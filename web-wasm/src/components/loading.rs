//! 解析中インジケーター

use leptos::prelude::*;

#[component]
pub fn AnalyzingIndicator() -> impl IntoView {
    view! {
        <div class="analyzing fade-in">
            <div class="spinner" />
            <h3>"Analyzing Your Plant..."</h3>
            <p class="text-muted">"Our AI is examining the image"</p>
        </div>
    }
}
