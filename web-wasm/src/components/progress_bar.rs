//! プログレスバーコンポーネント（確信度表示）

use leptos::prelude::*;

/// `fill_style` は "width: 87%" 形式。範囲外の値もそのまま幅に使う
#[component]
pub fn ProgressBar(fill_style: String) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div class="progress-fill" style=fill_style />
        </div>
    }
}
