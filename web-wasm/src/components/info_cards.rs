//! 待機中に表示する説明（ヒーロー文と3枚のカード）

use genfarm_common::presentation::{HERO_TEXT, HERO_TITLE, INFO_CARDS};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero fade-in">
            <h2>{HERO_TITLE}</h2>
            <p class="text-muted">{HERO_TEXT}</p>
        </section>
    }
}

#[component]
pub fn InfoCards() -> impl IntoView {
    view! {
        <div class="info-cards fade-in">
            {INFO_CARDS
                .iter()
                .map(|(icon, title, text)| {
                    view! {
                        <div class="info-card">
                            <div class="info-card-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p class="text-muted">{*text}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
