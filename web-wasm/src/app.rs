//! メインアプリケーションコンポーネント
//!
//! Idle / Analyzing / Resolved はすべて Session が持ち、
//! 画面の表示可否は Session::view() から導出する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use genfarm_common::{Analyzer, Notification, Session};
use crate::api::FetchAnalyzer;
use crate::config;
use crate::components::{
    analysis_card::AnalysisCard,
    footer::Footer,
    header::Header,
    info_cards::{Hero, InfoCards},
    loading::AnalyzingIndicator,
    toast::Toast,
    upload_area::UploadArea,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let notification = RwSignal::new(None::<Notification>);
    let layout = Memo::new(move |_| session.with(|s| s.view()));
    let busy = Signal::derive(move || layout.get().upload_disabled);

    // 画像選択 → 解析リクエスト
    let on_image_select = move |image_data: String| {
        let token = match session.try_update(|s| s.begin()) {
            Some(Ok(token)) => token,
            Some(Err(err)) => {
                gloo::console::warn!(err.to_string());
                return;
            }
            None => return,
        };
        notification.set(None);

        spawn_local(async move {
            let outcome = match config::service_config() {
                Ok(service) => FetchAnalyzer::new(service).analyze(&image_data).await,
                Err(err) => Err(err),
            };

            if let Err(err) = &outcome {
                gloo::console::error!(format!("Analysis error: {}", err));
            }

            // リセット済みなど古いトークンの結果は捨てられる
            if let Some(Some(note)) = session.try_update(|s| s.complete(token, outcome)) {
                notification.set(Some(note));
            }
        });
    };

    let on_reset = move || session.update(|s| s.reset());

    view! {
        <div class="page">
            <Header />
            <Toast notification=notification />

            <main class="container">
                <Show when=move || layout.get().show_hero>
                    <Hero />
                </Show>

                <Show when=move || layout.get().show_upload>
                    <UploadArea busy=busy on_image_select=on_image_select />
                </Show>

                <Show when=move || layout.get().show_progress>
                    <AnalyzingIndicator />
                </Show>

                {move || {
                    session
                        .with(|s| s.result().cloned())
                        .map(|result| view! { <AnalysisCard result=result on_reset=on_reset /> })
                }}

                <Show when=move || layout.get().show_info_cards>
                    <InfoCards />
                </Show>
            </main>

            <Footer />
        </div>
    }
}
