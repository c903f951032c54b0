//! 診断結果カード
//!
//! 表示内容は ResultView から決まる。ボタン1クリックにつき on_reset を1回呼ぶ。

use leptos::prelude::*;
use genfarm_common::presentation::{DISEASE_LABEL, RESET_LABEL};
use genfarm_common::{AnalysisResult, Branch, ResultView};
use crate::components::progress_bar::ProgressBar;

#[component]
pub fn AnalysisCard<F>(result: AnalysisResult, on_reset: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send + Sync,
{
    let view_model = ResultView::new(&result);
    let branch = view_model.branch;
    let badge_class = match branch {
        Branch::Healthy => "badge badge-default",
        Branch::Unhealthy => "badge badge-destructive",
    };

    let disease_line = view_model.disease.clone().map(|disease| {
        view! {
            <div class="result-block">
                <div class="result-label">{DISEASE_LABEL}</div>
                <div class="result-disease">{disease}</div>
            </div>
        }
    });

    view! {
        <div class="card result-card fade-in">
            <div class="card-header">
                <div class=format!("result-icon result-icon-{}", branch.as_str())>
                    {branch.icon()}
                </div>
                <h2 class="card-title">{view_model.heading()}</h2>
            </div>

            <div class="card-content">
                <div class="result-row">
                    <span class="result-label">"🍃 Status:"</span>
                    <span class=badge_class>{view_model.status.clone()}</span>
                </div>

                {disease_line}

                <div class="result-block">
                    <div class="result-label">{view_model.advice_label()}</div>
                    <div class="result-treatment">{view_model.treatment.clone()}</div>
                </div>

                <div class="result-row">
                    <span class="result-label">"Confidence:"</span>
                    <div class="confidence">
                        <ProgressBar fill_style=view_model.bar_style() />
                        <span class="confidence-value">{view_model.confidence_text()}</span>
                    </div>
                </div>

                <button class="btn btn-primary btn-block" on:click=move |_| on_reset()>
                    {RESET_LABEL}
                </button>
            </div>
        </div>
    }
}
