//! 端末への結果表示

use genfarm_common::presentation::{DISEASE_LABEL, HERO_TEXT, HERO_TITLE, INFO_CARDS, RESET_LABEL};
use genfarm_common::{AnalysisResult, Notification, NotificationKind, ResultView};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_CELLS: usize = 20;
/// 100%超で伸ばす上限（200%分）
const MAX_BAR_CELLS: usize = BAR_CELLS * 2;

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 確信度バー（100%超はバーが伸びる。描画は200%分で打ち切り、NaNは0扱い）
pub fn confidence_bar(confidence: f64) -> String {
    let cells = confidence / 100.0 * BAR_CELLS as f64;
    let filled = if cells.is_nan() {
        0
    } else {
        cells.round().clamp(0.0, MAX_BAR_CELLS as f64) as usize
    };
    let empty = BAR_CELLS.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

pub fn render_result(result: &AnalysisResult) -> String {
    let view = ResultView::new(result);
    let mut lines = vec![
        format!("{} {}", view.branch.icon(), view.heading()),
        String::new(),
        format!("  🍃 Status: {}", view.status),
    ];

    if let Some(disease) = &view.disease {
        lines.push(format!("  {} {}", DISEASE_LABEL, disease));
    }

    lines.push(format!("  {}", view.advice_label()));
    lines.push(format!("    {}", view.treatment));
    lines.push(format!(
        "  Confidence: {} {}",
        confidence_bar(view.confidence),
        view.confidence_text()
    ));

    lines.join("\n")
}

pub fn render_notification(notification: &Notification) -> String {
    let mark = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Failure => "✖",
    };
    format!("{} {} {}", mark, notification.title, notification.description)
}

pub fn print_welcome() {
    println!("🌿 Genfarm - AI-Powered Plant Health Checker\n");
    println!("{}", HERO_TITLE);
    println!("{}\n", HERO_TEXT);
    for (icon, title, text) in INFO_CARDS {
        println!("  {} {} - {}", icon, title, text);
    }
    println!();
}

pub fn reset_prompt() -> String {
    format!("{}?", RESET_LABEL)
}
