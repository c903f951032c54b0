//! 診断結果の表示モデル
//!
//! Web・CLIどちらの描画もこの値だけを見て行う。

use crate::types::AnalysisResult;

pub const RESET_LABEL: &str = "Analyze Another Plant";
pub const DISEASE_LABEL: &str = "Disease Detected:";

/// 待機画面の見出しと説明文
pub const HERO_TITLE: &str = "Is Your Plant Healthy?";
pub const HERO_TEXT: &str = "Upload a photo of your plant's leaves, fruits, or whole plant, and our AI will detect diseases and suggest treatments instantly.";

/// 使い方カード（アイコン, 見出し, 説明）
pub const INFO_CARDS: &[(&str, &str, &str)] = &[
    ("📸", "Upload Image", "Take or upload a clear photo of your plant"),
    ("🤖", "AI Analysis", "Advanced AI detects diseases and issues"),
    ("💡", "Get Solutions", "Receive treatment recommendations instantly"),
];

/// 表示の分岐
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Healthy,
    Unhealthy,
}

impl Branch {
    pub fn heading(&self) -> &'static str {
        match self {
            Branch::Healthy => "🌿 Great News!",
            Branch::Unhealthy => "🌱 Plant Health Alert",
        }
    }

    pub fn advice_label(&self) -> &'static str {
        match self {
            Branch::Healthy => "Care Recommendations:",
            Branch::Unhealthy => "Treatment:",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Branch::Healthy => "✅",
            Branch::Unhealthy => "⚠️",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Healthy => "healthy",
            Branch::Unhealthy => "unhealthy",
        }
    }
}

/// 結果カード1枚分の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub branch: Branch,
    pub status: String,
    /// 健康でなく、かつ病名が "N/A" でないときだけSome
    pub disease: Option<String>,
    pub treatment: String,
    pub confidence: f64,
}

impl ResultView {
    pub fn new(result: &AnalysisResult) -> Self {
        let branch = if result.is_healthy() {
            Branch::Healthy
        } else {
            Branch::Unhealthy
        };

        Self {
            branch,
            status: result.status.clone(),
            disease: result.has_disease().then(|| result.disease.clone()),
            treatment: result.treatment.clone(),
            confidence: result.confidence,
        }
    }

    pub fn heading(&self) -> &'static str {
        self.branch.heading()
    }

    pub fn advice_label(&self) -> &'static str {
        self.branch.advice_label()
    }

    /// "87%" 形式（範囲外の値もそのまま）
    pub fn confidence_text(&self) -> String {
        format!("{}%", self.confidence)
    }

    /// 確信度バーの幅スタイル（クランプしない）
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: &str, disease: &str, confidence: f64) -> AnalysisResult {
        AnalysisResult {
            status: status.to_string(),
            disease: disease.to_string(),
            treatment: "Water twice a week".to_string(),
            confidence,
        }
    }

    #[test]
    fn test_info_cards_in_order() {
        let titles: Vec<&str> = INFO_CARDS.iter().map(|(_, title, _)| *title).collect();
        assert_eq!(titles, ["Upload Image", "AI Analysis", "Get Solutions"]);
        assert!(HERO_TEXT.ends_with("suggest treatments instantly."));
    }

    #[test]
    fn test_healthy_never_shows_disease() {
        for disease in ["N/A", "Late Blight", "", "Healthy"] {
            let view = ResultView::new(&result("Healthy", disease, 95.0));
            assert_eq!(view.branch, Branch::Healthy);
            assert_eq!(view.disease, None);
            assert_eq!(view.advice_label(), "Care Recommendations:");
            assert_eq!(view.heading(), "🌿 Great News!");
        }
    }

    #[test]
    fn test_late_blight_alert_branch() {
        let view = ResultView::new(&result("Late Blight", "Late Blight", 87.0));
        assert_eq!(view.branch, Branch::Unhealthy);
        assert_eq!(view.disease.as_deref(), Some("Late Blight"));
        assert_eq!(view.advice_label(), "Treatment:");
        assert_eq!(view.confidence_text(), "87%");
        assert_eq!(view.bar_style(), "width: 87%");
    }

    #[test]
    fn test_unhealthy_without_disease_name() {
        let view = ResultView::new(&result("Nutrient Deficiency", "N/A", 60.0));
        assert_eq!(view.branch, Branch::Unhealthy);
        assert_eq!(view.disease, None);
    }

    #[test]
    fn test_confidence_is_not_clamped() {
        let over = ResultView::new(&result("Healthy", "N/A", 120.0));
        assert_eq!(over.bar_style(), "width: 120%");

        let under = ResultView::new(&result("Healthy", "N/A", -5.0));
        assert_eq!(under.bar_style(), "width: -5%");
    }

    #[test]
    fn test_fractional_confidence() {
        let view = ResultView::new(&result("Healthy", "N/A", 87.5));
        assert_eq!(view.confidence_text(), "87.5%");
    }
}
