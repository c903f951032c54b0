//! 診断結果の型定義

use serde::{Deserialize, Serialize};

/// 健康と判定されたときのステータス（完全一致で判定）
pub const HEALTHY_STATUS: &str = "Healthy";

/// 病名なしを表す値
pub const NO_DISEASE: &str = "N/A";

/// 解析サービスが返す診断結果
///
/// confidenceは0〜100を想定しているが、この層では検証・丸めを行わない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// "Healthy" または病名ラベル
    pub status: String,
    /// 病名（健康時は "N/A"）
    pub disease: String,
    /// 処置・ケアのアドバイス
    pub treatment: String,
    /// 確信度（%）
    pub confidence: f64,
}

impl AnalysisResult {
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }

    /// 病名行を表示するか
    pub fn has_disease(&self) -> bool {
        !self.is_healthy() && self.disease != NO_DISEASE
    }
}
