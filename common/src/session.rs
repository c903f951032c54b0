//! セッション状態（Idle / Analyzing / Resolved）
//!
//! 状態はこの値だけが持ち、画面はviewから純粋に導出する。
//! 送信ごとにトークンを発行し、現在のトークンと一致しない完了通知は捨てる。

use crate::error::{Error, Result};
use crate::types::AnalysisResult;

/// 送信ごとに単調増加する識別子
pub type RequestToken = u64;

/// セッションの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    Resolved(AnalysisResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// ユーザー向け通知（トースト）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Analysis Complete!".to_string(),
            description: "Your plant has been analyzed successfully.".to_string(),
        }
    }

    pub fn failure(error: &Error) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: "Analysis Failed".to_string(),
            description: error.user_message(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NotificationKind::Failure
    }
}

/// 画面の表示可否
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub show_hero: bool,
    pub show_upload: bool,
    pub upload_disabled: bool,
    pub show_progress: bool,
    pub show_result: bool,
    pub show_info_cards: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    phase: Phase,
    last_token: RequestToken,
    in_flight: Option<RequestToken>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Analyzing)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::Resolved(result) => Some(result),
            _ => None,
        }
    }

    /// 画像選択 → Analyzing。前回の結果は破棄する
    ///
    /// 解析中の二重送信は Busy で拒否。
    pub fn begin(&mut self) -> Result<RequestToken> {
        if self.is_analyzing() {
            return Err(Error::Busy);
        }

        self.last_token += 1;
        self.in_flight = Some(self.last_token);
        self.phase = Phase::Analyzing;
        Ok(self.last_token)
    }

    /// レスポンス到着 → Resolved / Idle
    ///
    /// トークンが古い場合は状態を変えずNoneを返す。
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<AnalysisResult>,
    ) -> Option<Notification> {
        if self.in_flight != Some(token) {
            return None;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                self.phase = Phase::Resolved(result);
                Some(Notification::success())
            }
            Err(error) => {
                self.phase = Phase::Idle;
                Some(Notification::failure(&error))
            }
        }
    }

    /// 「Analyze Another Plant」→ Idle
    ///
    /// 解析中に呼ばれた場合は進行中のリクエストを無効にする。
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.phase = Phase::Idle;
    }

    pub fn view(&self) -> SessionView {
        let idle = matches!(self.phase, Phase::Idle);
        let analyzing = self.is_analyzing();
        let resolved = self.result().is_some();

        SessionView {
            show_hero: idle,
            show_upload: !resolved,
            upload_disabled: analyzing,
            show_progress: analyzing,
            show_result: resolved,
            show_info_cards: idle,
        }
    }
}
