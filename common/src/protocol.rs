//! 解析サービスとの通信仕様
//!
//! POST `<base-url>/functions/v1/analyze-plant`
//! 本文 `{"imageData": "<data URL>"}`、Bearer認証。
//! HTTPクライアント自体はCLI(reqwest)とWeb(fetch)がそれぞれ持つ。

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result, DEFAULT_REQUEST_ERROR};
use crate::types::AnalysisResult;

pub const ANALYZE_PATH: &str = "/functions/v1/analyze-plant";

/// リクエスト本文
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest<'a> {
    pub image_data: &'a str,
}

/// 2xx以外のレスポンス本文
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// 接続先（ベースURLと公開キー）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
    api_key: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let api_key = api_key.into().trim().to_string();

        if base_url.is_empty() {
            return Err(Error::Config("service URL is not set".into()));
        }
        if api_key.is_empty() {
            return Err(Error::Config("publishable key is not set".into()));
        }

        Ok(Self { base_url, api_key })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_PATH)
    }

    /// Authorizationヘッダ値
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

/// 画像1枚を解析サービスへ送る
#[allow(async_fn_in_trait)]
pub trait Analyzer {
    async fn analyze(&self, image_data: &str) -> Result<AnalysisResult>;
}

/// ステータスコードと本文から診断結果を得る
///
/// - 2xx: 本文をAnalysisResultとして読む（読めなければ NetworkOrParse）
/// - それ以外: 本文の `error` をそのまま RequestFailed に。無ければ既定文言
pub fn interpret_response(status: u16, body: &str) -> Result<AnalysisResult> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| Error::NetworkOrParse(e.to_string()));
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_REQUEST_ERROR.to_string());

    Err(Error::RequestFailed(message))
}
