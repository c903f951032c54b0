//! エラー型定義

use thiserror::Error;

/// 解析サービスがエラー本文を返さなかった場合のメッセージ
pub const DEFAULT_REQUEST_ERROR: &str = "Analysis failed";

/// 通信・パース失敗時にユーザーへ表示する汎用メッセージ
pub const GENERIC_FAILURE_MESSAGE: &str = "Please try again with a clearer image.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 画像以外のファイルが選択された（引数は宣言されたMIMEタイプ）
    #[error("Please upload an image file")]
    InvalidFileType(String),

    /// 解析中に新しい画像が送信された
    #[error("An analysis is already in progress")]
    Busy,

    /// 解析サービスが2xx以外を返した（メッセージはそのまま表示）
    #[error("{0}")]
    RequestFailed(String),

    /// リクエスト未完了、またはレスポンスがJSONとして読めない
    #[error("Network or parse error: {0}")]
    NetworkOrParse(String),

    #[error("File read error: {0}")]
    FileRead(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 通知に表示する文言
    pub fn user_message(&self) -> String {
        match self {
            Error::RequestFailed(message) => message.clone(),
            Error::NetworkOrParse(_) | Error::FileRead(_) | Error::Io(_) | Error::Json(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
