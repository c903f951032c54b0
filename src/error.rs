use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenfarmError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("解析サービスのURLが設定されていません。`genfarm config --set-base-url URL` で設定してください")]
    MissingBaseUrl,

    #[error("公開キーが設定されていません。`genfarm config --set-api-key KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Analysis(#[from] genfarm_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenfarmError>;
