pub mod http;

pub use http::HttpAnalyzer;

use crate::error::Result;
use crate::report;
use genfarm_common::{Analyzer, ImageAcquisition, ImageSource, Notification, Session};
use tracing::{error, info};

/// 画像1枚を選択して解析し、セッションを遷移させる
///
/// 画像以外・解析中の場合はセッションに触れずエラーを返す。
/// 通信やサービス側の失敗は通知に変換され、セッションはIdleに戻る。
pub async fn analyze_image<S, A>(
    session: &mut Session,
    acquisition: &mut ImageAcquisition,
    analyzer: &A,
    image: &S,
) -> Result<Option<Notification>>
where
    S: ImageSource,
    A: Analyzer,
{
    let data_url = acquisition.select_image(image, session.is_analyzing()).await?;
    let token = session.begin()?;
    info!(file = image.name(), token, "analysis started");

    let spinner = report::spinner("Analyzing Your Plant...");
    let outcome = analyzer.analyze(&data_url).await;
    spinner.finish_and_clear();

    if let Err(e) = &outcome {
        error!(file = image.name(), "Analysis error: {}", e);
    }

    Ok(session.complete(token, outcome))
}
