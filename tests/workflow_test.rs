//! 画像選択から診断結果までの遷移テスト
//!
//! 解析サービスは記録用のフェイクに置き換える

use genfarm::analyzer::analyze_image;
use genfarm::error::GenfarmError;
use genfarm::scanner::LocalImage;
use genfarm_common::acquisition::encode_data_url;
use genfarm_common::{
    AnalysisResult, Analyzer, Error, ImageAcquisition, MemoryImage, Phase, Session,
};
use std::cell::RefCell;
use tempfile::tempdir;

enum Reply {
    Ok(AnalysisResult),
    Fail(&'static str),
}

struct FakeAnalyzer {
    reply: Reply,
    received: RefCell<Vec<String>>,
}

impl FakeAnalyzer {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            received: RefCell::new(Vec::new()),
        }
    }
}

impl Analyzer for FakeAnalyzer {
    async fn analyze(&self, image_data: &str) -> genfarm_common::Result<AnalysisResult> {
        self.received.borrow_mut().push(image_data.to_string());
        match &self.reply {
            Reply::Ok(result) => Ok(result.clone()),
            Reply::Fail(message) => Err(Error::RequestFailed(message.to_string())),
        }
    }
}

fn late_blight() -> AnalysisResult {
    AnalysisResult {
        status: "Late Blight".to_string(),
        disease: "Late Blight".to_string(),
        treatment: "Remove affected foliage and apply fungicide".to_string(),
        confidence: 87.0,
    }
}

/// 画像を選ぶとプレビューと送信データが同じData URLになる
#[tokio::test]
async fn test_preview_matches_submitted_data_url() {
    let analyzer = FakeAnalyzer::new(Reply::Ok(late_blight()));
    let mut session = Session::new();
    let mut acquisition = ImageAcquisition::new();
    let image = MemoryImage::new("leaf.jpg", "image/jpeg", b"jpeg-bytes".to_vec());

    let note = analyze_image(&mut session, &mut acquisition, &analyzer, &image)
        .await
        .expect("解析失敗")
        .expect("通知なし");

    let received = analyzer.received.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(acquisition.preview(), Some(received[0].as_str()));
    assert_eq!(received[0], encode_data_url("image/jpeg", b"jpeg-bytes"));

    assert!(!note.is_failure());
    assert_eq!(session.result(), Some(&late_blight()));
}

/// 画像以外のファイルは送信されず、状態も変わらない
#[tokio::test]
async fn test_non_image_is_never_submitted() {
    let analyzer = FakeAnalyzer::new(Reply::Ok(late_blight()));
    let mut session = Session::new();
    let mut acquisition = ImageAcquisition::new();
    let document = MemoryImage::new("report.pdf", "application/pdf", b"%PDF".to_vec());

    let result = analyze_image(&mut session, &mut acquisition, &analyzer, &document).await;

    assert!(matches!(
        result,
        Err(GenfarmError::Analysis(Error::InvalidFileType(_)))
    ));
    assert!(analyzer.received.borrow().is_empty());
    assert_eq!(session.phase(), &Phase::Idle);
    assert!(acquisition.preview().is_none());
}

/// 結果表示中に画像以外を選んでも結果は残る
#[tokio::test]
async fn test_non_image_keeps_resolved_result() {
    let analyzer = FakeAnalyzer::new(Reply::Ok(late_blight()));
    let mut session = Session::new();
    let mut acquisition = ImageAcquisition::new();
    let image = MemoryImage::new("leaf.png", "image/png", b"png".to_vec());
    analyze_image(&mut session, &mut acquisition, &analyzer, &image).await.unwrap();
    let preview = acquisition.preview().map(str::to_string);

    let text = MemoryImage::new("notes.txt", "text/plain", b"hi".to_vec());
    assert!(analyze_image(&mut session, &mut acquisition, &analyzer, &text).await.is_err());

    assert_eq!(session.result(), Some(&late_blight()));
    assert_eq!(acquisition.preview().map(str::to_string), preview);
    assert_eq!(analyzer.received.borrow().len(), 1);
}

/// サービスのエラーメッセージがそのまま通知に入り、結果は空のまま
#[tokio::test]
async fn test_request_failure_notification() {
    let analyzer = FakeAnalyzer::new(Reply::Fail("image too dark"));
    let mut session = Session::new();
    let mut acquisition = ImageAcquisition::new();
    let image = MemoryImage::new("leaf.jpg", "image/jpeg", b"dark".to_vec());

    let note = analyze_image(&mut session, &mut acquisition, &analyzer, &image)
        .await
        .unwrap()
        .unwrap();

    assert!(note.is_failure());
    assert_eq!(note.description, "image too dark");
    assert_eq!(session.phase(), &Phase::Idle);
    assert!(session.result().is_none());
}

/// 解析中は新しい画像を受け付けない
#[tokio::test]
async fn test_busy_session_rejects_new_image() {
    let analyzer = FakeAnalyzer::new(Reply::Ok(late_blight()));
    let mut session = Session::new();
    session.begin().unwrap();
    let mut acquisition = ImageAcquisition::new();
    let image = MemoryImage::new("leaf.jpg", "image/jpeg", b"x".to_vec());

    let result = analyze_image(&mut session, &mut acquisition, &analyzer, &image).await;

    assert!(matches!(result, Err(GenfarmError::Analysis(Error::Busy))));
    assert!(analyzer.received.borrow().is_empty());
    assert!(acquisition.preview().is_none());
    assert!(session.is_analyzing());
}

/// リセット後はIdleに戻り、プレビューも消える
#[tokio::test]
async fn test_reset_after_result() {
    let analyzer = FakeAnalyzer::new(Reply::Ok(late_blight()));
    let mut session = Session::new();
    let mut acquisition = ImageAcquisition::new();
    let image = MemoryImage::new("leaf.jpg", "image/jpeg", b"x".to_vec());
    analyze_image(&mut session, &mut acquisition, &analyzer, &image).await.unwrap();

    session.reset();
    assert!(acquisition.change_image(session.is_analyzing()));

    assert_eq!(session.phase(), &Phase::Idle);
    assert!(session.result().is_none());
    assert!(acquisition.preview().is_none());
}

/// ローカルファイルは拡張子でMIMEタイプを判定する
#[tokio::test]
async fn test_local_text_file_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("readme.txt");
    std::fs::write(&path, "not an image").unwrap();

    let analyzer = FakeAnalyzer::new(Reply::Ok(late_blight()));
    let mut session = Session::new();
    let mut acquisition = ImageAcquisition::new();
    let file = LocalImage::open(&path).unwrap();

    let result = analyze_image(&mut session, &mut acquisition, &analyzer, &file).await;
    assert!(matches!(
        result,
        Err(GenfarmError::Analysis(Error::InvalidFileType(ref mime))) if mime == "application/octet-stream"
    ));
    assert!(analyzer.received.borrow().is_empty());
}

/// ローカル画像はファイル内容がそのまま送信される
#[tokio::test]
async fn test_local_image_is_submitted() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tomato.JPG");
    std::fs::write(&path, b"tomato").unwrap();

    let analyzer = FakeAnalyzer::new(Reply::Ok(late_blight()));
    let mut session = Session::new();
    let mut acquisition = ImageAcquisition::new();
    let file = LocalImage::open(&path).unwrap();

    analyze_image(&mut session, &mut acquisition, &analyzer, &file).await.unwrap();
    assert_eq!(
        analyzer.received.borrow()[0],
        encode_data_url("image/jpeg", b"tomato")
    );
}
