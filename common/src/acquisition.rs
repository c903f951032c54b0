//! 画像取得（ファイル選択・ドラッグ&ドロップ）
//!
//! 画像かどうかを検証し、Base64 Data URLに変換して呼び出し元へ渡す。
//! プレビューとドラッグ中フラグだけをローカル状態として持つ。

use base64::{engine::general_purpose::STANDARD, Engine};
use crate::error::{Error, Result};

/// 受け付けるMIMEタイプの接頭辞
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// ユーザーが選んだファイル
///
/// ブラウザのFile、ローカルファイル、メモリ上のバイト列を同じ扱いにする。
#[allow(async_fn_in_trait)]
pub trait ImageSource {
    /// 宣言されたMIMEタイプ
    fn media_type(&self) -> &str;

    /// 表示用のファイル名
    fn name(&self) -> &str;

    /// 内容をData URLとして読み込む
    async fn read_data_url(&self) -> Result<String>;
}

/// メモリ上の画像
#[derive(Debug, Clone)]
pub struct MemoryImage {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl MemoryImage {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

impl ImageSource for MemoryImage {
    fn media_type(&self) -> &str {
        &self.media_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn read_data_url(&self) -> Result<String> {
        Ok(encode_data_url(&self.media_type, &self.bytes))
    }
}

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// 画像以外なら InvalidFileType
pub fn ensure_image(media_type: &str) -> Result<()> {
    if is_image_media_type(media_type) {
        Ok(())
    } else {
        Err(Error::InvalidFileType(media_type.to_string()))
    }
}

/// "data:<mime>;base64,<payload>" 形式のData URLを生成
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// ドロップされたファイルのうち先頭だけを使う
pub fn first_file<T>(files: impl IntoIterator<Item = T>) -> Option<T> {
    files.into_iter().next()
}

/// 画像取得コントロールのローカル状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageAcquisition {
    preview: Option<String>,
    is_dragging: bool,
}

impl ImageAcquisition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn drag_over(&mut self) {
        self.is_dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    /// 読み込み前の受付判定（状態は変えない）
    pub fn admit(&self, media_type: &str, busy: bool) -> Result<()> {
        if busy {
            return Err(Error::Busy);
        }
        ensure_image(media_type)
    }

    /// 読み込み済みのData URLをプレビューに設定
    ///
    /// 読み込み中に解析が始まっていた場合は Busy を返し、プレビューは変えない。
    pub fn accept(&mut self, data_url: String, busy: bool) -> Result<&str> {
        if busy {
            return Err(Error::Busy);
        }
        Ok(self.preview.insert(data_url).as_str())
    }

    /// ファイルを検証して読み込み、プレビューを更新する
    ///
    /// 戻り値のData URLをそのまま `on_image_select` に渡す。
    /// 失敗時はプレビューを含め状態を変更しない。
    pub async fn select_image<S: ImageSource>(&mut self, file: &S, busy: bool) -> Result<String> {
        self.admit(file.media_type(), busy)?;
        let data_url = file.read_data_url().await?;
        Ok(self.accept(data_url, busy)?.to_string())
    }

    /// ドロップ時: ドラッグ状態を解除し、先頭ファイルだけを選択する
    pub async fn drop_files<S, I>(&mut self, files: I, busy: bool) -> Result<Option<String>>
    where
        S: ImageSource,
        I: IntoIterator<Item = S>,
    {
        self.is_dragging = false;
        match first_file(files) {
            Some(file) => self.select_image(&file, busy).await.map(Some),
            None => Ok(None),
        }
    }

    /// 「Change Image」: 解析中でなければプレビューを消す
    pub fn change_image(&mut self, busy: bool) -> bool {
        if busy {
            return false;
        }
        self.preview = None;
        true
    }
}
