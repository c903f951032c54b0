//! ローカル画像ファイルの読み込み
//!
//! MIMEタイプは拡張子から決める。不明な拡張子は画像として扱わない。

use crate::error::{GenfarmError, Result};
use genfarm_common::acquisition::encode_data_url;
use genfarm_common::ImageSource;
use std::path::{Path, PathBuf};

const IMAGE_MEDIA_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("heic", "image/heic"),
    ("avif", "image/avif"),
];

const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

pub fn media_type_for(path: &Path) -> &'static str {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .and_then(|ext| {
            IMAGE_MEDIA_TYPES
                .iter()
                .find(|(e, _)| *e == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
}

#[derive(Debug, Clone)]
pub struct LocalImage {
    pub path: PathBuf,
    pub file_name: String,
    media_type: &'static str,
}

impl LocalImage {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GenfarmError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            media_type: media_type_for(path),
        })
    }
}

impl ImageSource for LocalImage {
    fn media_type(&self) -> &str {
        self.media_type
    }

    fn name(&self) -> &str {
        &self.file_name
    }

    async fn read_data_url(&self) -> genfarm_common::Result<String> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(encode_data_url(self.media_type, &bytes))
    }
}
