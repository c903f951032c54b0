//! ビルド時に埋め込む接続先設定

use genfarm_common::{Result, ServiceConfig};

const BASE_URL: Option<&str> = option_env!("GENFARM_SUPABASE_URL");
const API_KEY: Option<&str> = option_env!("GENFARM_SUPABASE_PUBLISHABLE_KEY");

/// 未設定なら Config エラー（送信時に失敗通知として表示される）
pub fn service_config() -> Result<ServiceConfig> {
    from_values(BASE_URL, API_KEY)
}

fn from_values(base_url: Option<&str>, api_key: Option<&str>) -> Result<ServiceConfig> {
    ServiceConfig::new(base_url.unwrap_or_default(), api_key.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use genfarm_common::Error;

    #[test]
    fn test_from_values() {
        let config = from_values(Some("https://demo.supabase.co"), Some("pk")).unwrap();
        assert_eq!(config.endpoint(), "https://demo.supabase.co/functions/v1/analyze-plant");
        assert_eq!(config.authorization(), "Bearer pk");
    }

    #[test]
    fn test_missing_values() {
        assert!(matches!(from_values(None, Some("pk")), Err(Error::Config(_))));
        assert!(matches!(from_values(Some("https://demo.supabase.co"), None), Err(Error::Config(_))));
    }
}
