use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genfarm")]
#[command(about = "AI-Powered Plant Health Checker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 植物の写真を1枚診断する
    Diagnose {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 画像選択 → 診断 → 「Analyze Another Plant」を繰り返す
    Interactive,

    /// 接続先の設定
    Config {
        /// 解析サービスのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 公開キー（Bearer）を設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_diagnose() {
        let cli = Cli::try_parse_from(["genfarm", "diagnose", "leaf.jpg", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Diagnose { image, format } => {
                assert_eq!(image, PathBuf::from("leaf.jpg"));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected diagnose"),
        }
    }

    #[test]
    fn test_parse_config_with_global_verbose() {
        let cli = Cli::try_parse_from([
            "genfarm", "config", "--set-base-url", "https://x.supabase.co", "--show", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Config { set_base_url: Some(_), set_api_key: None, show: true }
        ));
    }
}
