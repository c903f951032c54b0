use anyhow::{bail, Result};
use clap::Parser;
use dialoguer::{Confirm, Input};
use genfarm::{analyzer, cli, config, report, scanner};
use genfarm::analyzer::HttpAnalyzer;
use genfarm_common::{ImageAcquisition, Session};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use scanner::LocalImage;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "genfarm=debug" } else { "genfarm=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Diagnose { image, format } => {
            let config = Config::load()?;
            let analyzer = HttpAnalyzer::new(config.service()?);
            let image = LocalImage::open(&image)?;

            let mut session = Session::new();
            let mut acquisition = ImageAcquisition::new();
            let notification =
                analyzer::analyze_image(&mut session, &mut acquisition, &analyzer, &image).await?;

            match (session.result(), notification) {
                (Some(result), notification) => match format {
                    OutputFormat::Text => {
                        if let Some(n) = notification {
                            eprintln!("{}\n", report::render_notification(&n));
                        }
                        println!("{}", report::render_result(result));
                    }
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
                },
                (None, Some(n)) => bail!("{}: {}", n.title, n.description),
                (None, None) => bail!("解析が完了しませんでした"),
            }
        }

        Commands::Interactive => {
            let config = Config::load()?;
            let analyzer = HttpAnalyzer::new(config.service()?);
            run_interactive(&analyzer).await?;
        }

        Commands::Config { set_base_url, set_api_key, show } => {
            let mut config = Config::load_or_default()?;
            if let Some(url) = set_base_url {
                config.set_base_url(url);
                config.save()?;
                println!("✔ 解析サービスのURLを設定しました");
            }

            if let Some(key) = set_api_key {
                config.set_api_key(key);
                config.save()?;
                println!("✔ 公開キーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  URL: {}", config.base_url.as_deref().unwrap_or("未設定"));
                println!("  公開キー: {}", config.masked_api_key());
            }
        }
    }

    Ok(())
}

/// 画像選択 → 診断 → 「Analyze Another Plant」のループ
async fn run_interactive(analyzer: &HttpAnalyzer) -> Result<()> {
    let mut session = Session::new();
    let mut acquisition = ImageAcquisition::new();
    report::print_welcome();

    loop {
        if let Some(result) = session.result() {
            println!("{}\n", report::render_result(result));
            let again = Confirm::new()
                .with_prompt(report::reset_prompt())
                .default(true)
                .interact()?;
            if !again {
                break;
            }
            session.reset();
            acquisition.change_image(session.is_analyzing());
            continue;
        }

        let input: String = Input::new()
            .with_prompt("Image path (empty to quit)")
            .allow_empty(true)
            .interact_text()?;
        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let image = match LocalImage::open(Path::new(input)) {
            Ok(image) => image,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match analyzer::analyze_image(&mut session, &mut acquisition, analyzer, &image).await {
            Ok(Some(notification)) => println!("{}\n", report::render_notification(&notification)),
            Ok(None) => {}
            Err(e) => eprintln!("⚠ {}", e),
        }
    }

    Ok(())
}
