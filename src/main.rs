use anyhow::Context;
use clap::Parser;
use costchecker_common::format::FAILED_STATUS;
use costchecker_common::{option_label, pretty, ConfirmRequest, OptionId, QueryOutcome, QueryResponse};
use costchecker_console::{annotate, cli, client, config, error, scenario};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let directive = if verbose { "costchecker=debug" } else { "costchecker=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn print_response(response: &QueryResponse) {
    println!("{}", response.status_text());
    println!("{}", pretty(&response.raw));

    match &response.outcome {
        QueryOutcome::NeedsConfirmation { confirmation_id, options } => {
            println!("\n{}", costchecker_common::format::CONFIRM_HEADING);
            for option in options {
                println!("  [{}] {}", option.id, option_label(option));
            }
            if let Some(id) = confirmation_id {
                println!("\n→ costchecker confirm {} <候选ID>", id);
            }
        }
        QueryOutcome::Success { .. } | QueryOutcome::Other { .. } => {}
    }
}

async fn save_shot(client: &ApiClient, response: &QueryResponse, out: &Path) -> error::Result<()> {
    let filename = response.screenshot_url().ok_or(error::ConsoleError::NoScreenshot)?;
    let bytes = client.screenshot(&filename).await?;
    let drawn = annotate::annotate_screenshot(&bytes, &response.highlights(), out)?;
    info!("截图已保存: {} ({}个高亮)", out.display(), drawn);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut config = Config::load().context("读取设定失败")?;
    config.override_api_base(cli.api_base.as_deref());

    match cli.command {
        Commands::Query { text, shot } => {
            let client = ApiClient::new(&config)?;
            let response = client
                .query(text.trim())
                .await
                .context(FAILED_STATUS)?;
            print_response(&response);

            if let Some(out) = shot {
                save_shot(&client, &response, &out).await?;
            }
        }

        Commands::Confirm { confirmation_id, option, shot } => {
            let client = ApiClient::new(&config)?;
            let request = ConfirmRequest {
                confirmation_id: Some(confirmation_id),
                selected_option: option.parse::<OptionId>()?,
            };
            let response = client.confirm(&request).await.context(FAILED_STATUS)?;
            print_response(&response);

            if let Some(out) = shot {
                save_shot(&client, &response, &out).await?;
            }
        }

        Commands::Scenarios { file, output, no_auto_confirm } => {
            let client = ApiClient::new(&config)?;
            let scenarios = scenario::load_scenarios(&file)
                .with_context(|| format!("读取场景文件失败: {}", file.display()))?;
            if scenarios.is_empty() {
                warn!("场景文件为空: {}", file.display());
            }
            info!("{}个场景 → {}", scenarios.len(), client.base());

            let now = chrono::Local::now();
            let timestamp = now.format("%Y-%m-%dT%H:%M:%S%:z").to_string();
            let output = output.unwrap_or_else(|| {
                PathBuf::from(format!("scenario-results-{}.md", now.format("%Y%m%d_%H%M%S")))
            });

            let progress = ProgressBar::new(scenarios.len() as u64);
            progress.set_style(ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")?);

            let report = scenario::run_scenarios(
                &client,
                &scenarios,
                !no_auto_confirm,
                &timestamp,
                &progress,
            )
            .await;

            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, report)?;
            println!("{}", output.display());
        }

        Commands::Config { set_api_base, show } => {
            if let Some(base) = set_api_base {
                let mut saved = Config::load_from(&Config::config_path()?)?;
                saved.set_api_base(&base)?;
                saved.save()?;
                config.api_base = saved.api_base;
                info!("API地址已保存");
            }

            if show {
                println!("设定:");
                println!("  API地址: {}", config.api_base);
                println!("  超时: {}秒", config.timeout_seconds);
                println!("  设定文件: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
