use anyhow::{bail, Context, Result};
use locale_sync::config::Config;
use locale_sync::history::GitHistory;
use locale_sync::sync::Synchronizer;
use locale_sync::translation::OpenAiTranslator;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_sync=info".parse()?),
        )
        .init();

    info!("Starting locale synchronization");

    // Load configuration from environment
    let config = Config::from_env()?;
    let targets = config.target_languages()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .context("Failed to create HTTP client")?;
    let translator = OpenAiTranslator::new(client, &config);
    let history = GitHistory::new(&config.repo_root);

    info!(
        "Syncing {} locales from {} (history window: {} commits)",
        targets.len(),
        config.translations_dir.display(),
        config.history_window
    );

    let synchronizer = Synchronizer::new(&config, history, translator)?;
    let report = synchronizer.run(&targets).await;
    report.log_summary();

    if !report.is_success() {
        let codes: Vec<_> = report.failed.iter().map(|f| f.code.as_str()).collect();
        bail!("{} locale(s) failed: {}", codes.len(), codes.join(", "));
    }

    info!("All locales synchronized");
    Ok(())
}
