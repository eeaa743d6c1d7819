use anyhow::Result;
use marketplace::config::Config;
use marketplace::constants::LOG_BUFFER_CAPACITY;
use marketplace::logger::{self, LogBuffer};
use marketplace::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: invalid configuration: {e:#}");
            eprintln!("\n💡 Run `marketplace --generate-config` to write a fresh default file.");
            return Ok(());
        }
    };

    let logs = LogBuffer::new(LOG_BUFFER_CAPACITY);
    if let Some(path) = logger::init_logging(&config.logging, logs.clone())? {
        log::info!("Logging to {}", path.display());
    }

    // Run the TUI application
    ui::run_app(config, logs).await?;

    Ok(())
}
