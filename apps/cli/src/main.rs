mod app;
mod cli;
mod commands;
mod config;
mod logging;
mod notifier;
mod output;

use app::App;
use clap::Parser;
use cli::Cli;
use config::Config;
use logging::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        // Blocked submissions carry per-field messages
        if let Some(fields) = err
            .downcast_ref::<fintrack_core::Error>()
            .and_then(|e| e.field_errors())
        {
            for (field, message) in fields.iter() {
                eprintln!("  {field}: {message}");
            }
        }
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_format);
    let app = App::new(&config)?;
    commands::run(cli.command, &app).await
}
