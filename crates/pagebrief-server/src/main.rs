//! PageBrief server - HTTP front end and CLI for LLM page briefs

mod config;
mod render;
mod server;

use clap::Parser;
use config::{Cli, Commands, OutputFormat};
use pagebrief::BriefError;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before parsing, so env fallbacks see it)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagebrief=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut cli = Cli::parse();

    match cli.take_command() {
        Commands::Serve(serve) => {
            let briefer = cli.llm.briefer()?;
            if briefer.is_none() {
                tracing::warn!("OPENAI_API_KEY is not set; every request will fail");
            }
            server::serve(server::AppState::new(briefer), &serve.host, serve.port).await
        }
        Commands::Brief { url, task, output } => {
            let briefer = cli.llm.briefer()?.ok_or(BriefError::MissingApiKey)?;
            let brief = briefer.run(task, &url).await?;

            let text = match output {
                OutputFormat::Text => brief.content.clone().unwrap_or_default(),
                OutputFormat::Html => render::render_brief(&brief)?,
            };
            writeln_safe(&text)
        }
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        return Err(e.into());
    }
    Ok(())
}
