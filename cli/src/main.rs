//! CLI entrypoint for BoxAI
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use boxai_application::{CompareModelsUseCase, GenerationParams};
use boxai_domain::{ComparisonResult, OutputFormat, Query, ServerConfig};
use boxai_infrastructure::{ConfigLoader, build_provider_set};
use boxai_presentation::{Cli, Command, ConsoleFormatter, ProgressStyleKind, router};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Serve {
        host: None,
        port: None,
    });

    init_tracing(cli.verbose, matches!(command, Command::Serve { .. }));

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let (config, warnings) = ConfigLoader::load_validated(cli.config.as_ref(), cli.no_config)?;
    for issue in &warnings {
        warn!("{}", issue.message);
    }

    // === Dependency Injection ===
    let registry = Arc::new(config.registry());
    let providers = build_provider_set(&config.provider_config(), GenerationParams::default())?;
    let use_case = Arc::new(CompareModelsUseCase::new(registry, providers));

    match command {
        Command::Serve { host, port } => {
            let mut server = config.server_config();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            serve(use_case, server).await
        }
        Command::Ask {
            prompt,
            model,
            output,
            quiet,
        } => ask(&use_case, prompt, model, output.into(), quiet).await,
        Command::Models => {
            print!(
                "{}",
                ConsoleFormatter::format_models(&use_case.registry().list_available())
            );
            Ok(())
        }
    }
}

/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
/// The server logs at info by default, one-shot commands at warn.
fn init_tracing(verbose: u8, serving: bool) {
    let level = match verbose {
        0 if serving => "info",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn serve(use_case: Arc<CompareModelsUseCase>, server: ServerConfig) -> Result<()> {
    let address = server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(
        address = %address,
        mode = %server.mode,
        origins = ?server.allowed_origins,
        "Server is running"
    );

    axum::serve(listener, router(use_case, &server))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

async fn ask(
    use_case: &CompareModelsUseCase,
    prompt: String,
    models: Vec<String>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let models = if models.is_empty() {
        use_case
            .registry()
            .list_available()
            .into_iter()
            .map(|listing| listing.id)
            .collect()
    } else {
        models
    };

    let query = Query::try_new(prompt, models)?;

    let progress =
        ProgressStyleKind::select(quiet, format, std::io::stderr().is_terminal()).into_progress();

    let responses = use_case
        .execute_with_progress(&query, progress.as_ref())
        .await;
    let result = ComparisonResult::new(query.prompt(), responses);

    println!("{}", ConsoleFormatter::render(&result, format));
    Ok(())
}
