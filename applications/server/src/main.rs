/// Vidlist Server - playlist sharing API and web UI host
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidlist_server::{api, config::ServerConfig, state::AppState};
use vidlist_storage::Storage;

#[derive(Parser)]
#[command(name = "vidlist-server")]
#[command(about = "Vidlist playlist sharing server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List stored playlists
    List {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "vidlist_server=info,vidlist_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::List { config } => {
            list_playlists(config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load_from(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

fn open_storage(config: &ServerConfig) -> anyhow::Result<Storage> {
    let storage = Storage::open(
        config.storage.supabase_url.as_deref(),
        config.storage.supabase_anon_key.as_deref(),
        Some(config.storage.request_timeout()),
    )?;
    Ok(storage)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Vidlist Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let storage = open_storage(&config)?;
    tracing::info!("Storage backend: {}", storage.backend());

    let web_dir = config.server.web_dir.clone();
    let web_dir = if web_dir.is_dir() {
        tracing::info!("Serving web UI from {}", web_dir.display());
        Some(web_dir)
    } else {
        tracing::warn!("Web directory {} not found, serving API only", web_dir.display());
        None
    };

    let app = api::router(AppState::new(storage, web_dir));

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn list_playlists(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let storage = open_storage(&config)?;
    let playlists = storage.list_all().await;

    println!("Playlists ({}):", storage.backend());
    for playlist in playlists {
        println!(
            "  {} - {} ({} videos)",
            playlist.id,
            playlist.name,
            playlist.urls.len()
        );
    }

    Ok(())
}
