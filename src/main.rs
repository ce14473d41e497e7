use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use weeklog::auth::SessionStore;
use weeklog::store::{seed, TimesheetStore};
use weeklog::{build_router, AppState};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(name = "weeklog", version = VERSION, about = "Timesheet management HTTP service")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Number of demo weeks to seed at startup (0 starts empty)
    #[arg(long, default_value_t = 120)]
    seed_weeks: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let store = TimesheetStore::new();
    if args.seed_weeks > 0 {
        seed::seed_demo_weeks(&store, args.seed_weeks).await;
    }

    let app = build_router(AppState::new(store, SessionStore::new()));
    let listener = TcpListener::bind(args.bind).await?;
    info!(addr = %listener.local_addr()?, version = VERSION, "weeklog listening");
    axum::serve(listener, app).await?;
    Ok(())
}
