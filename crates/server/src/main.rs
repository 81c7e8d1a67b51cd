use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use clap::Parser;
use exercise_tracker::{
    app,
    cli::{Cli, StoreKind},
    db,
    store::{MemoryStore, SqliteStore},
    AppState,
};
use shared::{configure_tracing, load_dotenv};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing()?;

    let args = Cli::parse();
    debug!(?args);

    let state = match args.record_store {
        StoreKind::Sqlite => {
            // Run the migrations synchronously before creating the pool or launching the server
            let ran = db::run_migrations(&args.sqlite_connection_string)?;
            info!("Ran {ran} db migrations");

            AppState::new(SqliteStore::new(db::create_pool(&args.sqlite_connection_string)?))
        },
        StoreKind::Memory => {
            warn!("Using the in-memory store, records are lost on shutdown");
            AppState::new(MemoryStore::new())
        },
    };

    let socket = SocketAddr::new(IpAddr::from_str(&args.bind_addr)?, args.port);

    let listener = TcpListener::bind(socket).await?;
    info!("Your app is listening on port {}", listener.local_addr()?.port());

    axum::serve(listener, app(state, &args)).await?;

    Ok(())
}
