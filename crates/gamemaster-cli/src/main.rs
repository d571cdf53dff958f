//! Game-master terminal client entry point.

use std::error::Error;
use std::sync::Arc;

use gamemaster_cli::config::ClientConfig;
use gamemaster_cli::{render, repl};
use gamemaster_core::clock::SystemClock;
use gamemaster_http::http_transport::HttpTransport;
use gamemaster_session::application::dispatcher::TurnDispatcher;
use gamemaster_session::domain::aggregates::Session;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so they never interleave with the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(
        endpoint = %config.orchestrator_url,
        session_id = %config.session_id,
        agent = %config.agent,
        "starting game-master client"
    );

    let transport = HttpTransport::new(config.orchestrator_url, config.request_timeout)?;
    let dispatcher = TurnDispatcher::new(
        Session::new(config.session_id, config.agent),
        Arc::new(transport),
        Arc::new(SystemClock),
    );

    println!("Maître du Jeu IA : votre compagnon d'aventure numérique (/help pour l'aide)");

    let renderer = tokio::spawn(render::follow(
        dispatcher.subscribe(),
        tokio::io::stdout(),
    ));

    repl::run(
        &dispatcher,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    // Dropping the dispatcher closes the snapshot channel; the renderer then
    // prints what is left and stops.
    drop(dispatcher);
    renderer.await??;

    Ok(())
}
