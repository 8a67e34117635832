use anyhow::Context;
use clap::Parser;
use cli::{Args, Command, ServeArgs};
use tokio::net::TcpListener;

mod app_context;
mod cli;
mod greeter;
mod health;
mod http;
mod logging;
mod map;
mod places;
mod upstream;
mod weather;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();

    match args.command {
        Command::Serve(serve_args) => serve(serve_args).await,
        Command::Greet(greet_args) => greeter::terminal::run(greet_args).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let app_context =
        app_context::init(&args).context("Failed to initialize upstream API clients.")?;
    let router = http::router::new(&args, app_context).context("Invalid CORS origin.")?;

    let listener = TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}.", args.listen_address))?;
    tracing::info!("API server listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .context("Error spinning up the API server.")
}
