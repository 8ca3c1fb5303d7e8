//! Pop the next available run file from the BUFU file server.
//!
//! One-shot trigger: sends `GET /popfile?runnumber=<N>` and prints the
//! response status line and raw body to stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bufu_client::{Config, FileServerClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone()));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let client = FileServerClient::new(&config);
    let reply = client.popfile().await?;

    println!("{}", reply.status);
    println!("{}", reply.body);

    Ok(())
}
