use salesdash_core::logging_facility;
use salesdash_server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    logging_facility::init(config.log_profile);

    start_server(config).await
}
