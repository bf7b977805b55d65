use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;

mod config;
mod fixture;
mod routes;

use config::ServerConfig;
use fixture::load_fixture;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env()?;
    let fixture = Arc::new(load_fixture()?);

    let routes = routes::routes(&config, fixture);

    log::info!("📡 Serving at {} (static files from {})", config.bind, config.cdn_dir.display());
    warp::serve(routes).run(config.bind).await;

    Ok(())
}
