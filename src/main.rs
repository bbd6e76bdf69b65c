use actix_web::{App, HttpServer};
use tracing::info;

use catalog_api::config::Config;
use catalog_api::middleware::RequestLogger;
use catalog_api::{configure_app, db};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let pool = db::init_pool(&config.database_url).await?;

    info!(addr = %config.bind_addr, "starting catalog API");

    HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            .configure(configure_app(pool.clone()))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await?;

    Ok(())
}
