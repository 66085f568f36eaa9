use actix_web::middleware::{self, DefaultHeaders, from_fn};
use actix_web::{App, HttpServer, web};
use clap::Parser;
use micro::config::Config;
use micro::https_redirect::redirect_to_https;
use tracing_subscriber::EnvFilter;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let red_api = web::Data::new(config.red_api()?);
    let mode = web::Data::new(config.mode);

    tracing::info!(
        address = %config.address,
        port = config.port,
        mode = ?config.mode,
        red_api = red_api.base_url(),
        "starting paradero"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(DefaultHeaders::new().add(("Server", "Paradero")))
            .wrap(middleware::Compress::default())
            .wrap(from_fn(redirect_to_https))
            .app_data(red_api.clone())
            .app_data(mode.clone())
            .configure(micro::configure)
    })
    .workers(config.workers)
    .bind((config.address.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("paradero stopped");

    Ok(())
}
