mod api; // JSON surface over the scan pipeline
mod config;
mod handlers;
mod models;
mod services;

#[cfg(feature = "http-server")]
use api::server::create_router;

use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;

use config::Config;
use handlers::{result_view, ScanHandler};
use services::{
    DeniedLocationProvider, FileCamera, FixedLocationProvider, LocationProvider,
    SimulatedClassifier,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init();

    log::info!("🚀 Starting Drink Finder...");

    let config = Config::from_env()?;

    let location: Arc<dyn LocationProvider> = if config.location_permission_denied {
        log::info!("📍 Location provider: permission denied");
        Arc::new(DeniedLocationProvider)
    } else {
        match config.device_position {
            Some(position) => log::info!("📍 Location provider: fixed at {}", position),
            None => log::info!("📍 Location provider: no position fix configured"),
        }
        Arc::new(FixedLocationProvider::new(config.device_position))
    };

    let scan_handler = Arc::new(ScanHandler::new(
        Arc::new(SimulatedClassifier),
        location,
        config.rng_seed,
    ));
    log::info!("✅ Scan handler initialized");

    // One-shot scan of a photo on disk
    if let Some(photo_path) = &config.photo_path {
        let camera = FileCamera::new(photo_path);
        let result = scan_handler.scan(&camera).await?;
        println!("\n{}\n", result_view::render(&result));
    }

    #[cfg(feature = "http-server")]
    {
        let app = create_router(scan_handler.clone());
        let listener = tokio::net::TcpListener::bind(config.bind_addr.as_str()).await?;
        log::info!("🌐 HTTP server listening on {}", config.bind_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                log::info!("🛑 Shutting down...");
            })
            .await?;
    }

    #[cfg(not(feature = "http-server"))]
    {
        if config.photo_path.is_none() {
            log::warn!("⚠️ DRINK_PHOTO not set, scanning with the placeholder photo");
            let result = scan_handler.scan_photo(services::PhotoRef::Placeholder).await?;
            println!("\n{}\n", result_view::render(&result));
        }
    }

    Ok(())
}
