//! Server mode
//!
//! Configures and runs the HTTP server around a prepared link service,
//! then waits for either server exit or a shutdown signal.

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::Result;
use tracing::{info, warn};

use crate::api::services::{AppStartTime, health_routes, redirect_routes, shorten_routes};
use crate::config::AppConfig;
use crate::runtime::startup;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: AppConfig) -> Result<()> {
    // Record application start time
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let startup = startup::prepare_server_startup(&config).map_err(|e| {
        tracing::error!("Server startup failed: {}", e);
        e
    })?;

    let service = startup.service;
    let bind_address = startup.bind_address;

    info!("Using {} workers for the server", startup.workers);

    // redirect_routes 注册在最后：空前缀 scope 会兜住所有剩余请求
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .wrap(Compress::default())
            .service(health_routes())
            .service(shorten_routes())
            .service(redirect_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .client_disconnect_timeout(std::time::Duration::from_millis(1000))
    .workers(startup.workers)
    .bind(&bind_address)?
    .run();

    info!("Starting server at http://{}", bind_address);

    // Wait for server or shutdown signal
    tokio::select! {
        res = server => {
            res?;
        }
        _ = listen_for_shutdown() => {}
    }

    info!("Server stopped");
    Ok(())
}

/// 等待 Ctrl+C 信号
///
/// 每次变更都已同步落盘，关闭前没有需要刷新的状态。
async fn listen_for_shutdown() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}
