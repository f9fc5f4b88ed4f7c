mod config;
mod discord_bot;
mod file_logger;
mod models;
mod picker;
mod service;

use crate::config::Config;
use crate::file_logger::FileLogger;
use crate::models::LineupResponse;
use crate::picker::HeroPicker;
use crate::service::PickerService;
use axum::extract::State;
use axum::{routing::post, Json, Router};
use axum_macros::debug_handler;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
struct AppState {
    service: Arc<PickerService>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let audit = match FileLogger::new("riftbot.log") {
        Ok(audit) => audit,
        Err(e) => {
            error!("failed to open audit log: {}", e);
            std::process::exit(1);
        }
    };

    let picker = Arc::new(HeroPicker::new(config.data_dir.as_str()));
    let service = Arc::new(PickerService::new(picker, Arc::new(audit)));

    let discord_service = service.clone();
    let token = config.discord_token.clone();
    tokio::spawn(async move {
        if let Err(e) = discord_bot::run_discord(&token, discord_service).await {
            error!("discord client stopped: {}", e);
        }
    });

    let app = Router::new()
        .route("/lineup", post(handle_lineup))
        .with_state(AppState { service });

    info!("riftbot listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("champion draft bot stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
    }
}

#[debug_handler]
async fn handle_lineup(State(state): State<AppState>) -> Json<LineupResponse> {
    match state.service.try_lineup() {
        Ok(message) => Json(LineupResponse {
            message,
            status: "Success".to_string(),
        }),
        Err(e) => {
            error!("lineup request failed: {}", e);
            Json(LineupResponse {
                message: "阵容生成失败，请稍后再试~".to_string(),
                status: format!("Error: {}", e),
            })
        }
    }
}
