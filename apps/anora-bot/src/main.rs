use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod bot;
mod config;
mod error;
mod messenger;
mod models;
mod services;
mod state;
#[cfg(test)]
mod testing;

use crate::config::Config;
use crate::messenger::TelegramMessenger;
use crate::services::entitlement_service::EntitlementService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anora_bot=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Anora Art Bot...");

    let config = Config::from_env()?;
    info!("Mini app URL: {}", config.webapp_url);

    let bot = Bot::new(&config.bot_token);
    let state = AppState::new(
        Arc::new(TelegramMessenger::new(bot.clone())),
        EntitlementService::in_memory(),
        config.webapp_url.clone(),
        config.invoice_photo_url.clone(),
    );

    let (shutdown_tx, _) = tokio::sync::broadcast::channel(1);

    if config.api_enabled {
        let api_state = state.clone();
        let api_shutdown = shutdown_tx.subscribe();
        let port = config.api_listen_port;
        tokio::spawn(async move {
            if let Err(e) = api::serve(api_state, port, api_shutdown).await {
                error!("Mini app API stopped: {}", e);
            }
        });
    } else {
        info!("Mini app API disabled");
    }

    let signal_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, shutting down");
            let _ = signal_tx.send(());
        }
    });

    bot::run_bot(bot, shutdown_tx.subscribe(), state).await;
    Ok(())
}
