use crate::models::event::BotEvent;
use crate::AppState;
use teloxide::{
    dptree,
    prelude::*,
    types::{PreCheckoutQuery, Update},
};
use tracing::{debug, error, info};

pub mod handlers;
pub mod keyboards;
pub mod texts;

pub async fn run_bot(
    bot: Bot,
    mut shutdown_signal: tokio::sync::broadcast::Receiver<()>,
    state: AppState,
) {
    info!("Starting bot dispatcher...");

    std::panic::set_hook(Box::new(|info| {
        error!("CRITICAL BOT PANIC: {:?}", info);
    }));

    match bot.get_me().await {
        Ok(me) => {
            let username = me.username.clone().unwrap_or("unknown".into());
            info!("Bot connected as: @{}", username);
        }
        Err(e) => {
            error!("CRITICAL: Bot failed to connect to Telegram: {}", e);
            return;
        }
    }

    let message_handler = Update::filter_message()
        .filter_map(|msg: Message| BotEvent::from_message(&msg))
        .endpoint(dispatch_event);
    let pre_checkout_handler = Update::filter_pre_checkout_query()
        .map(|q: PreCheckoutQuery| BotEvent::PreCheckout(q))
        .endpoint(dispatch_event);

    let mut dispatcher = Dispatcher::builder(
        bot,
        dptree::entry()
            .branch(message_handler)
            .branch(pre_checkout_handler),
    )
    .dependencies(dptree::deps![state])
    .default_handler(|upd: std::sync::Arc<Update>| async move {
        debug!("Unhandled update: {:?}", upd.id);
    })
    .build();

    tokio::select! {
        _ = dispatcher.dispatch() => {
            info!("Bot dispatcher exited naturally");
        }
        _ = shutdown_signal.recv() => {
            info!("Bot received shutdown signal, stopping...");
        }
    }
}

async fn dispatch_event(event: BotEvent, state: AppState) -> Result<(), teloxide::RequestError> {
    handlers::handle_event(event, &state).await;
    Ok(())
}
