//! dukcapild - Dispendukcapil Kota Semarang service-desk bot daemon.

use anyhow::{bail, Context, Result};
use dukcapil_shared::Responder;
use dukcapild::handlers::{bot_commands, schema};
use dukcapild::{BotData, Config};
use std::sync::Arc;
use std::time::Duration;
use teloxide::dispatching::Dispatcher;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::AllowedUpdate;
use teloxide::update_listeners::Polling;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("[BOOT] dukcapild v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    config.validate().context("Invalid configuration")?;
    let token = config.bot.token()?;

    let client = teloxide::net::default_reqwest_settings()
        .timeout(Duration::from_secs(config.bot.request_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;
    let bot = match config.bot.api_base.parse() {
        Ok(url) => Bot::with_client(token, client).set_api_url(url),
        Err(e) => bail!("Invalid bot.api_base {:?}: {}", config.bot.api_base, e),
    };

    let me = bot.get_me().await.context("Bot token rejected")?;
    let username = me.username.clone().unwrap_or_default();
    info!("[BOOT] Authorized as @{}", username);

    let responder = Responder::builtin(config.format.max_message_chars)?;
    let dangling = responder.dangling_topics();
    if !dangling.is_empty() {
        bail!("Catalog is missing topics: {}", dangling.join(", "));
    }

    bot.delete_webhook()
        .drop_pending_updates(config.bot.drop_pending_updates)
        .await
        .context("Failed to remove webhook")?;

    if config.bot.register_commands {
        if let Err(e) = bot.set_my_commands(bot_commands()).await {
            warn!("[BOOT] Command list not registered: {}", e);
        }
    }

    let listener = Polling::builder(bot.clone())
        .timeout(Duration::from_secs(config.bot.poll_timeout_secs))
        .allowed_updates(vec![AllowedUpdate::Message, AllowedUpdate::CallbackQuery])
        .build();
    let data = Arc::new(BotData { responder, username });

    info!("[BOOT] Ready");
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![data])
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd.kind);
        })
        // One worker for all chats: updates are answered one at a time
        .distribution_function(|_| Some(()))
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("Error polling for updates"),
        )
        .await;

    info!("Shutting down gracefully");
    Ok(())
}
