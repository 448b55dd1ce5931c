//! Telegram adapter built on teloxide long polling.
//!
//! Converts incoming `Message`s into [`IncomingMessage`]s, hands them to the
//! [`CommandDispatcher`], and delivers replies through [`TelegramReplier`].
//! Each update runs in its own task under teloxide's dispatcher.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::BotCommand;

use weatherbot_core::chat::dispatcher::CommandDispatcher;
use weatherbot_core::chat::replier::{ChatReplier, IncomingMessage};
use weatherbot_core::repository::log::InteractionLogRepository;
use weatherbot_core::repository::preference::PreferenceRepository;
use weatherbot_core::weather::provider::WeatherProvider;
use weatherbot_types::error::ChatError;

/// Replies into the chat a message came from.
pub struct TelegramReplier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramReplier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

impl ChatReplier for TelegramReplier {
    async fn reply(&self, text: &str) -> Result<(), ChatError> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map(|_| ())
            .map_err(|e| ChatError::Send(e.to_string()))
    }
}

/// Commands advertised in the Telegram client's command menu.
pub fn bot_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Как пользоваться ботом"),
        BotCommand::new("weather", "Погода в городе: /weather <город>"),
        BotCommand::new("set_city", "Сохранить город по умолчанию"),
        BotCommand::new("get_city", "Показать город по умолчанию"),
    ]
}

/// Extract what the dispatcher needs. Messages without text or sender are skipped.
pub fn incoming_message(msg: &Message) -> Option<IncomingMessage> {
    let text = msg.text()?;
    let user = msg.from.as_ref()?;
    let user_id = i64::try_from(user.id.0).ok()?;

    Some(IncomingMessage {
        user_id,
        user_name: user.full_name(),
        text: text.to_string(),
    })
}

/// Register the command menu and poll for updates until Ctrl+C.
///
/// The dispatcher learns the bot's username from `getMe` so that commands
/// mentioning other bots are ignored.
pub async fn run_polling<L, P, W>(
    bot: Bot,
    dispatcher: CommandDispatcher<L, P, W>,
) -> Result<(), teloxide::RequestError>
where
    L: InteractionLogRepository + 'static,
    P: PreferenceRepository + 'static,
    W: WeatherProvider + 'static,
{
    bot.set_my_commands(bot_commands()).await?;

    let me = bot.get_me().await?;
    let dispatcher = match me.user.username.clone() {
        Some(username) => dispatcher.with_bot_username(username),
        None => dispatcher,
    };
    let dispatcher = Arc::new(dispatcher);
    tracing::info!(
        username = me.user.username.as_deref().unwrap_or_default(),
        "Telegram bot started, polling for updates"
    );

    let handler = Update::filter_message().endpoint(handle_message::<L, P, W>);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![dispatcher])
        .default_handler(|_| async {
            tracing::trace!("Ignoring non-message update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("Telegram bot stopped");
    Ok(())
}

async fn handle_message<L, P, W>(
    bot: Bot,
    msg: Message,
    dispatcher: Arc<CommandDispatcher<L, P, W>>,
) -> ResponseResult<()>
where
    L: InteractionLogRepository + 'static,
    P: PreferenceRepository + 'static,
    W: WeatherProvider + 'static,
{
    let Some(incoming) = incoming_message(&msg) else {
        return Ok(());
    };

    let replier = TelegramReplier::new(bot, msg.chat.id);
    if let Err(e) = dispatcher.handle(&incoming, &replier).await {
        tracing::error!(user_id = incoming.user_id, error = %e, "Failed to deliver reply");
    }

    Ok(())
}
