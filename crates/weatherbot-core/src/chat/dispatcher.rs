//! Command dispatcher.
//!
//! Each message is handled on its own; the only state shared between
//! messages is the stored preference and the weather cache. Persistence
//! failures stop at this boundary: they are logged and the user gets a
//! generic reply. Only a failure to deliver the reply is returned.

use tracing::{error, info};
use weatherbot_types::error::ChatError;
use weatherbot_types::log::NewInteractionLog;
use weatherbot_types::preference::UserPreference;

use crate::chat::command::ChatCommand;
use crate::chat::replier::{ChatReplier, IncomingMessage};
use crate::chat::replies;
use crate::repository::log::InteractionLogRepository;
use crate::repository::preference::PreferenceRepository;
use crate::weather::provider::WeatherProvider;
use crate::weather::service::WeatherService;

/// Maps bot commands to their handlers.
///
/// Generic over the repositories and weather provider so weatherbot-core
/// never depends on weatherbot-infra.
pub struct CommandDispatcher<L, P, W>
where
    L: InteractionLogRepository,
    P: PreferenceRepository,
    W: WeatherProvider,
{
    logs: L,
    preferences: P,
    weather: WeatherService<W>,
    bot_username: Option<String>,
}

impl<L, P, W> CommandDispatcher<L, P, W>
where
    L: InteractionLogRepository,
    P: PreferenceRepository,
    W: WeatherProvider,
{
    pub fn new(logs: L, preferences: P, weather: WeatherService<W>) -> Self {
        Self {
            logs,
            preferences,
            weather,
            bot_username: None,
        }
    }

    /// Only answer `/command@name` mentions that name this bot.
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    /// Handle one incoming message. Text that is not a known command is ignored.
    pub async fn handle<R: ChatReplier>(
        &self,
        message: &IncomingMessage,
        replier: &R,
    ) -> Result<(), ChatError> {
        let Some(command) = ChatCommand::parse_for(&message.text, self.bot_username.as_deref())
        else {
            return Ok(());
        };

        info!(
            user_id = message.user_id,
            user = %message.user_name,
            command = command.name(),
            "Received command"
        );

        match command {
            ChatCommand::Start => replier.reply(replies::START).await,
            ChatCommand::Weather { city } => self.send_weather(message, &city, replier).await,
            ChatCommand::SetCity { city } => self.set_city(message, &city, replier).await,
            ChatCommand::GetCity => self.get_city(message, replier).await,
        }
    }

    async fn send_weather<R: ChatReplier>(
        &self,
        message: &IncomingMessage,
        city: &str,
        replier: &R,
    ) -> Result<(), ChatError> {
        let city = if city.is_empty() {
            match self.preferences.get(message.user_id).await {
                Ok(Some(UserPreference {
                    preferred_city: Some(city),
                    ..
                })) if !city.is_empty() => {
                    info!(user_id = message.user_id, city = %city, "No city provided, using preferred city");
                    city
                }
                Ok(_) => return replier.reply(replies::WEATHER_NO_CITY).await,
                Err(e) => {
                    error!(user_id = message.user_id, error = %e, "Failed to read preferred city");
                    return replier.reply(replies::INTERNAL_ERROR).await;
                }
            }
        } else {
            city.to_string()
        };

        let snapshot = match self.weather.lookup(&city).await {
            Ok(snapshot) => snapshot,
            Err(_) => return replier.reply(replies::WEATHER_FAILED).await,
        };

        let report = replies::weather_report(&snapshot);
        replier.reply(&report).await?;

        let entry = NewInteractionLog {
            user_id: message.user_id,
            command: message.text.clone(),
            response: report,
        };
        if let Err(e) = self.logs.record(&entry).await {
            error!(user_id = message.user_id, error = %e, "Failed to write interaction log");
        }

        Ok(())
    }

    async fn set_city<R: ChatReplier>(
        &self,
        message: &IncomingMessage,
        city: &str,
        replier: &R,
    ) -> Result<(), ChatError> {
        if city.is_empty() {
            return replier.reply(replies::SET_CITY_USAGE).await;
        }

        match self.preferences.set_city(message.user_id, city).await {
            Ok(()) => {
                info!(user_id = message.user_id, city, "Preferred city set");
                replier.reply(&replies::city_set(city)).await
            }
            Err(e) => {
                error!(user_id = message.user_id, error = %e, "Error setting preferred city");
                replier.reply(replies::SET_CITY_FAILED).await
            }
        }
    }

    async fn get_city<R: ChatReplier>(
        &self,
        message: &IncomingMessage,
        replier: &R,
    ) -> Result<(), ChatError> {
        match self.preferences.get(message.user_id).await {
            Ok(Some(UserPreference {
                preferred_city: Some(city),
                ..
            })) => replier.reply(&replies::current_city(&city)).await,
            Ok(_) => replier.reply(replies::CITY_NOT_SET).await,
            Err(e) => {
                error!(user_id = message.user_id, error = %e, "Failed to read preferred city");
                replier.reply(replies::INTERNAL_ERROR).await
            }
        }
    }
}
