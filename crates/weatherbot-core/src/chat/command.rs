//! Bot command parsing.

/// A recognised bot command with its trimmed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Start,
    /// `/weather [city]`; an empty city means "use the stored preference".
    Weather { city: String },
    /// `/set_city [city]`; an empty city is answered with usage help.
    SetCity { city: String },
    GetCity,
}

impl ChatCommand {
    /// Parse message text, accepting an `@botname` suffix for any bot.
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_for(text, None)
    }

    /// Parse message text. Returns None for non-command text and unknown commands.
    ///
    /// The `/` must be the first character. The command token may carry an
    /// `@botname` suffix (group chats); when `bot_username` is known, a suffix
    /// naming another bot yields None. Usernames compare case-insensitively.
    /// Command names are case-sensitive; the argument is used verbatim after
    /// trimming.
    pub fn parse_for(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let (head, rest) = text
            .split_once(char::is_whitespace)
            .unwrap_or((text, ""));

        let name = head.strip_prefix('/')?;
        let name = match (name.split_once('@'), bot_username) {
            (Some((name, mention)), Some(own)) => {
                if !mention.eq_ignore_ascii_case(own) {
                    return None;
                }
                name
            }
            (Some((name, _)), None) => name,
            (None, _) => name,
        };
        let arg = rest.trim().to_string();

        match name {
            "start" => Some(Self::Start),
            "weather" => Some(Self::Weather { city: arg }),
            "set_city" => Some(Self::SetCity { city: arg }),
            "get_city" => Some(Self::GetCity),
            _ => None,
        }
    }

    /// Command name without the leading slash, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Weather { .. } => "weather",
            Self::SetCity { .. } => "set_city",
            Self::GetCity => "get_city",
        }
    }
}
