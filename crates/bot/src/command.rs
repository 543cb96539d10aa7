//! Chat command parsing
//!
//! Accepts `/cmd`, `/cmd args...` and the group-chat form `/cmd@BotName`.
//! Commands addressed to a different bot are dropped.

/// A recognised bot command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// First argument only; anything after it is ignored
    Add(Option<String>),
}

impl Command {
    /// Parse a message text
    ///
    /// `bot_username` is this bot's handle without the `@`. When it is known,
    /// `/cmd@Other` is not ours and yields `None`.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let head = parts.next()?.strip_prefix('/')?;

        let name = match head.split_once('@') {
            Some((name, target)) => {
                if let Some(me) = bot_username {
                    if !target.eq_ignore_ascii_case(me) {
                        return None;
                    }
                }
                name
            }
            None => head,
        };

        match name.to_ascii_lowercase().as_str() {
            "start" => Some(Command::Start),
            "help" => Some(Command::Help),
            "add" => Some(Command::Add(parts.next().map(str::to_string))),
            _ => None,
        }
    }
}
