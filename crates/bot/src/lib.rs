//! MediaQ chat bot
//!
//! Chat members add URLs with `/add`; `/start` and `/help` tell them the
//! queue id a player should open. The bot never reads or pops entries.

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod poller;
pub mod replies;
pub mod telegram;
pub mod transport;

pub use command::Command;
pub use dispatcher::CommandDispatcher;
pub use error::BotError;
pub use poller::BotPoller;
pub use telegram::TelegramClient;
pub use transport::{ChatTransport, IncomingMessage, IncomingUpdate};
