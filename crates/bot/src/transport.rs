// Chat Transport Port
//
// The poller only sees these neutral types, so it can be driven by a
// scripted transport in tests.

use crate::error::Result;
use async_trait::async_trait;

/// One update from the bot API
///
/// `message` is `None` for updates the bot does not handle (edits, joins,
/// stickers...). Their ids still advance the poll offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingUpdate {
    pub update_id: i64,
    pub message: Option<IncomingMessage>,
}

/// A text message in some chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub text: String,
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// This bot's handle without the leading `@`, if the API reports one
    async fn bot_username(&self) -> Result<Option<String>>;

    /// Long-poll for updates with `update_id >= offset`
    ///
    /// Passing a higher offset acknowledges every earlier update.
    async fn poll(&self, offset: i64) -> Result<Vec<IncomingUpdate>>;

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;
}
