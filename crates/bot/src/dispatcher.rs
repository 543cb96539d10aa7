// Command Dispatcher
//
// Maps a parsed command from a chat to the queue services and produces the
// reply text, if any. The queue id is always derived from the chat id here;
// chat members never see or pass raw ids.

use crate::command::Command;
use crate::replies;
use mediaq_core::application::{IdentityDeriver, QueueService};
use mediaq_core::domain::DomainError;
use mediaq_core::error::Result;
use std::sync::Arc;
use tracing::debug;

pub struct CommandDispatcher {
    deriver: IdentityDeriver,
    service: Arc<QueueService>,
}

impl CommandDispatcher {
    pub fn new(deriver: IdentityDeriver, service: Arc<QueueService>) -> Self {
        Self { deriver, service }
    }

    /// Run `command` for `chat_id`
    ///
    /// Returns the reply to send back, or `None` when the command succeeds
    /// silently (`/add`). URL validation failures become replies; any other
    /// failure is returned to the caller.
    pub async fn handle(&self, chat_id: i64, command: Command) -> Result<Option<String>> {
        let queue_id = self.deriver.derive(chat_id);
        debug!(command = ?command, queue_id = %queue_id, "Dispatching command");

        match command {
            Command::Start => Ok(Some(replies::start(&queue_id))),
            Command::Help => Ok(Some(replies::help(&queue_id))),
            Command::Add(url) => match self.service.enqueue(&queue_id, url.as_deref()).await {
                Ok(_) => Ok(None),
                Err(e) => match e.as_domain() {
                    Some(DomainError::MissingUrl) => Ok(Some(replies::MISSING_URL.to_string())),
                    Some(DomainError::InvalidUrl(_)) => Ok(Some(replies::INVALID_URL.to_string())),
                    _ => Err(e),
                },
            },
        }
    }
}
