// Bot Poller
//
// Long-running loop: poll the transport, dispatch each command, send the
// reply. A failing update is logged and acknowledged; it is never retried.

use crate::command::Command;
use crate::dispatcher::CommandDispatcher;
use crate::transport::{ChatTransport, IncomingUpdate};
use mediaq_core::application::ShutdownToken;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Pause after a failed poll before trying again
const DEFAULT_ERROR_BACKOFF: Duration = Duration::from_secs(5);

pub struct BotPoller {
    transport: Arc<dyn ChatTransport>,
    dispatcher: CommandDispatcher,
    error_backoff: Duration,
}

impl BotPoller {
    pub fn new(transport: Arc<dyn ChatTransport>, dispatcher: CommandDispatcher) -> Self {
        Self {
            transport,
            dispatcher,
            error_backoff: DEFAULT_ERROR_BACKOFF,
        }
    }

    pub fn with_error_backoff(mut self, backoff: Duration) -> Self {
        self.error_backoff = backoff;
        self
    }

    /// Run until `shutdown` fires
    pub async fn run(self, mut shutdown: ShutdownToken) {
        // Without our own handle, `/cmd@AnyBot` is accepted
        let username = match self.transport.bot_username().await {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, "Could not resolve bot username");
                None
            }
        };
        info!(bot = ?username, "Bot polling started");

        let mut offset = 0;
        while !shutdown.is_shutdown() {
            let polled = tokio::select! {
                _ = shutdown.wait() => break,
                polled = self.transport.poll(offset) => polled,
            };

            match polled {
                Ok(updates) => {
                    for update in updates {
                        offset = offset.max(update.update_id + 1);
                        self.handle_update(update, username.as_deref()).await;
                    }
                }
                Err(e) => {
                    warn!(error = %e, offset, "Polling failed");
                    tokio::select! {
                        _ = shutdown.wait() => break,
                        _ = tokio::time::sleep(self.error_backoff) => {}
                    }
                }
            }
        }

        info!("Bot polling stopped");
    }

    async fn handle_update(&self, update: IncomingUpdate, username: Option<&str>) {
        let Some(message) = update.message else {
            return;
        };
        let Some(command) = Command::parse(&message.text, username) else {
            return;
        };

        match self.dispatcher.handle(message.chat_id, command).await {
            Ok(Some(reply)) => {
                if let Err(e) = self.transport.send_message(message.chat_id, &reply).await {
                    warn!(update_id = update.update_id, error = %e, "Failed to send reply");
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(update_id = update.update_id, error = %e, "Update caused error");
            }
        }
    }
}
