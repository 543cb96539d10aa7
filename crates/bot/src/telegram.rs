//! Telegram Bot API client
//!
//! Long polling via `getUpdates`, replies via `sendMessage`. Only the fields
//! the bot reads are modelled; everything else in the payloads is ignored.

use crate::error::{BotError, Result};
use crate::transport::{ChatTransport, IncomingMessage, IncomingUpdate};
use async_trait::async_trait;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Server-side long-poll timeout
const POLL_TIMEOUT_SECS: u64 = 30;

/// Client timeout must outlast the long poll
const HTTP_TIMEOUT: Duration = Duration::from_secs(POLL_TIMEOUT_SECS + 10);

/// Response envelope shared by every Bot API method
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    error_code: Option<i64>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(BotError::Api {
                code: self.error_code.unwrap_or(0),
                description: self
                    .description
                    .unwrap_or_else(|| "response carried no result".to_string()),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct User {
    username: Option<String>,
}

impl From<Update> for IncomingUpdate {
    fn from(update: Update) -> Self {
        let message = update.message.and_then(|m| {
            m.text.map(|text| IncomingMessage {
                chat_id: m.chat.id,
                text,
            })
        });
        IncomingUpdate {
            update_id: update.update_id,
            message,
        }
    }
}

#[derive(Serialize)]
struct GetUpdates<'a> {
    offset: i64,
    timeout: u64,
    allowed_updates: &'a [&'a str],
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

/// Telegram Bot API client
///
/// The bot token is part of `endpoint`; keep this type out of `Debug` output.
pub struct TelegramClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TelegramClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_api_base(DEFAULT_API_BASE, token)
    }

    /// Client against a non-default API host (local Bot API server, tests)
    pub fn with_api_base(api_base: &str, token: &str) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/bot{}", api_base.trim_end_matches('/'), token),
        })
    }

    async fn call<P, T>(&self, method: &str, params: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // Error statuses still carry a JSON envelope with the description
        let response: ApiResponse<T> = self
            .client
            .post(format!("{}/{}", self.endpoint, method))
            .json(params)
            .send()
            .await?
            .json()
            .await?;

        response.into_result()
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn bot_username(&self) -> Result<Option<String>> {
        let me: User = self.call("getMe", &serde_json::json!({})).await?;
        Ok(me.username)
    }

    async fn poll(&self, offset: i64) -> Result<Vec<IncomingUpdate>> {
        let params = GetUpdates {
            offset,
            timeout: POLL_TIMEOUT_SECS,
            allowed_updates: &["message"],
        };
        let updates: Vec<Update> = self.call("getUpdates", &params).await?;
        debug!(offset, count = updates.len(), "Received updates");

        Ok(updates.into_iter().map(IncomingUpdate::from).collect())
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let _: IgnoredAny = self
            .call("sendMessage", &SendMessage { chat_id, text })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "123:abc";

    async fn client_for(server: &MockServer) -> TelegramClient {
        TelegramClient::with_api_base(&server.uri(), TOKEN).unwrap()
    }

    #[tokio::test]
    async fn test_poll_maps_updates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/getUpdates"))
            .and(body_partial_json(json!({ "offset": 40, "timeout": 30 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": [
                    {
                        "update_id": 41,
                        "message": {
                            "message_id": 1,
                            "date": 0,
                            "chat": { "id": -1001, "type": "group" },
                            "text": "/add http://v.example"
                        }
                    },
                    {
                        "update_id": 42,
                        "message": {
                            "message_id": 2,
                            "date": 0,
                            "chat": { "id": -1001, "type": "group" },
                            "sticker": {}
                        }
                    },
                    { "update_id": 43, "edited_message": {} }
                ]
            })))
            .mount(&server)
            .await;

        let updates = client_for(&server).await.poll(40).await.unwrap();
        assert_eq!(
            updates,
            vec![
                IncomingUpdate {
                    update_id: 41,
                    message: Some(IncomingMessage {
                        chat_id: -1001,
                        text: "/add http://v.example".to_string()
                    })
                },
                IncomingUpdate {
                    update_id: 42,
                    message: None
                },
                IncomingUpdate {
                    update_id: 43,
                    message: None
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_api_error_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/getUpdates"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "ok": false,
                "error_code": 401,
                "description": "Unauthorized"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.poll(0).await.unwrap_err();
        match err {
            BotError::Api { code, description } => {
                assert_eq!(code, 401);
                assert_eq!(description, "Unauthorized");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_partial_json(json!({ "chat_id": 7, "text": "hi" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": { "message_id": 9, "date": 0, "chat": { "id": 7 } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).await.send_message(7, "hi").await.unwrap();
    }

    #[tokio::test]
    async fn test_bot_username() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/getMe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": { "id": 1, "is_bot": true, "first_name": "MediaQ", "username": "MediaQBot" }
            })))
            .mount(&server)
            .await;

        let name = client_for(&server).await.bot_username().await.unwrap();
        assert_eq!(name.as_deref(), Some("MediaQBot"));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // Nothing listens on port 9 (discard)
        let client = TelegramClient::with_api_base("http://127.0.0.1:9", TOKEN).unwrap();
        let err = client.poll(0).await.unwrap_err();
        assert!(matches!(err, BotError::Transport(_)));
    }

    #[tokio::test]
    async fn test_transport_error_hides_token() {
        let token = "123456:SECRET-TOKEN";
        let client = TelegramClient::with_api_base("http://127.0.0.1:9", token).unwrap();

        let err = client.poll(0).await.unwrap_err();
        assert!(!err.to_string().contains("SECRET-TOKEN"), "{err}");
    }
}
