//! MediaQ Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{ErrorBody, PopRequest, PopResponse, QueueEntry};
use reqwest::{Response, StatusCode};
use std::time::Duration;
use url::Url;

/// MediaQ HTTP API Client
///
/// # Example
///
/// ```no_run
/// use mediaq_sdk::MediaqClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MediaqClient::connect("http://127.0.0.1:5000")?;
/// for entry in client.list("Ada Grace Hopper-Lovelace").await? {
///     println!("{} {}", entry.id, entry.url);
/// }
/// # Ok(())
/// # }
/// ```
pub struct MediaqClient {
    client: reqwest::Client,
    base: Url,
}

impl MediaqClient {
    /// Create a client for the server at `url` (e.g., `http://127.0.0.1:5000`)
    ///
    /// No request is made until the first call.
    pub fn connect(url: impl AsRef<str>) -> Result<Self> {
        let base = Url::parse(url.as_ref()).map_err(|e| SdkError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(SdkError::InvalidUrl(format!("{base} cannot be a base URL")));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, base })
    }

    /// `{base}/{queue_id}[/{action}]`, with the queue id percent-encoded
    fn endpoint(&self, queue_id: &str, action: Option<&str>) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| SdkError::InvalidUrl(self.base.to_string()))?;
            segments.pop_if_empty().push(queue_id);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Ok(url)
    }

    async fn get_entry(&self, queue_id: &str, action: &str) -> Result<Option<QueueEntry>> {
        let response = self
            .client
            .get(self.endpoint(queue_id, Some(action))?)
            .send()
            .await?;
        let value: serde_json::Value = check(response).await?.json().await?;

        // Empty queue slots come back as `{}`
        if value.as_object().is_some_and(|o| o.is_empty()) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }

    /// Head of the queue
    pub async fn current(&self, queue_id: &str) -> Result<Option<QueueEntry>> {
        self.get_entry(queue_id, "current").await
    }

    /// Entry after the head
    pub async fn next(&self, queue_id: &str) -> Result<Option<QueueEntry>> {
        self.get_entry(queue_id, "next").await
    }

    /// First entries of the queue (the server caps the count)
    pub async fn list(&self, queue_id: &str) -> Result<Vec<QueueEntry>> {
        let response = self
            .client
            .get(self.endpoint(queue_id, None)?)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// Remove the head entry, which must be `entry_id`
    ///
    /// # Errors
    ///
    /// * `QueueEmpty` - nothing to pop
    /// * `EntryNotAtHead` - `entry_id` is queued behind the head
    /// * `EntryNotFound` - `entry_id` is unknown or was already popped
    pub async fn pop(&self, queue_id: &str, entry_id: &str) -> Result<QueueEntry> {
        let response = self
            .client
            .post(self.endpoint(queue_id, Some("pop"))?)
            .json(&PopRequest { id: entry_id })
            .send()
            .await?;
        let body: PopResponse = check(response).await?.json().await?;
        Ok(body.popped)
    }
}

/// Turn non-2xx responses into typed errors
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(match status {
        StatusCode::NOT_FOUND => SdkError::QueueEmpty(message),
        StatusCode::BAD_REQUEST => SdkError::EntryNotFound(message),
        StatusCode::CONFLICT => SdkError::EntryNotAtHead(message),
        _ => SdkError::Server {
            status: status.as_u16(),
            message,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const QUEUE: &str = "Ada Grace Hopper-Lovelace";
    const QUEUE_PATH: &str = "/Ada%20Grace%20Hopper-Lovelace";

    fn entry(id: &str, url: &str) -> QueueEntry {
        QueueEntry {
            id: id.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_connect_rejects_bad_urls() {
        assert!(matches!(
            MediaqClient::connect("not a url"),
            Err(SdkError::InvalidUrl(_))
        ));
        assert!(matches!(
            MediaqClient::connect("mailto:someone@example.com"),
            Err(SdkError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_encodes_queue_id() {
        let client = MediaqClient::connect("http://127.0.0.1:5000/").unwrap();
        assert_eq!(
            client.endpoint(QUEUE, Some("pop")).unwrap().as_str(),
            "http://127.0.0.1:5000/Ada%20Grace%20Hopper-Lovelace/pop"
        );

        let prefixed = MediaqClient::connect("http://host/mediaq").unwrap();
        assert_eq!(
            prefixed.endpoint("q", None).unwrap().as_str(),
            "http://host/mediaq/q"
        );
    }

    #[tokio::test]
    async fn test_current_and_next() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{QUEUE_PATH}/current")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": "1", "url": "http://a" })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{QUEUE_PATH}/next")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = MediaqClient::connect(server.uri()).unwrap();
        assert_eq!(
            client.current(QUEUE).await.unwrap(),
            Some(entry("1", "http://a"))
        );
        assert_eq!(client.next(QUEUE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUEUE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "1", "url": "http://a" },
                { "id": "2", "url": "http://b" }
            ])))
            .mount(&server)
            .await;

        let client = MediaqClient::connect(server.uri()).unwrap();
        let list = client.list(QUEUE).await.unwrap();
        assert_eq!(list, vec![entry("1", "http://a"), entry("2", "http://b")]);
    }

    #[tokio::test]
    async fn test_pop() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{QUEUE_PATH}/pop")))
            .and(body_json(json!({ "id": "1" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "popped": { "id": "1", "url": "http://a" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = MediaqClient::connect(server.uri()).unwrap();
        assert_eq!(client.pop(QUEUE, "1").await.unwrap(), entry("1", "http://a"));
    }

    #[tokio::test]
    async fn test_pop_errors_are_typed() {
        let cases = [
            (404, "empty"),
            (400, "missing"),
            (409, "behind"),
            (500, "boom"),
        ];

        for (status, message) in cases {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/q/pop"))
                .respond_with(
                    ResponseTemplate::new(status).set_body_json(json!({ "error": message })),
                )
                .mount(&server)
                .await;

            let client = MediaqClient::connect(server.uri()).unwrap();
            let err = client.pop("q", "x").await.unwrap_err();
            match (status, err) {
                (404, SdkError::QueueEmpty(m))
                | (400, SdkError::EntryNotFound(m))
                | (409, SdkError::EntryNotAtHead(m)) => assert_eq!(m, message),
                (500, SdkError::Server { status, message: m }) => {
                    assert_eq!(status, 500);
                    assert_eq!(m, message);
                }
                (status, err) => panic!("status {status} mapped to {err:?}"),
            }
        }
    }
}
