use crate::core::likes::{LikeApi, LikeOutcome, LikeReceipt, LikeRequest};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for the game's like API: `GET {base_url}/like?uid=..&server=..`.
///
/// One `reqwest::Client` is built at startup and reused for every request.
pub struct LikeApiClient {
    client: Client,
    base_url: String,
}

impl LikeApiClient {
    /// `timeout` of `None` keeps reqwest's default (no overall timeout).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent("LikeBot/0.3");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Body returned by the API. Everything but `status` is optional, and the
/// like counts may come back as numbers or strings.
#[derive(Debug, Deserialize)]
struct LikeApiResponse {
    status: Option<Value>,
    player: Option<Value>,
    likes_before: Option<Value>,
    likes_after: Option<Value>,
    likes_added: Option<Value>,
}

impl LikeApiResponse {
    fn into_outcome(self) -> LikeOutcome {
        let delivered = matches!(&self.status, Some(Value::Number(n)) if n.as_f64() == Some(1.0));
        if !delivered {
            return LikeOutcome::Rejected;
        }

        LikeOutcome::Succeeded(LikeReceipt {
            player: display_value(self.player, "Unknown"),
            likes_before: display_value(self.likes_before, "N/A"),
            likes_after: display_value(self.likes_after, "N/A"),
            likes_added: display_value(self.likes_added, "0"),
        })
    }
}

fn display_value(value: Option<Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

fn transport_failure(err: reqwest::Error) -> LikeOutcome {
    if err.is_timeout() {
        LikeOutcome::Timeout
    } else {
        LikeOutcome::Unexpected {
            cause: err.to_string(),
        }
    }
}

#[async_trait]
impl LikeApi for LikeApiClient {
    async fn send_like(&self, request: &LikeRequest) -> LikeOutcome {
        let url = format!("{}/like", self.base_url);
        tracing::debug!(%url, uid = %request.uid, server = %request.server, "Calling like API");

        let response = match self
            .client
            .get(&url)
            .query(&[("uid", request.uid.as_str()), ("server", request.server.as_str())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return transport_failure(e),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return LikeOutcome::PlayerNotFound;
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "Like API returned an error status");
            return LikeOutcome::ApiError {
                status: status.as_u16(),
            };
        }

        match response.json::<LikeApiResponse>().await {
            Ok(body) => body.into_outcome(),
            Err(e) => transport_failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::like_config::LikeMode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn request() -> LikeRequest {
        LikeRequest {
            uid: "123456789".to_string(),
            server: "ind".to_string(),
            mode: LikeMode::Like,
        }
    }

    fn parse(json: &str) -> LikeOutcome {
        serde_json::from_str::<LikeApiResponse>(json)
            .unwrap()
            .into_outcome()
    }

    /// Serve a single canned HTTP response and report the request line.
    async fn serve_once(raw: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let head = String::from_utf8_lossy(&buf[..n]);
            let _ = tx.send(head.lines().next().unwrap_or_default().to_string());
            socket.write_all(raw.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{}/", addr), rx)
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    #[test]
    fn status_one_is_a_success_with_exact_values() {
        let outcome = parse(
            r#"{"status":1,"player":"Ace","likes_before":10,"likes_after":15,"likes_added":5}"#,
        );
        assert_eq!(
            outcome,
            LikeOutcome::Succeeded(LikeReceipt {
                player: "Ace".to_string(),
                likes_before: "10".to_string(),
                likes_after: "15".to_string(),
                likes_added: "5".to_string(),
            })
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        assert_eq!(
            parse(r#"{"status":1}"#),
            LikeOutcome::Succeeded(LikeReceipt {
                player: "Unknown".to_string(),
                likes_before: "N/A".to_string(),
                likes_after: "N/A".to_string(),
                likes_added: "0".to_string(),
            })
        );
    }

    #[test]
    fn anything_but_status_one_is_rejected() {
        assert_eq!(parse(r#"{"status":0}"#), LikeOutcome::Rejected);
        assert_eq!(parse(r#"{"status":2,"player":"Ace"}"#), LikeOutcome::Rejected);
        assert_eq!(parse(r#"{"status":"1"}"#), LikeOutcome::Rejected);
        assert_eq!(parse(r#"{}"#), LikeOutcome::Rejected);
    }

    #[tokio::test]
    async fn sends_uid_and_server_as_query_parameters() {
        let body = r#"{"status":1,"player":"Ace","likes_before":10,"likes_after":15,"likes_added":5}"#;
        let (base_url, request_line) = serve_once(http_response("200 OK", body)).await;
        let client = LikeApiClient::new(&base_url, Some(Duration::from_secs(5))).unwrap();

        let outcome = client.send_like(&request()).await;

        assert!(outcome.is_success());
        assert_eq!(
            request_line.await.unwrap(),
            "GET /like?uid=123456789&server=ind HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_player_not_found() {
        let (base_url, _) = serve_once(http_response("404 Not Found", "")).await;
        let client = LikeApiClient::new(&base_url, Some(Duration::from_secs(5))).unwrap();

        assert_eq!(
            client.send_like(&request()).await,
            LikeOutcome::PlayerNotFound
        );
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error() {
        let (base_url, _) =
            serve_once(http_response("503 Service Unavailable", "down")).await;
        let client = LikeApiClient::new(&base_url, Some(Duration::from_secs(5))).unwrap();

        assert_eq!(
            client.send_like(&request()).await,
            LikeOutcome::ApiError { status: 503 }
        );
    }

    #[tokio::test]
    async fn non_json_body_is_unexpected() {
        let (base_url, _) = serve_once(http_response("200 OK", "<html>oops</html>")).await;
        let client = LikeApiClient::new(&base_url, Some(Duration::from_secs(5))).unwrap();

        assert!(matches!(
            client.send_like(&request()).await,
            LikeOutcome::Unexpected { .. }
        ));
    }

    #[tokio::test]
    async fn slow_api_maps_to_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            // Hold the connection open without answering
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let client =
            LikeApiClient::new(&format!("http://{}", addr), Some(Duration::from_millis(200)))
                .unwrap();

        assert_eq!(client.send_like(&request()).await, LikeOutcome::Timeout);
    }

    #[tokio::test]
    async fn unreachable_api_is_unexpected() {
        // Bind then drop to get a port nothing listens on
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let client = LikeApiClient::new(&format!("http://{}", addr), None).unwrap();

        assert!(matches!(
            client.send_like(&request()).await,
            LikeOutcome::Unexpected { .. }
        ));
    }
}
