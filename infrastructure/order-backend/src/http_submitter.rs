use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use business::domain::order::errors::OrderError;
use business::domain::order::model::{OrderDraft, OrderReceipt};
use business::domain::order::services::OrderSubmitter;

use crate::client::OrderBackendClient;

/// Optional acknowledgement body. Backends may assign their own order id.
#[derive(Debug, Default, Deserialize)]
struct BackendAck {
    order_id: Option<Uuid>,
}

/// Posts order drafts as JSON to the configured backend.
pub struct HttpOrderSubmitter {
    client: OrderBackendClient,
}

impl HttpOrderSubmitter {
    pub fn new(client: OrderBackendClient) -> Self {
        Self { client }
    }

    fn parse_ack(body: &str) -> BackendAck {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[async_trait]
impl OrderSubmitter for HttpOrderSubmitter {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderReceipt, OrderError> {
        let response = self
            .client
            .client
            .post(self.client.orders_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| OrderError::BackendUnavailable(e.to_string()))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    order_id = %draft.id,
                    %status,
                    error = %e,
                    "failed to read order backend response body"
                );
                String::new()
            }
        };

        if !status.is_success() {
            tracing::warn!(order_id = %draft.id, %status, "order backend refused order");
            return Err(OrderError::Rejected(format!("{}: {}", status, body)));
        }

        let ack = Self::parse_ack(&body);
        Ok(OrderReceipt {
            order_id: ack.order_id.unwrap_or(draft.id),
            total: draft.total,
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use business::domain::order::model::OrderLine;
    use business::domain::shared::value_objects::{ItemId, Price};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one request on a loopback port with a canned HTTP response.
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    fn draft() -> OrderDraft {
        OrderDraft {
            id: Uuid::new_v4(),
            lines: vec![OrderLine {
                item_id: ItemId::new(3),
                name: "Кола".to_string(),
                unit_price: Price::new(8000),
                quantity: 1,
                subtotal: Price::new(8000),
            }],
            total: Price::new(8000),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_read_backend_order_id_from_ack() {
        let id = Uuid::new_v4();
        let ack = HttpOrderSubmitter::parse_ack(&format!(r#"{{"order_id": "{}"}}"#, id));

        assert_eq!(ack.order_id, Some(id));
    }

    #[test]
    fn should_tolerate_empty_or_foreign_ack_body() {
        assert!(HttpOrderSubmitter::parse_ack("").order_id.is_none());
        assert!(HttpOrderSubmitter::parse_ack("OK").order_id.is_none());
        assert!(HttpOrderSubmitter::parse_ack(r#"{"status": "queued"}"#).order_id.is_none());
    }

    #[tokio::test]
    async fn should_report_backend_unavailable_when_connection_fails() {
        // Nothing listens on port 1 of the loopback interface.
        let client = OrderBackendClient::new(
            "http://127.0.0.1:1".to_string(),
            Duration::from_secs(2),
        );
        let submitter = HttpOrderSubmitter::new(client);

        let result = submitter.submit(&draft()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::BackendUnavailable(_)
        ));
    }

    #[tokio::test]
    async fn should_report_rejected_when_backend_answers_with_error_status() {
        let base_url = serve_once(http_response("500 Internal Server Error", "nope")).await;
        let submitter =
            HttpOrderSubmitter::new(OrderBackendClient::new(base_url, Duration::from_secs(5)));

        let result = submitter.submit(&draft()).await;

        match result.unwrap_err() {
            OrderError::Rejected(reason) => {
                assert!(reason.starts_with("500"));
                assert!(reason.ends_with("nope"));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_use_backend_order_id_when_accepted() {
        let backend_id = Uuid::new_v4();
        let body = format!(r#"{{"order_id": "{}"}}"#, backend_id);
        let base_url = serve_once(http_response("201 Created", &body)).await;
        let submitter =
            HttpOrderSubmitter::new(OrderBackendClient::new(base_url, Duration::from_secs(5)));
        let draft = draft();

        let receipt = submitter.submit(&draft).await.unwrap();

        assert_eq!(receipt.order_id, backend_id);
        assert_eq!(receipt.total, draft.total);
    }
}
