use crate::domain::model::{ContactForm, ContactResponse, MenuItem, MenuResponse};
use crate::domain::ports::{BackendApi, ConfigProvider};
use crate::utils::error::{FetchError, SubmitError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// reqwest-backed [`BackendApi`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });
        Self::with_client(config.base_url(), client)
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, FetchError> {
        let url = self.endpoint("/api/menu");
        tracing::debug!("Making menu request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Menu response status: {}", status);

        // 非 2xx 但 body 是 JSON 時照樣讀；拿不到 JSON 才算失敗
        let body = response.bytes().await?;
        let parsed: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            if status.is_success() {
                FetchError::Decode(e.to_string())
            } else {
                FetchError::Status(status.as_u16())
            }
        })?;

        let items = MenuResponse::from_json(parsed)?.into_items();
        tracing::debug!("Fetched {} menu items", items.len());
        Ok(items)
    }

    async fn submit_contact(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let url = self.endpoint("/api/contact");
        tracing::debug!("Posting contact form to: {}", url);

        let response = self.client.post(&url).json(form).send().await?;
        let status = response.status();
        tracing::debug!("Contact response status: {}", status);

        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let reply: ContactResponse =
            serde_json::from_slice(&body).map_err(|e| SubmitError::Decode(e.to_string()))?;

        if reply.ok {
            Ok(())
        } else {
            Err(SubmitError::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn backend(server: &MockServer) -> HttpBackend {
        HttpBackend::with_client(&server.base_url(), Client::new())
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let backend = HttpBackend::with_client("http://localhost:8000/", Client::new());
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(backend.endpoint("/api/menu"), "http://localhost:8000/api/menu");
    }

    #[tokio::test]
    async fn test_fetch_menu_success() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/menu");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"items": [
                    {"id": "1", "name": "Matcha Latte", "price": 5.5, "category": "Tea"},
                    {"id": "2", "name": "Yuzu Croissant", "price": 4, "category": "Pastry"}
                ]}));
        });

        let items = backend(&server).fetch_menu().await.unwrap();

        api_mock.assert();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Matcha Latte");
        assert_eq!(items[1].category(), Some("Pastry"));
    }

    #[tokio::test]
    async fn test_fetch_menu_non_json_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/menu");
            then.status(200).body("<html>oops</html>");
        });

        let err = backend(&server).fetch_menu().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_menu_null_body_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/menu");
            then.status(200).header("Content-Type", "application/json").body("null");
        });

        let err = backend(&server).fetch_menu().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_menu_error_status_without_json() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/menu");
            then.status(503).body("unavailable");
        });

        let err = backend(&server).fetch_menu().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
    }

    #[tokio::test]
    async fn test_fetch_menu_transport_error() {
        // 沒有服務在監聽的埠
        let backend = HttpBackend::with_client("http://127.0.0.1:9", Client::new());
        let err = backend.fetch_menu().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_submit_contact_posts_json() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/contact")
                .header("content-type", "application/json")
                .json_body(json!({"name": "Ava", "email": "ava@x.com", "subject": "", "message": "Hi"}));
            then.status(200).json_body(json!({"ok": true}));
        });

        let form = ContactForm {
            name: "Ava".into(),
            email: "ava@x.com".into(),
            subject: String::new(),
            message: "Hi".into(),
        };
        backend(&server).submit_contact(&form).await.unwrap();
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_submit_contact_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200).json_body(json!({"ok": false}));
        });

        let err = backend(&server)
            .submit_contact(&ContactForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Rejected));
    }

    #[tokio::test]
    async fn test_submit_contact_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(500).json_body(json!({"ok": true}));
        });

        let err = backend(&server)
            .submit_contact(&ContactForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Status(500)));
    }

    #[tokio::test]
    async fn test_submit_contact_unexpected_shape() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200).json_body(json!({"received": true}));
        });

        let err = backend(&server)
            .submit_contact(&ContactForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Decode(_)));
    }
}
