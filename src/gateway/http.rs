// HTTP Gateway
// JSON REST client for the user service

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{GatewayError, UserGateway};
use crate::models::{UserDraft, UserId, UserRecord};

/// User service client over HTTP
#[derive(Debug, Clone)]
pub struct HttpUserGateway {
    http: Client,
    base_url: String,
}

impl HttpUserGateway {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: &UserId) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(&id.as_key()))
    }

    /// Map non-success statuses to gateway errors
    async fn check(response: Response, id: Option<&UserId>) -> Result<Response, GatewayError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(GatewayError::NotFound(id.clone()));
            }
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(format!("failed to parse response: {e}")))
    }
}

#[async_trait]
impl UserGateway for HttpUserGateway {
    async fn get_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        let response = self.http.get(self.collection_url()).send().await?;
        let response = Self::check(response, None).await?;
        Self::decode(response).await
    }

    async fn get_user(&self, id: &UserId) -> Result<UserRecord, GatewayError> {
        let response = self.http.get(self.user_url(id)).send().await?;
        let response = Self::check(response, Some(id)).await?;
        Self::decode(response).await
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, GatewayError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        let response = Self::check(response, None).await?;
        Self::decode(response).await
    }

    async fn update_user(&self, id: &UserId, draft: &UserDraft) -> Result<UserRecord, GatewayError> {
        let response = self.http.put(self.user_url(id)).json(draft).send().await?;
        let response = Self::check(response, Some(id)).await?;
        Self::decode(response).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), GatewayError> {
        let response = self.http.delete(self.user_url(id)).send().await?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    fn gateway(base: &str) -> HttpUserGateway {
        HttpUserGateway::new(base, Duration::from_secs(1)).unwrap()
    }

    /// Answer a single request with `status` and `body`, returning the
    /// base URL and a handle yielding the request line that was received
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (base, handle)
    }

    #[tokio::test]
    async fn test_list_decodes_users_in_order() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":1,"name":"Ann","image":"a.png"},{"id":"b7","name":"Bo","image":"b.png"}]"#,
        );

        let users = gateway(&base).get_users().await.unwrap();

        assert_eq!(server.join().unwrap(), "GET /users HTTP/1.1");
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bo"]);
        assert_eq!(users[1].id, UserId::Text("b7".into()));
    }

    #[tokio::test]
    async fn test_delete_of_missing_user_is_not_found() {
        let (base, server) = serve_once("404 Not Found", "");

        let err = gateway(&base).delete_user(&UserId::Number(1)).await.unwrap_err();

        assert_eq!(server.join().unwrap(), "DELETE /users/1 HTTP/1.1");
        assert!(matches!(err, GatewayError::NotFound(ref id) if *id == UserId::Number(1)));
    }

    #[tokio::test]
    async fn test_list_server_error_keeps_status_and_body() {
        let (base, server) = serve_once("500 Internal Server Error", "boom");

        let err = gateway(&base).get_users().await.unwrap_err();
        server.join().unwrap();

        match err {
            GatewayError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_collection_404_is_a_status_error() {
        let (base, server) = serve_once("404 Not Found", "no route");

        let err = gateway(&base).get_users().await.unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, GatewayError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let (base, server) = serve_once("200 OK", "{not json");

        let err = gateway(&base).get_users().await.unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_text_id_is_sent_verbatim() {
        let (base, server) = serve_once("200 OK", r#"{"id":"007","name":"Jay","image":""}"#);

        let user = gateway(&base).get_user(&UserId::from("007")).await.unwrap();

        assert_eq!(server.join().unwrap(), "GET /users/007 HTTP/1.1");
        assert_eq!(user.name, "Jay");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let gw = gateway("http://localhost:3000/");
        assert_eq!(gw.collection_url(), "http://localhost:3000/users");
    }

    #[test]
    fn test_user_url_encodes_text_ids() {
        let gw = gateway("http://localhost:3000");
        assert_eq!(gw.user_url(&UserId::Number(5)), "http://localhost:3000/users/5");
        assert_eq!(
            gw.user_url(&UserId::Text("a b".into())),
            "http://localhost:3000/users/a%20b"
        );
    }
}
