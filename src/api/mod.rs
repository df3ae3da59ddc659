pub(crate) mod admin;
pub(crate) mod competitions;
pub(crate) mod editions;
pub(crate) mod events;
pub(crate) mod media;

use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ApiErrorBody, Result, TrailError};
use crate::session::Session;

/// Everything a request needs: the HTTP client, where to send it, and who is asking.
pub(crate) struct Transport {
    pub http: reqwest::Client,
    pub base_url: String,
    pub session: Session,
}

impl Transport {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT_LANGUAGE, self.session.language().to_string());
        if let Some(token) = self.session.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    /// Send a request and turn non-success statuses into errors.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let response = request.send().await.map_err(|e| TrailError::Http {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(self.status_error(response, url).await)
    }

    async fn status_error(&self, response: Response, url: &str) -> TrailError {
        let status = response.status();
        let url = url.to_owned();
        match status {
            StatusCode::UNAUTHORIZED => {
                warn!(url = %url, "session rejected, logging out");
                if let Err(e) = self.session.logout() {
                    warn!(error = %e, "failed to clear persisted session");
                }
                TrailError::Unauthorized { url }
            }
            StatusCode::FORBIDDEN => TrailError::Forbidden { url },
            StatusCode::NOT_FOUND => TrailError::NotFound { url },
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                let body = response
                    .json::<ApiErrorBody>()
                    .await
                    .unwrap_or_default();
                TrailError::from_api_body(body)
            }
            s if s.is_server_error() => TrailError::Server { url, status: s },
            s => TrailError::UnexpectedStatus { url, status: s },
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
        response.json::<T>().await.map_err(|e| TrailError::Decode {
            url: url.to_owned(),
            source: e,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self.send(self.request(Method::GET, &url), &url).await?;
        Self::decode(response, &url).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let request = self.request(Method::GET, &url).query(query);
        let response = self.send(request, &url).await?;
        Self::decode(response, &url).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, path, body).await
    }

    /// POST with a body, ignoring whatever the backend answers.
    pub async fn post_action<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        self.send(self.request(Method::POST, &url).json(body), &url)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!(url = %url, "DELETE");
        self.send(self.request(Method::DELETE, &url), &url).await?;
        Ok(())
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(url = %url, %method, "sending");
        let response = self
            .send(self.request(method, &url).json(body), &url)
            .await?;
        Self::decode(response, &url).await
    }
}
