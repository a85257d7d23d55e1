//! Shared HTTP client and the verb primitives every operation goes through.
//!
//! Each call sends exactly one request and hands back the [`Response`] as
//! received: a 404 or 500 from the backend is still `Ok`. Only failures to
//! talk to the backend at all surface as [`ApiError`].

use crate::domain::filter::Filter;
use crate::domain::ports::ConfigProvider;
use crate::domain::resource::Resource;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{validate_positive_number, validate_url};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        validate_url("base_url", config.base_url())?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in config.extra_headers() {
            if name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
                return Err(ApiError::ConfigValidationError {
                    field: "headers".to_string(),
                    message: "Content-Type cannot be overridden".to_string(),
                });
            }
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ApiError::InvalidConfigValueError {
                    field: "headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value =
                HeaderValue::from_str(value).map_err(|e| ApiError::InvalidConfigValueError {
                    field: "headers".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout_seconds() {
            validate_positive_number("timeout_seconds", timeout, 1)?;
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let base_url = config.base_url().trim_end_matches('/').to_string();
        tracing::debug!("API client ready for {}", base_url);

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `endpoint`.
    ///
    /// Relative endpoints are joined to the base URL with exactly one slash
    /// between them; absolute `http(s)://` URLs are taken as they are.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        let relative = endpoint.trim_start_matches('/');
        if relative.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, relative)
        }
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);
        tracing::debug!("📡 {} {}", method, url);
        self.client.request(method, url)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        tracing::debug!("📡 {} <- {}", response.status(), response.url());
        Ok(response)
    }

    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        self.execute(self.request(Method::GET, endpoint)).await
    }

    /// GET with `query` serialized into the query string.
    pub async fn get_with_query<Q>(&self, endpoint: &str, query: &Q) -> Result<Response>
    where
        Q: Serialize + ?Sized,
    {
        self.execute(self.request(Method::GET, endpoint).query(query)).await
    }

    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, endpoint).json(body)).await
    }

    pub async fn put<B>(&self, endpoint: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::PUT, endpoint).json(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Response> {
        self.execute(self.request(Method::DELETE, endpoint)).await
    }

    // Resource-level CRUD, shared by the named operations and the CLI.

    /// `GET {collection}`, with the filter pairs as query string if any.
    pub async fn list(&self, resource: Resource, filter: Option<&Filter>) -> Result<Response> {
        match filter {
            Some(filter) if !filter.is_empty() => {
                self.get_with_query(resource.path(), filter).await
            }
            _ => self.get(resource.path()).await,
        }
    }

    pub async fn fetch(&self, resource: Resource, id: impl fmt::Display) -> Result<Response> {
        self.get(&resource.item_path(id)).await
    }

    pub async fn create<B>(&self, resource: Resource, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.post(resource.path(), body).await
    }

    pub async fn update<B>(
        &self,
        resource: Resource,
        id: impl fmt::Display,
        body: &B,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.put(&resource.item_path(id), body).await
    }

    pub async fn remove(&self, resource: Resource, id: impl fmt::Display) -> Result<Response> {
        self.delete(&resource.item_path(id)).await
    }
}
