//! Blocking client for the UpCloud management API.
//!
//! ```no_run
//! use client::UpCloudClient;
//!
//! # fn main() -> Result<(), client::UpCloudError> {
//! let client = UpCloudClient::new("api-user", "secret", Some(client::DEFAULT_TIMEOUT))?;
//! let account = client.authenticate()?;
//! for host in client.hosts().list()? {
//!     println!("{} {}", host.id, host.description);
//! }
//! # let _ = account;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::{Client as ReqwestClient, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

mod api;
mod config;
mod credentials;
mod error;

pub use api::v1::{
    FirewallApi, HostsApi, IpAddressesApi, NetworksApi, ObjectStoragesApi, RoutersApi, ServersApi,
    StoragesApi, TagsApi,
};
pub use config::{ClientConfig, ENV_API_URL, ENV_PASSWORD, ENV_TIMEOUT, ENV_USERNAME};
pub use credentials::{AuthToken, Credentials};
pub use error::{ApiError, UpCloudError};
pub use reqwest::Method;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiVersion {
    #[default]
    V1_3,
}

impl ApiVersion {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::V1_3 => "1.3",
        }
    }
}

pub struct UpCloudClientBuilder {
    version: ApiVersion,
}

impl UpCloudClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: ApiVersion::default(),
        }
    }

    #[must_use]
    pub const fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    pub fn build(self, config: &ClientConfig) -> Result<UpCloudClient, UpCloudError> {
        UpCloudClient::from_config(config, self.version)
    }
}

impl Default for UpCloudClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub const NAME: &str = "upcloud-rust-api";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_API_URL: &str = "https://api.upcloud.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const USER_AGENT_VALUE: &str = concat!("upcloud-rust-api/", env!("CARGO_PKG_VERSION"));

/// Authenticated handle on the API.
///
/// Holds the encoded credentials, the timeout and the base URL; all of it is
/// read-only after construction, so one client can serve many threads.
#[derive(Debug)]
pub struct UpCloudClient {
    base_url: Url,
    client: ReqwestClient,
    token: AuthToken,
    timeout: Option<Duration>,
    version: ApiVersion,
}

impl UpCloudClient {
    /// Builds a client against the public API. `timeout` of `None` disables
    /// the request timeout.
    pub fn new(
        username: &str,
        password: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, UpCloudError> {
        let config = ClientConfig::new(username, password).timeout(timeout);
        Self::from_config(&config, ApiVersion::default())
    }

    #[must_use]
    pub fn builder() -> UpCloudClientBuilder {
        UpCloudClientBuilder::new()
    }

    fn from_config(config: &ClientConfig, version: ApiVersion) -> Result<Self, UpCloudError> {
        let token = config.credentials()?.token();
        let base_url = Url::parse(&format!(
            "{}/{}",
            config.api_url.trim_end_matches('/'),
            version.path()
        ))?;
        let headers = Self::set_headers(&token)?;

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        debug!(%base_url, timeout = ?config.timeout, "client ready");

        Ok(Self {
            base_url,
            client,
            token,
            timeout: config.timeout,
            version,
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.token
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[must_use]
    pub const fn hosts(&self) -> api::v1::HostsApi<'_> {
        match self.version {
            ApiVersion::V1_3 => api::v1::HostsApi::new(self),
        }
    }

    #[must_use]
    pub const fn servers(&self) -> api::v1::ServersApi<'_> {
        match self.version {
            ApiVersion::V1_3 => api::v1::ServersApi::new(self),
        }
    }

    #[must_use]
    pub const fn ip_addresses(&self) -> api::v1::IpAddressesApi<'_> {
        match self.version {
            ApiVersion::V1_3 => api::v1::IpAddressesApi::new(self),
        }
    }

    #[must_use]
    pub const fn storages(&self) -> api::v1::StoragesApi<'_> {
        match self.version {
            ApiVersion::V1_3 => api::v1::StoragesApi::new(self),
        }
    }

    #[must_use]
    pub const fn firewall(&self) -> api::v1::FirewallApi<'_> {
        match self.version {
            ApiVersion::V1_3 => api::v1::FirewallApi::new(self),
        }
    }

    #[must_use]
    pub const fn tags(&self) -> api::v1::TagsApi<'_> {
        match self.version {
            ApiVersion::V1_3 => api::v1::TagsApi::new(self),
        }
    }

    #[must_use]
    pub const fn networks(&self) -> api::v1::NetworksApi<'_> {
        match self.version {
            ApiVersion::V1_3 => api::v1::NetworksApi::new(self),
        }
    }

    #[must_use]
    pub const fn routers(&self) -> api::v1::RoutersApi<'_> {
        match self.version {
            ApiVersion::V1_3 => api::v1::RoutersApi::new(self),
        }
    }

    #[must_use]
    pub const fn object_storages(&self) -> api::v1::ObjectStoragesApi<'_> {
        match self.version {
            ApiVersion::V1_3 => api::v1::ObjectStoragesApi::new(self),
        }
    }

    /// Appends `path` to the base URL one segment at a time, so each segment
    /// is percent-encoded. Anything after `?` becomes the query.
    fn url(&self, path: &str) -> Result<Url, UpCloudError> {
        let (path, query) = path
            .split_once('?')
            .map_or((path, None), |(p, q)| (p, Some(q)));
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| UpCloudError::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(path.trim_start_matches('/').split('/'));
        url.set_query(query);
        Ok(url)
    }

    fn set_headers(token: &AuthToken) -> Result<HeaderMap, UpCloudError> {
        let mut authorization = HeaderValue::from_str(token.as_str())?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn handle_response(response: Response) -> Result<Value, UpCloudError> {
        let status = response.status();
        let text = response.text()?;
        debug!(status = status.as_u16(), bytes = text.len(), "response received");

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_str(&text)?)
        } else {
            warn!(status = status.as_u16(), "API returned an error");
            Err(UpCloudError::from_status(status, text))
        }
    }

    /// Sends one request to `base_url + path` and returns the decoded JSON.
    ///
    /// An empty 2xx body decodes to [`Value::Null`]. Non-2xx responses become
    /// [`UpCloudError::NotFound`] (404) or [`UpCloudError::Api`].
    pub fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, UpCloudError> {
        let url = self.url(path)?;
        debug!(%method, %url, "sending request");
        let req = self.client.request(method, url);
        let req = if let Some(b) = body { req.json(b) } else { req };
        let response = req.send()?;
        Self::handle_response(response)
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str, field: &str) -> Result<T, UpCloudError> {
        let value = self.request::<()>(Method::GET, path, None)?;
        extract(value, field)
    }

    pub(crate) fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        field: &str,
    ) -> Result<T, UpCloudError> {
        let value = self.request(Method::POST, path, body)?;
        extract(value, field)
    }

    pub(crate) fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        field: &str,
    ) -> Result<T, UpCloudError> {
        let value = self.request(Method::PUT, path, Some(body))?;
        extract(value, field)
    }

    pub(crate) fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        field: &str,
    ) -> Result<T, UpCloudError> {
        let value = self.request(Method::PATCH, path, Some(body))?;
        extract(value, field)
    }

    pub(crate) fn post_empty(&self, path: &str) -> Result<(), UpCloudError> {
        self.request::<()>(Method::POST, path, None).map(|_| ())
    }

    pub(crate) fn delete(&self, path: &str) -> Result<(), UpCloudError> {
        self.request::<()>(Method::DELETE, path, None).map(|_| ())
    }
}

/// Takes the envelope field at JSON pointer `field` (`/hosts/host`) out of
/// `value` and decodes it.
fn extract<T: DeserializeOwned>(mut value: Value, field: &str) -> Result<T, UpCloudError> {
    let inner = value
        .pointer_mut(field)
        .map(Value::take)
        .ok_or_else(|| UpCloudError::MissingField(field.to_string()))?;
    Ok(serde_json::from_value(inner)?)
}
