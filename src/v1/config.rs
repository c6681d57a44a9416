/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::BoxError;
use crate::v1::UploadTarget;

// Box.NET v1.0 endpoints
pub const SERVICE_URL: &str = "https://www.box.net/api/1.0/soap";
pub const AUTH_URL: &str = "https://www.box.net/api/1.0/auth";
pub const UPLOAD_URL: &str = "https://upload.box.net/api/1.0";

/// Settings used to reach the service.
///
/// The API key is issued by Box.NET to the application and is sent with every web method.
#[derive(Clone)]
pub struct Config {
    pub(crate) api_key: String,
    pub(crate) service_url: String,
    pub(crate) auth_url: String,
    pub(crate) upload_url: String,
    pub(crate) proxy: Option<String>,
}

impl Config {
    /// Creates a config for the public endpoints
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.into(),
            service_url: SERVICE_URL.into(),
            auth_url: AUTH_URL.into(),
            upload_url: UPLOAD_URL.into(),
            proxy: None,
        }
    }

    /// Reads the config from `BOXNET_*` environment variables.
    ///
    /// Only `BOXNET_API_KEY` is required, the URLs and `BOXNET_PROXY` are optional.
    pub fn from_env() -> Result<Self, BoxError> {
        let api_key = std::env::var("BOXNET_API_KEY")
            .map_err(|_| BoxError::Config("BOXNET_API_KEY is not set".to_string()))?;
        let mut config = Self::new(&api_key);
        if let Ok(url) = std::env::var("BOXNET_SERVICE_URL") {
            config = config.with_service_url(&url)?;
        }
        if let Ok(url) = std::env::var("BOXNET_AUTH_URL") {
            config = config.with_auth_url(&url)?;
        }
        if let Ok(url) = std::env::var("BOXNET_UPLOAD_URL") {
            config = config.with_upload_url(&url)?;
        }
        if let Ok(proxy) = std::env::var("BOXNET_PROXY") {
            config = config.with_proxy(&proxy)?;
        }
        Ok(config)
    }

    pub fn with_service_url(mut self, url: &str) -> Result<Self, BoxError> {
        self.service_url = url::Url::parse(url)?.into();
        Ok(self)
    }

    pub fn with_auth_url(mut self, url: &str) -> Result<Self, BoxError> {
        self.auth_url = url::Url::parse(url)?.into();
        Ok(self)
    }

    pub fn with_upload_url(mut self, url: &str) -> Result<Self, BoxError> {
        self.upload_url = url::Url::parse(url)?.into();
        Ok(self)
    }

    /// Routes every request through the given proxy
    pub fn with_proxy(mut self, proxy: &str) -> Result<Self, BoxError> {
        self.proxy = Some(url::Url::parse(proxy)?.into());
        Ok(self)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    // Url of the credential form for a ticket
    pub(crate) fn auth_url_for(&self, ticket: &str) -> Result<url::Url, BoxError> {
        Ok(url::Url::parse(&format!(
            "{}/{}",
            self.auth_url.trim_end_matches('/'),
            urlencoding::encode(ticket)
        ))?)
    }

    // Url files are posted to, `{upload_url}/{action}/{token}/{id}`
    pub(crate) fn upload_url_for(
        &self,
        token: &str,
        target: UploadTarget,
    ) -> Result<url::Url, BoxError> {
        Ok(url::Url::parse(&format!(
            "{}/{}/{}/{}",
            self.upload_url.trim_end_matches('/'),
            target.action(),
            urlencoding::encode(token),
            target.id()
        ))?)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"xxx")
            .field("service_url", &self.service_url)
            .field("auth_url", &self.auth_url)
            .field("upload_url", &self.upload_url)
            .field("proxy", &self.proxy)
            .finish()
    }
}
