/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::config::Config;
use crate::v1::errors::BoxError;
use crate::v1::UploadTarget;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use futures::future::BoxFuture;
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

pub const SOAP_NAMESPACE: &str = "urn:boxnet";

/// Moves requests and responses to and from the service.
///
/// [`HttpTransport`] talks to the real endpoints. Anything else implementing this (a recorded
/// session, a test double) can be handed to [`crate::v1::Client::with_transport`].
pub trait Transport: Send + Sync {
    /// Invokes a SOAP web method
    fn call(&self, request: SoapRequest) -> BoxFuture<'_, Result<SoapResponse, BoxError>>;

    /// Posts the login form for a ticket and returns the page the server answers with
    fn submit_credentials(
        &self,
        ticket: String,
        login: String,
        password: String,
    ) -> BoxFuture<'_, Result<String, BoxError>>;

    /// Posts a file to the upload endpoint
    fn upload(&self, request: UploadRequest) -> BoxFuture<'_, Result<UploadOutcome, BoxError>>;
}

/// Input parameter of a web method
#[derive(Debug, Clone, PartialEq)]
pub enum SoapArg {
    Nil,
    Text(String),
    Long(i64),
    List(Vec<String>),
}

impl From<&str> for SoapArg {
    fn from(value: &str) -> Self {
        SoapArg::Text(value.to_string())
    }
}

impl From<String> for SoapArg {
    fn from(value: String) -> Self {
        SoapArg::Text(value)
    }
}

impl From<u64> for SoapArg {
    fn from(value: u64) -> Self {
        SoapArg::Long(value as i64)
    }
}

impl From<i64> for SoapArg {
    fn from(value: i64) -> Self {
        SoapArg::Long(value)
    }
}

impl From<bool> for SoapArg {
    fn from(value: bool) -> Self {
        SoapArg::Long(value as i64)
    }
}

impl From<Vec<String>> for SoapArg {
    fn from(value: Vec<String>) -> Self {
        SoapArg::List(value)
    }
}

impl<T: Into<SoapArg>> From<Option<T>> for SoapArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(SoapArg::Nil, Into::into)
    }
}

/// A web method invocation
#[derive(Debug, Clone, PartialEq)]
pub struct SoapRequest {
    pub method: &'static str,
    pub api_key: String,
    /// `None` for the methods that are called before logging in
    pub auth_token: Option<String>,
    pub params: Vec<(&'static str, SoapArg)>,
}

impl SoapRequest {
    pub fn new(method: &'static str, api_key: &str, auth_token: Option<&str>) -> Self {
        Self {
            method,
            api_key: api_key.into(),
            auth_token: auth_token.map(Into::into),
            params: Vec::new(),
        }
    }

    pub fn arg(mut self, name: &'static str, value: impl Into<SoapArg>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// Looks up a parameter by name
    pub fn param(&self, name: &str) -> Option<&SoapArg> {
        self.params.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Renders the SOAP 1.1 envelope
    pub fn to_envelope(&self) -> String {
        let mut body = String::new();
        body.push_str(&element("api_key", &self.api_key));
        if let Some(token) = &self.auth_token {
            body.push_str(&element("auth_token", token));
        }
        for (name, value) in &self.params {
            match value {
                SoapArg::Nil => body.push_str(&format!("<{name} xsi:nil=\"true\"/>")),
                SoapArg::Text(text) => body.push_str(&element(name, text)),
                SoapArg::Long(n) => body.push_str(&element(name, &n.to_string())),
                SoapArg::List(items) => {
                    body.push_str(&format!("<{name}>"));
                    for item in items {
                        body.push_str(&element("item", item));
                    }
                    body.push_str(&format!("</{name}>"));
                }
            }
        }
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xmlns:box=\"{SOAP_NAMESPACE}\">\
             <soap:Body><box:{method}>{body}</box:{method}></soap:Body></soap:Envelope>",
            method = self.method
        )
    }
}

fn element(name: &str, text: &str) -> String {
    format!("<{name}>{}</{name}>", escape(text))
}

/// Output parameter of a web method
#[derive(Debug, Clone, PartialEq)]
pub enum SoapValue {
    Text(String),
    Binary(Bytes),
    Record(SoapRecord),
}

/// A structured output parameter such as a user or a folder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoapRecord(BTreeMap<String, String>);

impl SoapRecord {
    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.into(), value.into());
    }

    pub fn text(&self, name: &'static str) -> Result<&str, BoxError> {
        self.0
            .get(name)
            .map(String::as_str)
            .ok_or(BoxError::MissingField(name))
    }

    pub fn text_opt(&self, name: &str) -> Option<String> {
        self.0.get(name).filter(|v| !v.is_empty()).cloned()
    }

    pub fn text_or_default(&self, name: &str) -> String {
        self.0.get(name).cloned().unwrap_or_default()
    }

    pub fn parse<T: FromStr>(&self, name: &'static str) -> Result<T, BoxError> {
        let text = self.text(name)?;
        text.trim()
            .parse()
            .map_err(|_| BoxError::InvalidField(name, text.to_string()))
    }

    pub fn parse_opt<T: FromStr>(&self, name: &str) -> Option<T> {
        self.0.get(name).and_then(|v| v.trim().parse().ok())
    }

    pub fn parse_or_default<T: FromStr + Default>(&self, name: &str) -> T {
        self.parse_opt(name).unwrap_or_default()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for SoapRecord {
    fn from(fields: [(&str, &str); N]) -> Self {
        Self(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Answer to a web method: the status text and the output parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoapResponse {
    pub status: String,
    pub fields: HashMap<String, SoapValue>,
}

impl SoapResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.into(),
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: SoapValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn text(&self, name: &'static str) -> Result<&str, BoxError> {
        match self.fields.get(name) {
            Some(SoapValue::Text(text)) => Ok(text),
            _ => Err(BoxError::MissingField(name)),
        }
    }

    pub fn record(&self, name: &'static str) -> Result<&SoapRecord, BoxError> {
        match self.fields.get(name) {
            Some(SoapValue::Record(record)) => Ok(record),
            _ => Err(BoxError::MissingField(name)),
        }
    }

    /// Binary output, base64 encoded on the wire
    pub fn bytes(&self, name: &'static str) -> Result<Bytes, BoxError> {
        match self.fields.get(name) {
            Some(SoapValue::Binary(bytes)) => Ok(bytes.clone()),
            Some(SoapValue::Text(text)) => {
                let cleaned: String = text.split_whitespace().collect();
                Ok(Bytes::from(STANDARD.decode(cleaned)?))
            }
            _ => Err(BoxError::MissingField(name)),
        }
    }
}

/// File handed to the upload endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub token: String,
    pub target: UploadTarget,
    pub file_name: String,
    pub content: Bytes,
}

/// How a transfer ended
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The body the upload endpoint answered with
    Completed(String),
    Cancelled,
}

/// Parses a SOAP response envelope into status and output parameters
pub fn parse_envelope(body: &str) -> Result<SoapResponse, BoxError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    // Depth of the <method>Response element once found
    let mut response_depth: Option<usize> = None;
    let mut in_fault = false;
    let mut fault = String::new();

    let mut fields: HashMap<String, SoapValue> = HashMap::new();
    let mut field_name = String::new();
    let mut field_text = String::new();
    let mut field_record: Option<SoapRecord> = None;
    let mut child_name = String::new();
    let mut child_text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                match response_depth {
                    None if name == "Fault" => in_fault = true,
                    None if name.ends_with("Response") => response_depth = Some(depth),
                    Some(d) if depth == d + 1 => {
                        field_name = name;
                        field_text.clear();
                        field_record = None;
                    }
                    Some(d) if depth == d + 2 => {
                        child_name = name;
                        child_text.clear();
                        field_record.get_or_insert_with(SoapRecord::default);
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                match response_depth {
                    Some(d) if depth == d => {
                        fields.insert(name, SoapValue::Text(String::new()));
                    }
                    Some(d) if depth == d + 1 => {
                        field_record
                            .get_or_insert_with(SoapRecord::default)
                            .insert(&name, "");
                    }
                    _ => {}
                }
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(quick_xml::Error::from)?;
                match response_depth {
                    Some(d) if depth == d + 1 => field_text.push_str(&text),
                    Some(d) if depth == d + 2 => child_text.push_str(&text),
                    None if in_fault => fault.push_str(&text),
                    _ => {}
                }
            }
            Event::CData(t) => {
                let text = String::from_utf8_lossy(&t).into_owned();
                match response_depth {
                    Some(d) if depth == d + 1 => field_text.push_str(&text),
                    Some(d) if depth == d + 2 => child_text.push_str(&text),
                    _ => {}
                }
            }
            Event::End(_) => {
                match response_depth {
                    Some(d) if depth == d + 2 => {
                        if let Some(record) = field_record.as_mut() {
                            record.insert(&child_name, &child_text);
                        }
                    }
                    Some(d) if depth == d + 1 => {
                        let value = match field_record.take() {
                            Some(record) => SoapValue::Record(record),
                            None => SoapValue::Text(std::mem::take(&mut field_text)),
                        };
                        fields.insert(std::mem::take(&mut field_name), value);
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if response_depth.is_none() && in_fault {
        return Err(BoxError::SoapFault(fault));
    }
    let status = match fields.remove("status") {
        Some(SoapValue::Text(status)) => status,
        _ => return Err(BoxError::MissingField("status")),
    };
    Ok(SoapResponse { status, fields })
}

/// Transport talking to the Box.NET endpoints over HTTP
#[derive(Clone)]
pub struct HttpTransport {
    config: Config,
    https_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: Config) -> Result<Self, BoxError> {
        let mut builder = reqwest::Client::builder();
        if let Some(proxy) = config.proxy.as_deref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        Ok(Self {
            config,
            https_client: builder.build()?,
        })
    }

    async fn post_envelope(&self, request: SoapRequest) -> Result<SoapResponse, BoxError> {
        log::debug!("SOAP call {}", request.method);
        let resp = self
            .https_client
            .post(self.config.service_url.as_str())
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("{SOAP_NAMESPACE}#{}", request.method))
            .body(request.to_envelope())
            .send()
            .await?;
        let body = resp.text().await?;
        parse_envelope(&body)
    }

    async fn post_credentials(
        &self,
        ticket: String,
        login: String,
        password: String,
    ) -> Result<String, BoxError> {
        let form = format!(
            "login={}&password={}&dologin=1&__login=1",
            urlencoding::encode(&login),
            urlencoding::encode(&password)
        );
        let resp = self
            .https_client
            .post(self.config.auth_url_for(&ticket)?)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .send()
            .await?;
        Ok(resp.text().await?)
    }

    async fn post_file(&self, request: UploadRequest) -> Result<UploadOutcome, BoxError> {
        log::debug!("Uploading {} as {:?}", request.file_name, request.target);
        let part = reqwest::multipart::Part::bytes(request.content.to_vec())
            .file_name(request.file_name);
        let form = reqwest::multipart::Form::new().part("file", part);
        let resp = self
            .https_client
            .post(self.config.upload_url_for(&request.token, request.target)?)
            .multipart(form)
            .send()
            .await?;
        Ok(UploadOutcome::Completed(resp.text().await?))
    }
}

impl Transport for HttpTransport {
    fn call(&self, request: SoapRequest) -> BoxFuture<'_, Result<SoapResponse, BoxError>> {
        Box::pin(self.post_envelope(request))
    }

    fn submit_credentials(
        &self,
        ticket: String,
        login: String,
        password: String,
    ) -> BoxFuture<'_, Result<String, BoxError>> {
        Box::pin(self.post_credentials(ticket, login, password))
    }

    fn upload(&self, request: UploadRequest) -> BoxFuture<'_, Result<UploadOutcome, BoxError>> {
        Box::pin(self.post_file(request))
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish()
    }
}
