/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use boxnet::v1::api::{
    SoapRecord, SoapRequest, SoapResponse, SoapValue, Transport, UploadOutcome, UploadRequest,
};
use boxnet::v1::{BoxError, Client, Config};
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Transport answering from queues filled by the test
#[allow(dead_code)]
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<SoapResponse>>,
    credentials: Mutex<VecDeque<String>>,
    uploads: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<SoapRequest>>,
    posted: Mutex<Vec<UploadRequest>>,
    calls: AtomicUsize,
    // Uploads never finish when set
    stall_uploads: bool,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn stalled_uploads() -> Self {
        Self {
            stall_uploads: true,
            ..Self::default()
        }
    }

    pub(crate) fn respond(&self, response: SoapResponse) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn respond_status(&self, status: &str) -> &Self {
        self.respond(SoapResponse::new(status))
    }

    pub(crate) fn credentials_page(&self, body: &str) -> &Self {
        self.credentials.lock().unwrap().push_back(body.to_string());
        self
    }

    pub(crate) fn upload_answer(&self, body: &str) -> &Self {
        self.uploads.lock().unwrap().push_back(body.to_string());
        self
    }

    /// Number of calls that reached the transport
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> Vec<SoapRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn methods(&self) -> Vec<&'static str> {
        self.requests().iter().map(|r| r.method).collect()
    }

    /// Files posted to the upload endpoint
    pub(crate) fn posted(&self) -> Vec<UploadRequest> {
        self.posted.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn call(&self, request: SoapRequest) -> BoxFuture<'_, Result<SoapResponse, BoxError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let method = request.method;
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        Box::pin(async move {
            next.ok_or_else(|| BoxError::SoapFault(format!("no scripted answer for {method}")))
        })
    }

    fn submit_credentials(
        &self,
        _ticket: String,
        _login: String,
        _password: String,
    ) -> BoxFuture<'_, Result<String, BoxError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.credentials.lock().unwrap().pop_front().unwrap_or_default();
        Box::pin(async move { Ok(next) })
    }

    fn upload(&self, request: UploadRequest) -> BoxFuture<'_, Result<UploadOutcome, BoxError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.posted.lock().unwrap().push(request.clone());
        if self.stall_uploads {
            return Box::pin(futures::future::pending::<Result<UploadOutcome, BoxError>>());
        }
        let next = self.uploads.lock().unwrap().pop_front();
        Box::pin(async move {
            next.map(UploadOutcome::Completed).ok_or_else(|| {
                BoxError::SoapFault(format!("no scripted upload for {}", request.file_name))
            })
        })
    }
}

#[allow(dead_code)]
pub(crate) fn scripted_client(transport: Arc<ScriptedTransport>) -> Client {
    Client::with_transport(Config::new("test-key"), transport).unwrap()
}

#[allow(dead_code)]
pub(crate) fn user_record(id: u64, login: &str) -> SoapValue {
    let id = id.to_string();
    SoapValue::Record(SoapRecord::from([
        ("user_id", id.as_str()),
        ("login", login),
        ("email", login),
        ("access_id", "7"),
        ("space_amount", "1073741824"),
        ("space_used", "1024"),
        ("max_upload_size", "26214400"),
    ]))
}

#[allow(dead_code)]
pub(crate) fn text(value: &str) -> SoapValue {
    SoapValue::Text(value.to_string())
}

/// Builds a single entry zip archive
#[allow(dead_code)]
pub(crate) fn zip_single(name: &str, content: &[u8]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    writer.start_file(name, options).unwrap();
    writer.write_all(content).unwrap();
    writer.finish().unwrap().into_inner()
}

#[allow(dead_code)]
pub(crate) fn get_api_key() -> anyhow::Result<String> {
    Ok(std::env::var("BOXNET_API_KEY")?)
}

#[allow(dead_code)]
pub(crate) fn get_login() -> anyhow::Result<(String, String)> {
    let login = std::env::var("BOXNET_LOGIN")?;
    let password = std::env::var("BOXNET_PASSWORD")?;
    Ok((login, password))
}
