/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::api::{
    HttpTransport, SoapRequest, SoapResponse, Transport, UploadOutcome, UploadRequest,
};
use crate::v1::auth::Session;
use crate::v1::config::Config;
use crate::v1::errors::BoxError;
use crate::v1::lazy::Fetch;
use crate::v1::macros::callback_operations;
use crate::v1::messages::{
    Materializers, decode_tree_payload, decode_updates_payload, parse_export_tags,
    parse_folder_structure, parse_updates, parse_upload_response,
};
use crate::v1::response::*;
use crate::v1::statuses::*;
use crate::v1::{
    AuthToken, Comment, FolderInfo, FolderStructureOptions, GetUpdatesOptions, MyBoxTarget,
    ObjectType, Tag, TagCollection, UploadTarget, User, UserProfile,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::future::{AbortRegistration, Abortable, BoxFuture};
use parking_lot::RwLock;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub(crate) struct ClientInner {
    pub(crate) config: Config,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) session: RwLock<Session>,
    // Held across the export call so concurrent first lookups only export once
    pub(crate) tags: Mutex<Option<TagCollection>>,
    pub(crate) login_lock: Mutex<()>,
    pub(crate) runtime: Handle,
}

/// Entry point for every web method.
///
/// Each operation comes in three shapes:
/// - `op(..).await` returns the [`Response`] directly
/// - `op_with_callback(.., callback)` runs the operation on the runtime and hands the result to
///   the callback on a worker thread
/// - `op_with_state(.., callback, user_state)` does the same and passes `user_state` back in
///   [`Response::user_state`]
///
/// [`crate::v1::BlockingClient`] provides the blocking shape. The client is cheap to clone and
/// all clones share the same session and tag cache.
#[derive(Clone)]
pub struct Client {
    pub(crate) inner: Arc<ClientInner>,
}

impl Client {
    /// Creates a client talking to the Box.NET endpoints from `config`.
    ///
    /// Must be called from within a tokio runtime, callback operations are spawned on it.
    pub fn new(config: Config) -> Result<Self, BoxError> {
        let transport = Arc::new(HttpTransport::new(config.clone())?);
        Self::with_transport(config, transport)
    }

    /// Creates a client using the given transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self, BoxError> {
        let runtime = Handle::try_current().map_err(|_| BoxError::NoRuntime())?;
        Ok(Self::with_runtime(config, transport, runtime))
    }

    /// Creates a client that spawns callback operations on `runtime`
    pub fn with_runtime(config: Config, transport: Arc<dyn Transport>, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                config,
                transport,
                session: RwLock::new(Session::default()),
                tags: Mutex::new(None),
                login_lock: Mutex::new(()),
                runtime,
            }),
        }
    }

    /// Resumes a session from a token obtained earlier
    pub fn restore_session(&self, token: &str, user: Option<User>) {
        let mut session = self.inner.session.write();
        session.token = Some(token.to_string());
        session.user = user;
    }

    /// The user that is currently logged in
    pub fn user(&self) -> Option<User> {
        self.inner.session.read().user.clone()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.inner.session.read().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.read().is_authenticated()
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    // Request for a method that is called with the session token
    fn request(&self, method: &'static str) -> SoapRequest {
        let token = self.auth_token().unwrap_or_default();
        SoapRequest::new(method, &self.inner.config.api_key, Some(&token))
    }

    // Request for a method that is called before logging in
    fn anonymous_request(&self, method: &'static str) -> SoapRequest {
        SoapRequest::new(method, &self.inner.config.api_key, None)
    }

    async fn call(&self, request: SoapRequest) -> Result<SoapResponse, BoxError> {
        let method = request.method;
        let resp = self.inner.transport.call(request).await?;
        log::debug!("{} returned {}", method, resp.status);
        Ok(resp)
    }

    pub(crate) fn spawn<F>(&self, future: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.inner.runtime.spawn(future)
    }

    /// Requests a ticket to exchange for an auth token.
    ///
    /// A success status without a ticket is reported as [`GetTicketStatus::Unknown`].
    pub async fn get_ticket(&self) -> Result<GetTicketResponse, BoxError> {
        let resp = self.call(self.anonymous_request("get_ticket")).await?;
        let status = GetTicketStatus::parse(&resp.status);
        let ticket = resp.text("ticket").ok().filter(|t| !t.is_empty());
        let response = match ticket {
            Some(ticket) if status.is_success() => {
                self.inner.session.write().ticket = Some(ticket.to_string());
                Response::classified(status, Some(ticket.to_string()), &resp.status)
            }
            None if status.is_success() => {
                log::warn!("get_ticket answered {} without a ticket", resp.status);
                Response::classified(GetTicketStatus::Unknown, None, &resp.status)
            }
            _ => Response::classified(status, None, &resp.status),
        };
        Ok(response)
    }

    /// Exchanges a ticket for an auth token. On success the token and user become the session.
    ///
    /// A success status without a token is reported as [`GetAuthTokenStatus::Failed`].
    pub async fn get_auth_token(&self, ticket: &str) -> Result<GetAuthTokenResponse, BoxError> {
        let request = self.anonymous_request("get_auth_token").arg("ticket", ticket);
        let resp = self.call(request).await?;
        let response = token_response(&resp, GetAuthTokenStatus::Failed)?;
        if let Some(auth) = &response.payload {
            self.start_session(auth);
        }
        Ok(response)
    }

    /// Logs in directly with a login and password, without the ticket round trip.
    ///
    /// Only available to applications the service allows to do so.
    pub async fn authenticate_user(
        &self,
        login: &str,
        password: &str,
    ) -> Result<AuthenticateUserResponse, BoxError> {
        let request = self
            .anonymous_request("authorization")
            .arg("login", login)
            .arg("password", password);
        let resp = self.call(request).await?;
        let response = token_response(&resp, AuthenticateUserStatus::InvalidLogin)?;
        if let Some(auth) = &response.payload {
            self.start_session(auth);
        }
        Ok(response)
    }

    fn start_session(&self, auth: &AuthToken) {
        let mut session = self.inner.session.write();
        session.ticket = None;
        session.token = Some(auth.token.clone());
        session.user = Some(auth.user.clone());
    }

    /// Ends the session. The local token is dropped once the service confirms.
    pub async fn logout(&self) -> Result<LogoutResponse, BoxError> {
        let resp = self.call(self.request("logout")).await?;
        let response: LogoutResponse = Response::from_raw(&resp.status, || Ok(()))?;
        if response.status.is_success() {
            self.inner.session.write().clear();
            *self.inner.tags.lock().await = None;
        }
        Ok(response)
    }

    /// Creates a new account
    pub async fn register_new_user(
        &self,
        login: &str,
        password: &str,
    ) -> Result<RegisterNewUserResponse, BoxError> {
        let request = self
            .anonymous_request("register_new_user")
            .arg("login", login)
            .arg("password", password);
        let resp = self.call(request).await?;
        token_response(&resp, RegisterNewUserStatus::Failed)
    }

    /// Checks whether an e-mail can be used to register
    pub async fn verify_registration_email(
        &self,
        login: &str,
    ) -> Result<VerifyRegistrationEmailResponse, BoxError> {
        let request = self
            .anonymous_request("verify_registration_email")
            .arg("login", login);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(()))
    }

    /// Returns the account of the authenticated user
    pub async fn get_account_info(&self) -> Result<GetAccountInfoResponse, BoxError> {
        let resp = self.call(self.request("get_account_info")).await?;
        Response::from_raw(&resp.status, || User::from_record(resp.record("user")?))
    }

    /// Returns the current time on the server
    pub async fn get_server_time(&self) -> Result<GetServerTimeResponse, BoxError> {
        let resp = self.call(self.request("get_server_time")).await?;
        Response::from_raw(&resp.status, || {
            let text = resp.text("time")?;
            text.trim()
                .parse::<i64>()
                .ok()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .ok_or_else(|| BoxError::InvalidField("time", text.to_string()))
        })
    }

    /// Uploads a local file into a folder
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        folder_id: u64,
    ) -> Result<UploadFileResponse, BoxError> {
        let (file_name, content) = read_upload_file(path.as_ref()).await?;
        self.upload(UploadTarget::Folder(folder_id), file_name, content, None)
            .await
    }

    /// Uploads a local file, stopping early if the paired [`futures::future::AbortHandle`] is
    /// aborted. A stopped upload reports [`UploadFileStatus::Cancelled`].
    pub async fn upload_file_cancellable(
        &self,
        path: impl AsRef<Path>,
        folder_id: u64,
        registration: AbortRegistration,
    ) -> Result<UploadFileResponse, BoxError> {
        let (file_name, content) = read_upload_file(path.as_ref()).await?;
        self.upload(
            UploadTarget::Folder(folder_id),
            file_name,
            content,
            Some(registration),
        )
        .await
    }

    /// Uploads in-memory content as a file named `file_name`
    pub async fn upload_bytes(
        &self,
        file_name: &str,
        content: Bytes,
        folder_id: u64,
    ) -> Result<UploadFileResponse, BoxError> {
        self.upload(
            UploadTarget::Folder(folder_id),
            file_name.to_string(),
            content,
            None,
        )
        .await
    }

    /// Replaces the content of file `file_id` with a local file
    pub async fn overwrite_file(
        &self,
        path: impl AsRef<Path>,
        file_id: u64,
    ) -> Result<OverwriteFileResponse, BoxError> {
        let (file_name, content) = read_upload_file(path.as_ref()).await?;
        self.upload(UploadTarget::Overwrite(file_id), file_name, content, None)
            .await
    }

    /// Uploads a local file as a new copy of file `file_id`, leaving the original in place
    pub async fn new_copy(
        &self,
        path: impl AsRef<Path>,
        file_id: u64,
    ) -> Result<FileNewCopyResponse, BoxError> {
        let (file_name, content) = read_upload_file(path.as_ref()).await?;
        self.upload(UploadTarget::NewCopy(file_id), file_name, content, None)
            .await
    }

    // Statuses of every upload flavour share the upload wire values
    async fn upload<S>(
        &self,
        target: UploadTarget,
        file_name: String,
        content: Bytes,
        registration: Option<AbortRegistration>,
    ) -> Result<Response<S, crate::v1::UploadResult>, BoxError>
    where
        S: OperationStatus + From<UploadFileStatus>,
    {
        let request = UploadRequest {
            token: self.auth_token().unwrap_or_default(),
            target,
            file_name,
            content,
        };
        let transfer = self.inner.transport.upload(request);
        let outcome = match registration {
            Some(registration) => Abortable::new(transfer, registration)
                .await
                .unwrap_or(Ok(UploadOutcome::Cancelled))?,
            None => transfer.await?,
        };
        match outcome {
            UploadOutcome::Cancelled => {
                log::debug!("Upload {:?} cancelled", target);
                Ok(Response {
                    status: S::from(UploadFileStatus::Cancelled),
                    payload: None,
                    user_state: (),
                    error: None,
                })
            }
            UploadOutcome::Completed(body) => {
                let result = parse_upload_response(&body, target);
                let status = S::from(result.status);
                let payload = status.is_success().then_some(result);
                Ok(Response::classified(status, payload, &body))
            }
        }
    }

    /// Creates a folder under `parent_folder_id`
    pub async fn create_folder(
        &self,
        name: &str,
        parent_folder_id: u64,
        is_shared: bool,
    ) -> Result<CreateFolderResponse, BoxError> {
        let request = self
            .request("create_folder")
            .arg("parent_id", parent_folder_id)
            .arg("name", name)
            .arg("share", is_shared);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || FolderInfo::from_record(resp.record("folder")?))
    }

    pub async fn delete_object(
        &self,
        object_id: u64,
        object_type: ObjectType,
    ) -> Result<DeleteObjectResponse, BoxError> {
        let request = self
            .request("delete")
            .arg("target", object_type.token())
            .arg("target_id", object_id);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(()))
    }

    pub async fn rename_object(
        &self,
        object_id: u64,
        object_type: ObjectType,
        new_name: &str,
    ) -> Result<RenameObjectResponse, BoxError> {
        let request = self
            .request("rename")
            .arg("target", object_type.token())
            .arg("target_id", object_id)
            .arg("new_name", new_name);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(()))
    }

    pub async fn move_object(
        &self,
        object_id: u64,
        object_type: ObjectType,
        destination_folder_id: u64,
    ) -> Result<MoveObjectResponse, BoxError> {
        let request = self
            .request("move")
            .arg("target", object_type.token())
            .arg("target_id", object_id)
            .arg("destination_id", destination_folder_id);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(()))
    }

    pub async fn copy_object(
        &self,
        object_id: u64,
        object_type: ObjectType,
        destination_folder_id: u64,
    ) -> Result<CopyObjectResponse, BoxError> {
        let request = self
            .request("copy")
            .arg("target", object_type.token())
            .arg("target_id", object_id)
            .arg("destination_id", destination_folder_id);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(()))
    }

    /// Retrieves the tree below `folder_id` (0 is the root).
    ///
    /// Owners and tag texts of the decoded nodes are fetched on first read.
    pub async fn get_folder_structure(
        &self,
        folder_id: u64,
        options: FolderStructureOptions,
    ) -> Result<GetFolderStructureResponse, BoxError> {
        let request = self
            .request("get_account_tree")
            .arg("folder_id", folder_id)
            .arg("params", options.to_params());
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || {
            let xml = decode_tree_payload(&resp.bytes("tree")?, options);
            Ok(parse_folder_structure(&xml, &self.materializers()))
        })
    }

    pub async fn get_root_folder_structure(
        &self,
        options: FolderStructureOptions,
    ) -> Result<GetFolderStructureResponse, BoxError> {
        self.get_folder_structure(0, options).await
    }

    /// Lists the changes made to the account between `from` and `to`
    pub async fn get_updates(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        options: GetUpdatesOptions,
    ) -> Result<GetUpdatesResponse, BoxError> {
        let request = self
            .request("get_updates")
            .arg("begin_timestamp", from.timestamp())
            .arg("end_timestamp", to.timestamp())
            .arg("params", options.to_params());
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || {
            let xml = decode_updates_payload(&resp.bytes("updates")?, options);
            Ok(parse_updates(&xml))
        })
    }

    /// Retrieves every tag of the user and replaces the cached tag collection
    pub async fn export_tags(&self) -> Result<ExportTagsResponse, BoxError> {
        let mut cache = self.inner.tags.lock().await;
        let response = self.fetch_tags().await?;
        if let Some(tags) = &response.payload {
            *cache = Some(tags.clone());
        }
        Ok(response)
    }

    async fn fetch_tags(&self) -> Result<ExportTagsResponse, BoxError> {
        let resp = self.call(self.request("export_tags")).await?;
        Response::from_raw(&resp.status, || {
            let xml = resp.bytes("tag_xml")?;
            Ok(parse_export_tags(&String::from_utf8_lossy(&xml)))
        })
    }

    /// Looks a tag up by id, exporting the tag collection on first use
    pub async fn tag(&self, id: u64) -> Result<Tag, BoxError> {
        let mut cache = self.inner.tags.lock().await;
        if cache.as_ref().is_none_or(TagCollection::is_empty) {
            let response = self.fetch_tags().await?;
            if !response.status.is_success() {
                log::warn!("Tag {} lookup failed, export answered {:?}", id, response.status);
                return Err(BoxError::TagExport(response.status));
            }
            *cache = response.payload;
        }
        cache
            .as_ref()
            .and_then(|tags| tags.get(id))
            .cloned()
            .ok_or(BoxError::TagNotFound(id))
    }

    // Owners found in a folder tree belong to the authenticated account
    async fn owner_profile(&self, id: u64) -> Result<UserProfile, BoxError> {
        let user = match self.user() {
            Some(user) => user,
            None => self
                .get_account_info()
                .await?
                .payload
                .ok_or(BoxError::NotAuthenticated())?,
        };
        if user.id != id {
            log::debug!("Owner {} resolved with the profile of user {}", id, user.id);
        }
        user.profile().await
    }

    fn materializers(&self) -> Materializers {
        let client = self.clone();
        let owner: Fetch<u64, UserProfile> = Arc::new(move |id: u64| -> BoxFuture<'static, _> {
            let client = client.clone();
            Box::pin(async move { client.owner_profile(id).await })
        });
        let client = self.clone();
        let tag: Fetch<u64, String> = Arc::new(move |id: u64| -> BoxFuture<'static, _> {
            let client = client.clone();
            Box::pin(async move { client.tag(id).await?.text().await })
        });
        Materializers { owner, tag }
    }

    pub async fn set_description(
        &self,
        object_id: u64,
        object_type: ObjectType,
        description: &str,
    ) -> Result<SetDescriptionResponse, BoxError> {
        let request = self
            .request("set_description")
            .arg("target", object_type.token())
            .arg("target_id", object_id)
            .arg("description", description);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(()))
    }

    /// Makes an object public and returns its public name
    pub async fn public_share(
        &self,
        object_id: u64,
        object_type: ObjectType,
        password: Option<&str>,
        message: Option<&str>,
        emails: Vec<String>,
    ) -> Result<PublicShareResponse, BoxError> {
        let request = self
            .request("public_share")
            .arg("target", object_type.token())
            .arg("target_id", object_id)
            .arg("password", password)
            .arg("message", message)
            .arg("emails", emails);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(resp.text("public_name")?.to_string()))
    }

    pub async fn public_unshare(
        &self,
        object_id: u64,
        object_type: ObjectType,
    ) -> Result<PublicUnshareResponse, BoxError> {
        let request = self
            .request("public_unshare")
            .arg("target", object_type.token())
            .arg("target_id", object_id);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(()))
    }

    /// Shares an object with the given e-mail addresses
    pub async fn private_share(
        &self,
        object_id: u64,
        object_type: ObjectType,
        message: Option<&str>,
        emails: Vec<String>,
        notify: bool,
    ) -> Result<PrivateShareResponse, BoxError> {
        let request = self
            .request("private_share")
            .arg("target", object_type.token())
            .arg("target_id", object_id)
            .arg("emails", emails)
            .arg("message", message)
            .arg("notify", notify);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(()))
    }

    /// Copies a shared file into one of the user's folders
    pub async fn add_to_mybox(
        &self,
        target: MyBoxTarget,
        destination_folder_id: u64,
        tags: &TagCollection,
    ) -> Result<AddToMyBoxResponse, BoxError> {
        let (file_id, public_name) = match target {
            MyBoxTarget::FileId(id) => (id, None),
            MyBoxTarget::PublicName(name) => (0, Some(name)),
        };
        let request = self
            .request("add_to_mybox")
            .arg("file_id", file_id)
            .arg("public_name", public_name)
            .arg("folder_id", destination_folder_id)
            .arg("tags", tags.to_id_list());
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Ok(()))
    }

    pub async fn add_comment(
        &self,
        object_id: u64,
        object_type: ObjectType,
        message: &str,
    ) -> Result<AddCommentResponse, BoxError> {
        let request = self
            .request("add_comment")
            .arg("target", object_type.token())
            .arg("target_id", object_id)
            .arg("message", message);
        let resp = self.call(request).await?;
        Response::from_raw(&resp.status, || Comment::from_record(resp.record("comment")?))
    }
}

// A success status without a token counts as `refused`
fn token_response<S: OperationStatus>(
    resp: &SoapResponse,
    refused: S,
) -> Result<Response<S, AuthToken>, BoxError> {
    let status = S::parse(&resp.status);
    let token = resp.text("auth_token").ok().filter(|t| !t.is_empty());
    match token {
        Some(token) if status.is_success() => {
            let auth = AuthToken {
                token: token.to_string(),
                user: User::from_record(resp.record("user")?)?,
            };
            Ok(Response::classified(status, Some(auth), &resp.status))
        }
        None if status.is_success() => {
            log::warn!("{} answered without an auth token", resp.status);
            Ok(Response::classified(refused, None, &resp.status))
        }
        _ => Ok(Response::classified(status, None, &resp.status)),
    }
}

async fn read_upload_file(path: &Path) -> Result<(String, Bytes), BoxError> {
    let content = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok((file_name, Bytes::from(content)))
}

impl Client {
    callback_operations! {
        get_ticket_with_callback, get_ticket_with_state
            () -> GetTicketStatus, String
            = |client| client.get_ticket();

        get_auth_token_with_callback, get_auth_token_with_state
            (ticket: String) -> GetAuthTokenStatus, AuthToken
            = |client| client.get_auth_token(&ticket);

        logout_with_callback, logout_with_state
            () -> LogoutStatus, ()
            = |client| client.logout();

        authenticate_user_with_callback, authenticate_user_with_state
            (login: String, password: String) -> AuthenticateUserStatus, AuthToken
            = |client| client.authenticate_user(&login, &password);

        register_new_user_with_callback, register_new_user_with_state
            (login: String, password: String) -> RegisterNewUserStatus, AuthToken
            = |client| client.register_new_user(&login, &password);

        verify_registration_email_with_callback, verify_registration_email_with_state
            (login: String) -> VerifyRegistrationEmailStatus, ()
            = |client| client.verify_registration_email(&login);

        get_account_info_with_callback, get_account_info_with_state
            () -> GetAccountInfoStatus, User
            = |client| client.get_account_info();

        get_server_time_with_callback, get_server_time_with_state
            () -> GetServerTimeStatus, DateTime<Utc>
            = |client| client.get_server_time();

        upload_file_with_callback, upload_file_with_state
            (path: std::path::PathBuf, folder_id: u64) -> UploadFileStatus, crate::v1::UploadResult
            = |client| client.upload_file(&path, folder_id);

        upload_file_cancellable_with_callback, upload_file_cancellable_with_state
            (path: std::path::PathBuf, folder_id: u64, registration: AbortRegistration) -> UploadFileStatus, crate::v1::UploadResult
            = |client| client.upload_file_cancellable(&path, folder_id, registration);

        upload_bytes_with_callback, upload_bytes_with_state
            (file_name: String, content: Bytes, folder_id: u64) -> UploadFileStatus, crate::v1::UploadResult
            = |client| client.upload_bytes(&file_name, content, folder_id);

        overwrite_file_with_callback, overwrite_file_with_state
            (path: std::path::PathBuf, file_id: u64) -> OverwriteFileStatus, crate::v1::UploadResult
            = |client| client.overwrite_file(&path, file_id);

        new_copy_with_callback, new_copy_with_state
            (path: std::path::PathBuf, file_id: u64) -> FileNewCopyStatus, crate::v1::UploadResult
            = |client| client.new_copy(&path, file_id);

        create_folder_with_callback, create_folder_with_state
            (name: String, parent_folder_id: u64, is_shared: bool) -> CreateFolderStatus, FolderInfo
            = |client| client.create_folder(&name, parent_folder_id, is_shared);

        delete_object_with_callback, delete_object_with_state
            (object_id: u64, object_type: ObjectType) -> DeleteObjectStatus, ()
            = |client| client.delete_object(object_id, object_type);

        rename_object_with_callback, rename_object_with_state
            (object_id: u64, object_type: ObjectType, new_name: String) -> RenameObjectStatus, ()
            = |client| client.rename_object(object_id, object_type, &new_name);

        move_object_with_callback, move_object_with_state
            (object_id: u64, object_type: ObjectType, destination_folder_id: u64) -> MoveObjectStatus, ()
            = |client| client.move_object(object_id, object_type, destination_folder_id);

        copy_object_with_callback, copy_object_with_state
            (object_id: u64, object_type: ObjectType, destination_folder_id: u64) -> CopyObjectStatus, ()
            = |client| client.copy_object(object_id, object_type, destination_folder_id);

        get_folder_structure_with_callback, get_folder_structure_with_state
            (folder_id: u64, options: FolderStructureOptions) -> GetAccountTreeStatus, crate::v1::Folder
            = |client| client.get_folder_structure(folder_id, options);

        get_root_folder_structure_with_callback, get_root_folder_structure_with_state
            (options: FolderStructureOptions) -> GetAccountTreeStatus, crate::v1::Folder
            = |client| client.get_root_folder_structure(options);

        get_updates_with_callback, get_updates_with_state
            (from: DateTime<Utc>, to: DateTime<Utc>, options: GetUpdatesOptions) -> GetUpdatesStatus, Vec<crate::v1::Update>
            = |client| client.get_updates(from, to, options);

        export_tags_with_callback, export_tags_with_state
            () -> ExportTagsStatus, TagCollection
            = |client| client.export_tags();

        set_description_with_callback, set_description_with_state
            (object_id: u64, object_type: ObjectType, description: String) -> SetDescriptionStatus, ()
            = |client| client.set_description(object_id, object_type, &description);

        public_share_with_callback, public_share_with_state
            (object_id: u64, object_type: ObjectType, password: Option<String>, message: Option<String>, emails: Vec<String>) -> PublicShareStatus, String
            = |client| client.public_share(object_id, object_type, password.as_deref(), message.as_deref(), emails);

        public_unshare_with_callback, public_unshare_with_state
            (object_id: u64, object_type: ObjectType) -> PublicUnshareStatus, ()
            = |client| client.public_unshare(object_id, object_type);

        private_share_with_callback, private_share_with_state
            (object_id: u64, object_type: ObjectType, message: Option<String>, emails: Vec<String>, notify: bool) -> PrivateShareStatus, ()
            = |client| client.private_share(object_id, object_type, message.as_deref(), emails, notify);

        add_to_mybox_with_callback, add_to_mybox_with_state
            (target: MyBoxTarget, destination_folder_id: u64, tags: TagCollection) -> AddToMyBoxStatus, ()
            = |client| client.add_to_mybox(target, destination_folder_id, &tags);

        add_comment_with_callback, add_comment_with_state
            (object_id: u64, object_type: ObjectType, message: String) -> AddCommentStatus, Comment
            = |client| client.add_comment(object_id, object_type, &message);
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
