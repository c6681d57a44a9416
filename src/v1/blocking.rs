/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::api::{HttpTransport, Transport};
use crate::v1::auth::StatusObserver;
use crate::v1::client::Client;
use crate::v1::config::Config;
use crate::v1::errors::BoxError;
use crate::v1::macros::blocking_operations;
use crate::v1::response::*;
use crate::v1::{
    FolderStructureOptions, GetUpdatesOptions, MyBoxTarget, ObjectType, Tag, TagCollection,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::future::AbortRegistration;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Blocking form of [`Client`].
///
/// Owns a runtime and waits for each operation to finish. Must not be used from within an
/// async context.
pub struct BlockingClient {
    client: Client,
    runtime: Runtime,
}

impl BlockingClient {
    pub fn new(config: Config) -> Result<Self, BoxError> {
        let transport = Arc::new(HttpTransport::new(config.clone())?);
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self, BoxError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let client = Client::with_runtime(config, transport, runtime.handle().clone());
        Ok(Self { client, runtime })
    }

    /// The async client sharing this session
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Waits for any future, such as reading a lazily fetched owner or tag
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn login(
        &self,
        login: &str,
        password: &str,
        observer: Option<StatusObserver>,
    ) -> Result<bool, BoxError> {
        self.runtime
            .block_on(self.client.login(login, password, observer))
    }

    pub fn tag(&self, id: u64) -> Result<Tag, BoxError> {
        self.runtime.block_on(self.client.tag(id))
    }

    blocking_operations! {
        get_ticket() -> GetTicketResponse;
        get_auth_token(ticket: &str) -> GetAuthTokenResponse;
        logout() -> LogoutResponse;
        authenticate_user(login: &str, password: &str) -> AuthenticateUserResponse;
        register_new_user(login: &str, password: &str) -> RegisterNewUserResponse;
        verify_registration_email(login: &str) -> VerifyRegistrationEmailResponse;
        get_account_info() -> GetAccountInfoResponse;
        get_server_time() -> GetServerTimeResponse;
        upload_file(path: &Path, folder_id: u64) -> UploadFileResponse;
        upload_file_cancellable(
            path: &Path,
            folder_id: u64,
            registration: AbortRegistration
        ) -> UploadFileResponse;
        upload_bytes(file_name: &str, content: Bytes, folder_id: u64) -> UploadFileResponse;
        overwrite_file(path: &Path, file_id: u64) -> OverwriteFileResponse;
        new_copy(path: &Path, file_id: u64) -> FileNewCopyResponse;
        create_folder(name: &str, parent_folder_id: u64, is_shared: bool) -> CreateFolderResponse;
        delete_object(object_id: u64, object_type: ObjectType) -> DeleteObjectResponse;
        rename_object(object_id: u64, object_type: ObjectType, new_name: &str) -> RenameObjectResponse;
        move_object(object_id: u64, object_type: ObjectType, destination_folder_id: u64) -> MoveObjectResponse;
        copy_object(object_id: u64, object_type: ObjectType, destination_folder_id: u64) -> CopyObjectResponse;
        get_folder_structure(folder_id: u64, options: FolderStructureOptions) -> GetFolderStructureResponse;
        get_root_folder_structure(options: FolderStructureOptions) -> GetFolderStructureResponse;
        get_updates(
            from: DateTime<Utc>,
            to: DateTime<Utc>,
            options: GetUpdatesOptions
        ) -> GetUpdatesResponse;
        export_tags() -> ExportTagsResponse;
        set_description(object_id: u64, object_type: ObjectType, description: &str) -> SetDescriptionResponse;
        public_share(
            object_id: u64,
            object_type: ObjectType,
            password: Option<&str>,
            message: Option<&str>,
            emails: Vec<String>
        ) -> PublicShareResponse;
        public_unshare(object_id: u64, object_type: ObjectType) -> PublicUnshareResponse;
        private_share(
            object_id: u64,
            object_type: ObjectType,
            message: Option<&str>,
            emails: Vec<String>,
            notify: bool
        ) -> PrivateShareResponse;
        add_to_mybox(target: MyBoxTarget, destination_folder_id: u64, tags: &TagCollection) -> AddToMyBoxResponse;
        add_comment(object_id: u64, object_type: ObjectType, message: &str) -> AddCommentResponse;
    }
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("client", &self.client)
            .finish()
    }
}
