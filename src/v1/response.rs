/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::statuses::*;
use crate::v1::{
    AuthToken, Comment, Folder, FolderInfo, TagCollection, Update, UploadResult, User,
};
use chrono::{DateTime, Utc};

/// Result of a single web method call.
///
/// `payload` is only present when the status reports success. `error` holds the raw status text
/// when the service answered with something the operation does not recognise.
/// `user_state` is the correlation value handed to the callback form of an operation, passed
/// through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<S, P, C = ()> {
    pub status: S,
    pub payload: Option<P>,
    pub user_state: C,
    pub error: Option<String>,
}

impl<S: OperationStatus, P> Response<S, P> {
    /// Builds a response from the raw status text, producing the payload only on success
    pub(crate) fn from_raw<F>(raw_status: &str, payload: F) -> Result<Self, crate::v1::BoxError>
    where
        F: FnOnce() -> Result<P, crate::v1::BoxError>,
    {
        let status = S::parse(raw_status);
        let payload = if status.is_success() {
            Some(payload()?)
        } else {
            None
        };
        Ok(Self::classified(status, payload, raw_status))
    }

    /// Attaches the raw text as error data if the status is not one the operation expects
    pub(crate) fn classified(status: S, payload: Option<P>, raw_status: &str) -> Self {
        let error = if status.is_expected() {
            None
        } else {
            log::warn!("Unrecognized status {:?} for {}", raw_status, std::any::type_name::<S>());
            Some(raw_status.to_string())
        };
        Self {
            status,
            payload,
            user_state: (),
            error,
        }
    }
}

impl<S, P, C> Response<S, P, C> {
    /// Replaces the correlation value
    pub fn with_user_state<T>(self, user_state: T) -> Response<S, P, T> {
        Response {
            status: self.status,
            payload: self.payload,
            user_state,
            error: self.error,
        }
    }

    /// True if the service answered with a status this operation does not recognise
    pub fn is_unrecognized(&self) -> bool {
        self.error.is_some()
    }
}

pub type GetTicketResponse<C = ()> = Response<GetTicketStatus, String, C>;
pub type GetAuthTokenResponse<C = ()> = Response<GetAuthTokenStatus, AuthToken, C>;
pub type LogoutResponse<C = ()> = Response<LogoutStatus, (), C>;
pub type AuthenticateUserResponse<C = ()> = Response<AuthenticateUserStatus, AuthToken, C>;
pub type RegisterNewUserResponse<C = ()> = Response<RegisterNewUserStatus, AuthToken, C>;
pub type VerifyRegistrationEmailResponse<C = ()> = Response<VerifyRegistrationEmailStatus, (), C>;
pub type GetAccountInfoResponse<C = ()> = Response<GetAccountInfoStatus, User, C>;
pub type GetServerTimeResponse<C = ()> = Response<GetServerTimeStatus, DateTime<Utc>, C>;
pub type UploadFileResponse<C = ()> = Response<UploadFileStatus, UploadResult, C>;
pub type OverwriteFileResponse<C = ()> = Response<OverwriteFileStatus, UploadResult, C>;
pub type FileNewCopyResponse<C = ()> = Response<FileNewCopyStatus, UploadResult, C>;
pub type CreateFolderResponse<C = ()> = Response<CreateFolderStatus, FolderInfo, C>;
pub type DeleteObjectResponse<C = ()> = Response<DeleteObjectStatus, (), C>;
pub type RenameObjectResponse<C = ()> = Response<RenameObjectStatus, (), C>;
pub type MoveObjectResponse<C = ()> = Response<MoveObjectStatus, (), C>;
pub type CopyObjectResponse<C = ()> = Response<CopyObjectStatus, (), C>;
pub type GetFolderStructureResponse<C = ()> = Response<GetAccountTreeStatus, Folder, C>;
pub type GetUpdatesResponse<C = ()> = Response<GetUpdatesStatus, Vec<Update>, C>;
pub type ExportTagsResponse<C = ()> = Response<ExportTagsStatus, TagCollection, C>;
pub type SetDescriptionResponse<C = ()> = Response<SetDescriptionStatus, (), C>;
pub type PublicShareResponse<C = ()> = Response<PublicShareStatus, String, C>;
pub type PublicUnshareResponse<C = ()> = Response<PublicUnshareStatus, (), C>;
pub type PrivateShareResponse<C = ()> = Response<PrivateShareStatus, (), C>;
pub type AddToMyBoxResponse<C = ()> = Response<AddToMyBoxStatus, (), C>;
pub type AddCommentResponse<C = ()> = Response<AddCommentStatus, Comment, C>;
