/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Status codes returned by each web method.
//!
//! Every SOAP method answers with a short status text (`create_ok`, `not_logged_in`, ...).
//! Each operation family has its own enum mapping those texts; anything outside the table
//! becomes the family's `Unknown` member.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::str::FromStr;
use strum_macros::EnumString;

/// Classification shared by every status family
pub trait OperationStatus: FromStr + Default + Copy + Send + Sync + 'static {
    /// Maps the raw status text to a status value, falling back to `Unknown`
    fn parse(raw: &str) -> Self {
        Self::from_str(raw.trim()).unwrap_or_default()
    }

    /// True if the operation succeeded and a payload is expected
    fn is_success(&self) -> bool;

    /// True for the statuses an operation explicitly handles. Anything else is reported along
    /// with the raw response text.
    fn is_expected(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum GetTicketStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "get_ticket_ok")]
    Successful = 1,
    #[strum(serialize = "wrong_input")]
    WrongInput = 2,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 3,
}

impl OperationStatus for GetTicketStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum GetAuthTokenStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "get_auth_token_ok")]
    Successful = 1,
    #[strum(serialize = "not_logged_in")]
    Failed = 2,
}

impl OperationStatus for GetAuthTokenStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum LogoutStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "logout_ok")]
    Successful = 1,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 2,
    #[strum(serialize = "invalid_auth_token")]
    InvalidAuthToken = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
}

impl OperationStatus for LogoutStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        matches!(self, Self::Successful | Self::InvalidAuthToken)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum RegisterNewUserStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "successful_register")]
    Successful = 1,
    #[strum(serialize = "e_register")]
    Failed = 2,
    #[strum(serialize = "email_invalid")]
    EmailInvalid = 3,
    #[strum(serialize = "email_already_registered")]
    EmailAlreadyRegistered = 4,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 5,
}

impl OperationStatus for RegisterNewUserStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum VerifyRegistrationEmailStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "email_ok")]
    EmailOk = 1,
    #[strum(serialize = "email_invalid")]
    EmailInvalid = 2,
    #[strum(serialize = "email_already_registered")]
    EmailAlreadyRegistered = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
}

impl OperationStatus for VerifyRegistrationEmailStatus {
    fn is_success(&self) -> bool {
        *self == Self::EmailOk
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum GetAccountInfoStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "get_account_info_ok")]
    Successful = 1,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 2,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 3,
}

impl OperationStatus for GetAccountInfoStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum GetServerTimeStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "get_server_time_ok")]
    Successful = 1,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 2,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 3,
}

impl OperationStatus for GetServerTimeStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

/// Outcome of a file upload.
///
/// The numeric values are part of the wire format (note there is no 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum UploadFileStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 1,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 2,
    #[strum(
        serialize = "upload_some_files_failed",
        serialize = "upload_invalid_file_name",
        serialize = "e_upload"
    )]
    Failed = 4,
    #[strum(serialize = "upload_ok")]
    Successful = 5,
    // Never sent by the server, set when the transfer is aborted locally
    #[strum(disabled)]
    Cancelled = 6,
}

impl OperationStatus for UploadFileStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum CreateFolderStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "create_ok")]
    Successful = 1,
    #[strum(serialize = "e_no_parent_folder")]
    NoParentFolder = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
}

impl OperationStatus for CreateFolderStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum DeleteObjectStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "s_delete_node")]
    Successful = 1,
    #[strum(serialize = "e_delete_node")]
    Failed = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
}

impl OperationStatus for DeleteObjectStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum RenameObjectStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "s_rename_node")]
    Successful = 1,
    #[strum(serialize = "e_rename_node")]
    Failed = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
}

impl OperationStatus for RenameObjectStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum MoveObjectStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "s_move_node")]
    Successful = 1,
    #[strum(serialize = "e_move_node")]
    Failed = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
}

impl OperationStatus for MoveObjectStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum CopyObjectStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "s_copy_node")]
    Successful = 1,
    #[strum(serialize = "e_copy_node")]
    Failed = 2,
}

impl OperationStatus for CopyObjectStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum GetAccountTreeStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "listing_ok")]
    Successful = 1,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 2,
    #[strum(serialize = "e_folder_id")]
    FolderIdError = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
}

impl OperationStatus for GetAccountTreeStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ExportTagsStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "export_tags_ok")]
    Successful = 1,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 2,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 3,
}

impl OperationStatus for ExportTagsStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum SetDescriptionStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "s_set_description")]
    Successful = 1,
    #[strum(serialize = "e_set_description")]
    Failed = 2,
}

impl OperationStatus for SetDescriptionStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PublicShareStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "share_ok")]
    Successful = 1,
    #[strum(serialize = "share_error")]
    Failed = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
    #[strum(serialize = "wrong_node")]
    WrongNode = 5,
}

impl OperationStatus for PublicShareStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PublicUnshareStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "unshare_ok")]
    Successful = 1,
    #[strum(serialize = "unshare_error")]
    Failed = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
    #[strum(serialize = "wrong_node")]
    WrongNode = 5,
}

impl OperationStatus for PublicUnshareStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PrivateShareStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "private_share_ok")]
    Successful = 1,
    #[strum(serialize = "private_share_error")]
    Failed = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
    #[strum(serialize = "wrong_node")]
    WrongNode = 5,
}

impl OperationStatus for PrivateShareStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum AddToMyBoxStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "addtomybox_ok")]
    Successful = 1,
    #[strum(serialize = "addtomybox_error")]
    Failed = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
    #[strum(serialize = "s_link_exists")]
    LinkExists = 5,
}

impl OperationStatus for AddToMyBoxStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum AddCommentStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "add_comment_ok")]
    Successful = 1,
    #[strum(serialize = "add_comment_error")]
    Failed = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
}

impl OperationStatus for AddCommentStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum AuthenticateUserStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "logged")]
    Successful = 1,
    #[strum(serialize = "invalid_login")]
    InvalidLogin = 2,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 3,
}

impl OperationStatus for AuthenticateUserStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum GetUpdatesStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "s_get_updates")]
    Successful = 1,
    #[strum(serialize = "e_get_updates")]
    Failed = 2,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 3,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 4,
}

impl OperationStatus for GetUpdatesStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

/// Outcome of replacing the content of an existing file.
///
/// Answered by the upload endpoint, so it shares the wire values of [`UploadFileStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OverwriteFileStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 1,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 2,
    #[strum(
        serialize = "upload_some_files_failed",
        serialize = "upload_invalid_file_name",
        serialize = "e_upload"
    )]
    Failed = 4,
    #[strum(serialize = "upload_ok")]
    Successful = 5,
    #[strum(disabled)]
    Cancelled = 6,
}

impl OperationStatus for OverwriteFileStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

impl From<UploadFileStatus> for OverwriteFileStatus {
    fn from(status: UploadFileStatus) -> Self {
        Self::try_from(u8::from(status)).unwrap_or_default()
    }
}

/// Outcome of uploading a new version next to an existing file.
///
/// Shares the wire values of [`UploadFileStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum FileNewCopyStatus {
    #[default]
    #[strum(disabled)]
    Unknown = 0,
    #[strum(serialize = "application_restricted")]
    ApplicationRestricted = 1,
    #[strum(serialize = "not_logged_in")]
    NotLoggedIn = 2,
    #[strum(
        serialize = "upload_some_files_failed",
        serialize = "upload_invalid_file_name",
        serialize = "e_upload"
    )]
    Failed = 4,
    #[strum(serialize = "upload_ok")]
    Successful = 5,
    #[strum(disabled)]
    Cancelled = 6,
}

impl OperationStatus for FileNewCopyStatus {
    fn is_success(&self) -> bool {
        *self == Self::Successful
    }

    fn is_expected(&self) -> bool {
        *self != Self::Unknown
    }
}

impl From<UploadFileStatus> for FileNewCopyStatus {
    fn from(status: UploadFileStatus) -> Self {
        Self::try_from(u8::from(status)).unwrap_or_default()
    }
}
