/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::api::SoapRecord;
use crate::v1::errors::BoxError;
use crate::v1::lazy::{Fetch, Lazy};
use chrono::{DateTime, Utc};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;
use strum_macros::{EnumString, IntoStaticStr};

/// Kind of remote object an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ObjectType {
    #[strum(serialize = "file")]
    File = 1,
    #[strum(serialize = "folder")]
    Folder = 2,
}

impl ObjectType {
    /// Token the service expects for this object type
    pub fn token(self) -> &'static str {
        self.into()
    }
}

/// Flags controlling what `get_account_tree` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FolderStructureOptions(u8);

impl FolderStructureOptions {
    pub const NONE: Self = Self(0);
    pub const NO_FILES: Self = Self(1);
    pub const NO_ZIP: Self = Self(2);
    pub const ONE_LEVEL: Self = Self(4);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Tokens sent to the service, one per set flag
    pub fn to_params(self) -> Vec<String> {
        [
            (Self::NO_FILES, "nofiles"),
            (Self::NO_ZIP, "nozip"),
            (Self::ONE_LEVEL, "onelevel"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, token)| token.to_string())
        .collect()
    }
}

impl BitOr for FolderStructureOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Flags controlling what `get_updates` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetUpdatesOptions(u8);

impl GetUpdatesOptions {
    pub const NONE: Self = Self(0);
    pub const NO_ZIP: Self = Self(1);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn to_params(self) -> Vec<String> {
        if self.contains(Self::NO_ZIP) {
            vec!["nozip".to_string()]
        } else {
            Vec::new()
        }
    }
}

/// Kind of change reported by `get_updates`
#[derive(Clone, Debug, PartialEq, Eq, EnumString)]
pub enum UpdateType {
    #[strum(serialize = "added")]
    Added,
    #[strum(serialize = "updated")]
    Updated,
    #[strum(serialize = "moved")]
    Moved,
    #[strum(serialize = "deleted")]
    Deleted,
    #[strum(serialize = "commented")]
    Commented,
    #[strum(serialize = "downloaded")]
    Downloaded,
    #[strum(serialize = "previewed")]
    Previewed,
    #[strum(default)]
    Other(String),
}

/// File or folder touched by an update
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatedItem {
    pub id: u64,
    pub name: String,
}

/// One change in the account between two points in time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    pub id: u64,
    pub update_type: UpdateType,
    pub updated: Option<DateTime<Utc>>,
    pub user_id: Option<u64>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub folder_id: Option<u64>,
    pub folder_name: Option<String>,
    pub is_shared: bool,
    pub owner_id: Option<u64>,
    pub files: Vec<UpdatedItem>,
    pub folders: Vec<UpdatedItem>,
}

/// Account details that are only fetched when needed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub access_id: u64,
    pub email: String,
    pub login: String,
    pub max_upload_size: u64,
    pub space_amount: u64,
    pub space_used: u64,
}

/// A Box.NET account.
///
/// Users found while decoding a folder tree only carry their id; the profile is fetched on the
/// first call to one of the async accessors.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: u64,
    profile: Arc<Lazy<u64, UserProfile>>,
}

impl User {
    pub fn new(id: u64, profile: UserProfile) -> Self {
        Self {
            id,
            profile: Arc::new(Lazy::resolved(id, profile)),
        }
    }

    pub fn deferred(id: u64, fetch: Fetch<u64, UserProfile>) -> Self {
        Self {
            id,
            profile: Arc::new(Lazy::deferred(id, fetch)),
        }
    }

    pub(crate) fn from_record(record: &SoapRecord) -> Result<Self, BoxError> {
        let id = record.parse("user_id")?;
        let profile = UserProfile {
            access_id: record.parse_or_default("access_id"),
            email: record.text_or_default("email"),
            login: record.text_or_default("login"),
            max_upload_size: record.parse_or_default("max_upload_size"),
            space_amount: record.parse_or_default("space_amount"),
            space_used: record.parse_or_default("space_used"),
        };
        Ok(Self::new(id, profile))
    }

    pub async fn profile(&self) -> Result<UserProfile, BoxError> {
        self.profile.get().await
    }

    pub async fn email(&self) -> Result<String, BoxError> {
        Ok(self.profile().await?.email)
    }

    pub async fn login(&self) -> Result<String, BoxError> {
        Ok(self.profile().await?.login)
    }

    pub fn is_resolved(&self) -> bool {
        self.profile.is_resolved()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("profile", &self.profile.peek())
            .finish()
    }
}

/// Token and account returned by a successful authentication or registration
#[derive(Clone, Debug, PartialEq)]
pub struct AuthToken {
    pub token: String,
    pub user: User,
}

/// A tag attached to files and folders.
///
/// Tags referenced from a folder tree carry only their id, the text is looked up in the tag
/// collection on first read.
#[derive(Clone, PartialEq)]
pub struct Tag {
    pub id: u64,
    text: Arc<Lazy<u64, String>>,
}

impl Tag {
    pub fn new(id: u64, text: &str) -> Self {
        Self {
            id,
            text: Arc::new(Lazy::resolved(id, text.to_string())),
        }
    }

    pub fn deferred(id: u64, fetch: Fetch<u64, String>) -> Self {
        Self {
            id,
            text: Arc::new(Lazy::deferred(id, fetch)),
        }
    }

    pub async fn text(&self) -> Result<String, BoxError> {
        self.text.get().await
    }

    pub fn is_resolved(&self) -> bool {
        self.text.is_resolved()
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("id", &self.id)
            .field("text", &self.text.peek())
            .finish()
    }
}

/// All tags of the authenticated user, in the order the service listed them
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagCollection {
    tags: Vec<Tag>,
}

impl TagCollection {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    pub fn get(&self, id: u64) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Comma separated tag ids, as `add_to_mybox` expects them
    pub fn to_id_list(&self) -> String {
        self.tags
            .iter()
            .map(|tag| tag.id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<Tag> for TagCollection {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A folder node of an account tree
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Folder {
    pub id: u64,
    pub name: String,
    pub is_shared: bool,
    pub description: Option<String>,
    pub owner: Option<User>,
    pub tags: Vec<Tag>,
    pub folders: Vec<Folder>,
    pub files: Vec<File>,
}

impl Folder {
    /// Counts every file in this folder and all of its sub folders
    pub fn file_count(&self) -> usize {
        self.files.len() + self.folders.iter().map(Folder::file_count).sum::<usize>()
    }

    /// Finds a folder by id in this subtree
    pub fn find_folder(&self, id: u64) -> Option<&Folder> {
        if self.id == id {
            return Some(self);
        }
        self.folders.iter().find_map(|f| f.find_folder(id))
    }
}

/// A file node of an account tree
#[derive(Clone, Debug, PartialEq)]
pub struct File {
    pub id: u64,
    pub name: String,
    pub keyword: Option<String>,
    pub is_shared: bool,
    pub size: u64,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub owner: Option<User>,
    pub tags: Vec<Tag>,
}

/// Folder returned by `create_folder`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderInfo {
    pub id: u64,
    pub name: String,
    pub owner_id: u64,
    pub folder_type_id: Option<u64>,
    pub parent_folder_id: Option<u64>,
    pub password: Option<String>,
    pub path: Option<String>,
    pub public_name: Option<String>,
    pub is_shared: bool,
}

impl FolderInfo {
    pub(crate) fn from_record(record: &SoapRecord) -> Result<Self, BoxError> {
        Ok(Self {
            id: record.parse("folder_id")?,
            name: record.text_or_default("folder_name"),
            owner_id: record.parse_or_default("user_id"),
            folder_type_id: record.parse_opt("folder_type_id"),
            parent_folder_id: record.parse_opt("parent_folder_id"),
            password: record.text_opt("password"),
            path: record.text_opt("path"),
            public_name: record.text_opt("public_name"),
            is_shared: record.parse_or_default::<u8>("shared") == 1,
        })
    }
}

/// Comment posted on a file or folder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub user_id: u64,
    pub user_name: String,
    pub created_on: Option<DateTime<Utc>>,
}

impl Comment {
    pub(crate) fn from_record(record: &SoapRecord) -> Result<Self, BoxError> {
        Ok(Self {
            id: record.parse("comment_id")?,
            text: record.text_or_default("message"),
            user_id: record.parse_or_default("user_id"),
            user_name: record.text_or_default("user_name"),
            created_on: record
                .parse_opt::<i64>("created")
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        })
    }
}

/// What `add_to_mybox` copies into the account
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MyBoxTarget {
    FileId(u64),
    PublicName(String),
}

/// Per file reason an upload was rejected
#[derive(Clone, Debug, PartialEq, Eq, EnumString)]
pub enum UploadFileError {
    #[strum(serialize = "upload_wrong_folder_id")]
    WrongFolderId,
    #[strum(serialize = "upload_invalid_file_name")]
    InvalidFileName,
    #[strum(serialize = "filesize_limit_exceeded")]
    FileSizeLimitExceeded,
    #[strum(serialize = "not_enough_free_space")]
    NotEnoughFreeSpace,
    #[strum(serialize = "access_denied")]
    AccessDenied,
    #[strum(default)]
    Other(String),
}

/// One entry of an upload confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub id: Option<u64>,
    pub name: String,
    pub error: Option<UploadFileError>,
}

/// Where the upload endpoint stores a posted file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadTarget {
    /// New file in a folder
    Folder(u64),
    /// Replaces the content of an existing file
    Overwrite(u64),
    /// New version stored next to an existing file
    NewCopy(u64),
}

impl UploadTarget {
    /// Path segment of the upload endpoint
    pub fn action(self) -> &'static str {
        match self {
            UploadTarget::Folder(_) => "upload",
            UploadTarget::Overwrite(_) => "overwrite",
            UploadTarget::NewCopy(_) => "new_copy",
        }
    }

    /// Folder or file id the action applies to
    pub fn id(self) -> u64 {
        match self {
            UploadTarget::Folder(id) | UploadTarget::Overwrite(id) | UploadTarget::NewCopy(id) => id,
        }
    }
}

/// Decoded upload confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadResult {
    pub status: crate::v1::statuses::UploadFileStatus,
    pub target: UploadTarget,
    pub files: Vec<UploadedFile>,
}

impl UploadResult {
    /// Folder the files were uploaded to, `None` for overwrites and new copies
    pub fn folder_id(&self) -> Option<u64> {
        match self.target {
            UploadTarget::Folder(id) => Some(id),
            _ => None,
        }
    }

    /// Files the service stored
    pub fn uploaded(&self) -> impl Iterator<Item = &UploadedFile> {
        self.files.iter().filter(|f| f.error.is_none())
    }
}
