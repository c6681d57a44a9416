/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Decoding of the XML payloads returned next to a status.
//!
//! None of these fail: a payload that can't be read decodes to an empty result and a warning
//! is logged.

use crate::v1::lazy::Fetch;
use crate::v1::parsers::{from_empty_str_to_none, from_flag, from_optional_number, from_unix_time};
use crate::v1::statuses::{OperationStatus, UploadFileStatus};
use crate::v1::{
    File, Folder, FolderStructureOptions, GetUpdatesOptions, Tag, TagCollection, Update,
    UpdateType, UpdatedItem, UploadFileError, UploadResult, UploadTarget, UploadedFile, User,
    UserProfile,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::io::{Cursor, Read};
use std::str::FromStr;

/// Fetch functions injected into decoded folder trees so owners and tag texts are only
/// requested when read
#[derive(Clone)]
pub struct Materializers {
    pub owner: Fetch<u64, UserProfile>,
    pub tag: Fetch<u64, String>,
}

/// Decodes the body returned by the upload endpoint
pub fn parse_upload_response(body: &str, target: UploadTarget) -> UploadResult {
    match quick_xml::de::from_str::<UploadXml>(body) {
        Ok(upload) => UploadResult {
            status: UploadFileStatus::parse(&upload.status),
            target,
            files: upload
                .files
                .files
                .into_iter()
                .map(|f| UploadedFile {
                    id: f.id,
                    name: f.file_name,
                    error: f
                        .error
                        .map(|e| UploadFileError::from_str(&e).unwrap_or(UploadFileError::Other(e))),
                })
                .collect(),
        },
        Err(err) => {
            log::warn!("Malformed upload response: {:?}", err);
            UploadResult {
                status: UploadFileStatus::Unknown,
                target,
                files: Vec::new(),
            }
        }
    }
}

/// Decodes the tag list returned by `export_tags`
pub fn parse_export_tags(xml: &str) -> TagCollection {
    match quick_xml::de::from_str::<TagsXml>(xml) {
        Ok(tags) => tags
            .tags
            .into_iter()
            .map(|t| Tag::new(t.id, &t.text))
            .collect(),
        Err(err) => {
            log::warn!("Malformed tag list: {:?}", err);
            TagCollection::default()
        }
    }
}

/// Decodes an account tree.
///
/// Owners and tags are not resolved, each one gets a fetch function from `materializers`.
pub fn parse_folder_structure(xml: &str, materializers: &Materializers) -> Folder {
    match quick_xml::de::from_str::<FolderXml>(xml) {
        Ok(folder) => folder.into_folder(materializers),
        Err(err) => {
            log::warn!("Malformed folder tree: {:?}", err);
            Folder::default()
        }
    }
}

/// Reads the first entry of a ZIP archive fully into memory
pub fn unzip_first_entry(data: &[u8]) -> Option<Vec<u8>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .inspect_err(|err| log::warn!("Unreadable zip archive: {:?}", err))
        .ok()?;
    if archive.len() == 0 {
        return None;
    }
    let mut entry = archive.by_index(0).ok()?;
    if !entry.is_file() {
        return None;
    }
    // The declared size comes from the archive, don't trust it for the allocation
    let capacity = entry.size().min(data.len() as u64 * 4) as usize;
    let mut output = Vec::with_capacity(capacity);
    entry.read_to_end(&mut output).ok()?;
    Some(output)
}

/// Turns the `tree` output of `get_account_tree` into XML text, unzipping it unless
/// [`FolderStructureOptions::NO_ZIP`] was requested
pub fn decode_tree_payload(data: &[u8], options: FolderStructureOptions) -> String {
    decode_payload(data, !options.contains(FolderStructureOptions::NO_ZIP))
}

/// Turns the `updates` output of `get_updates` into XML text, unzipping it unless
/// [`GetUpdatesOptions::NO_ZIP`] was requested
pub fn decode_updates_payload(data: &[u8], options: GetUpdatesOptions) -> String {
    decode_payload(data, !options.contains(GetUpdatesOptions::NO_ZIP))
}

fn decode_payload(data: &[u8], zipped: bool) -> String {
    if !zipped {
        return String::from_utf8_lossy(data).into_owned();
    }
    unzip_first_entry(data)
        .map(|xml| String::from_utf8_lossy(&xml).into_owned())
        .unwrap_or_default()
}

/// Decodes the change list returned by `get_updates`
pub fn parse_updates(xml: &str) -> Vec<Update> {
    match quick_xml::de::from_str::<UpdatesXml>(xml) {
        Ok(updates) => updates.updates.into_iter().map(UpdateXml::into_update).collect(),
        Err(err) => {
            log::warn!("Malformed update list: {:?}", err);
            Vec::new()
        }
    }
}

#[derive(Deserialize, Debug)]
struct UploadXml {
    status: String,

    #[serde(default)]
    files: UploadFilesXml,
}

#[derive(Deserialize, Debug, Default)]
struct UploadFilesXml {
    #[serde(default, rename = "file")]
    files: Vec<UploadFileXml>,
}

#[derive(Deserialize, Debug)]
struct UploadFileXml {
    #[serde(default, rename = "@file_name")]
    file_name: String,

    #[serde(default, rename = "@id", deserialize_with = "from_optional_number")]
    id: Option<u64>,

    #[serde(default, rename = "@error", deserialize_with = "from_empty_str_to_none")]
    error: Option<String>,
}

#[derive(Deserialize, Debug)]
struct TagsXml {
    #[serde(default, rename = "tag")]
    tags: Vec<TagXml>,
}

#[derive(Deserialize, Debug)]
struct TagXml {
    #[serde(rename = "@id")]
    id: u64,

    #[serde(default, rename = "$text")]
    text: String,
}

#[derive(Deserialize, Debug, Default)]
struct TagRefsXml {
    #[serde(default, rename = "tag")]
    tags: Vec<TagRefXml>,
}

#[derive(Deserialize, Debug)]
struct TagRefXml {
    #[serde(rename = "@id")]
    id: u64,
}

#[derive(Deserialize, Debug, Default)]
struct FoldersXml {
    #[serde(default, rename = "folder")]
    folders: Vec<FolderXml>,
}

#[derive(Deserialize, Debug, Default)]
struct FilesXml {
    #[serde(default, rename = "file")]
    files: Vec<FileXml>,
}

#[derive(Deserialize, Debug)]
struct FolderXml {
    #[serde(rename = "@id")]
    id: u64,

    #[serde(default, rename = "@name")]
    name: String,

    #[serde(default, rename = "@shared", deserialize_with = "from_flag")]
    shared: bool,

    #[serde(default, rename = "@user_id", deserialize_with = "from_optional_number")]
    user_id: Option<u64>,

    #[serde(default, rename = "@description", deserialize_with = "from_empty_str_to_none")]
    description: Option<String>,

    #[serde(default)]
    tags: TagRefsXml,

    #[serde(default)]
    folders: FoldersXml,

    #[serde(default)]
    files: FilesXml,
}

#[derive(Deserialize, Debug)]
struct FileXml {
    #[serde(rename = "@id")]
    id: u64,

    #[serde(default, rename = "@file_name")]
    file_name: String,

    #[serde(default, rename = "@keyword", deserialize_with = "from_empty_str_to_none")]
    keyword: Option<String>,

    #[serde(default, rename = "@shared", deserialize_with = "from_flag")]
    shared: bool,

    #[serde(default, rename = "@size", deserialize_with = "from_optional_number")]
    size: Option<u64>,

    #[serde(default, rename = "@created", deserialize_with = "from_unix_time")]
    created: Option<DateTime<Utc>>,

    #[serde(default, rename = "@updated", deserialize_with = "from_unix_time")]
    updated: Option<DateTime<Utc>>,

    #[serde(default, rename = "@user_id", deserialize_with = "from_optional_number")]
    user_id: Option<u64>,

    #[serde(default, rename = "@description", deserialize_with = "from_empty_str_to_none")]
    description: Option<String>,

    #[serde(default)]
    tags: TagRefsXml,
}

#[derive(Deserialize, Debug)]
struct UpdatesXml {
    #[serde(default, rename = "update")]
    updates: Vec<UpdateXml>,
}

#[derive(Deserialize, Debug)]
struct UpdateXml {
    #[serde(default, deserialize_with = "from_optional_number")]
    update_id: Option<u64>,

    #[serde(default)]
    update_type: String,

    #[serde(default, deserialize_with = "from_unix_time")]
    updated: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "from_optional_number")]
    user_id: Option<u64>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    user_name: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    user_email: Option<String>,

    #[serde(default, deserialize_with = "from_optional_number")]
    folder_id: Option<u64>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    folder_name: Option<String>,

    #[serde(default, deserialize_with = "from_flag")]
    shared: bool,

    #[serde(default, deserialize_with = "from_optional_number")]
    owner_id: Option<u64>,

    #[serde(default)]
    files: UpdatedFilesXml,

    #[serde(default)]
    folders: UpdatedFoldersXml,
}

#[derive(Deserialize, Debug, Default)]
struct UpdatedFilesXml {
    #[serde(default, rename = "file")]
    files: Vec<UpdatedFileXml>,
}

#[derive(Deserialize, Debug)]
struct UpdatedFileXml {
    #[serde(rename = "@file_id")]
    id: u64,

    #[serde(default, rename = "@file_name")]
    name: String,
}

#[derive(Deserialize, Debug, Default)]
struct UpdatedFoldersXml {
    #[serde(default, rename = "folder")]
    folders: Vec<UpdatedFolderXml>,
}

#[derive(Deserialize, Debug)]
struct UpdatedFolderXml {
    #[serde(rename = "@folder_id")]
    id: u64,

    #[serde(default, rename = "@folder_name")]
    name: String,
}

impl UpdateXml {
    fn into_update(self) -> Update {
        Update {
            id: self.update_id.unwrap_or_default(),
            update_type: UpdateType::from_str(self.update_type.trim())
                .unwrap_or(UpdateType::Other(self.update_type)),
            updated: self.updated,
            user_id: self.user_id,
            user_name: self.user_name,
            user_email: self.user_email,
            folder_id: self.folder_id,
            folder_name: self.folder_name,
            is_shared: self.shared,
            owner_id: self.owner_id,
            files: self
                .files
                .files
                .into_iter()
                .map(|f| UpdatedItem { id: f.id, name: f.name })
                .collect(),
            folders: self
                .folders
                .folders
                .into_iter()
                .map(|f| UpdatedItem { id: f.id, name: f.name })
                .collect(),
        }
    }
}

impl TagRefsXml {
    fn into_tags(self, materializers: &Materializers) -> Vec<Tag> {
        self.tags
            .into_iter()
            .map(|t| Tag::deferred(t.id, materializers.tag.clone()))
            .collect()
    }
}

impl FolderXml {
    fn into_folder(self, materializers: &Materializers) -> Folder {
        Folder {
            id: self.id,
            name: self.name,
            is_shared: self.shared,
            description: self.description,
            owner: self
                .user_id
                .map(|id| User::deferred(id, materializers.owner.clone())),
            tags: self.tags.into_tags(materializers),
            folders: self
                .folders
                .folders
                .into_iter()
                .map(|f| f.into_folder(materializers))
                .collect(),
            files: self
                .files
                .files
                .into_iter()
                .map(|f| f.into_file(materializers))
                .collect(),
        }
    }
}

impl FileXml {
    fn into_file(self, materializers: &Materializers) -> File {
        File {
            id: self.id,
            name: self.file_name,
            keyword: self.keyword,
            is_shared: self.shared,
            size: self.size.unwrap_or_default(),
            created: self.created,
            updated: self.updated,
            description: self.description,
            owner: self
                .user_id
                .map(|id| User::deferred(id, materializers.owner.clone())),
            tags: self.tags.into_tags(materializers),
        }
    }
}
