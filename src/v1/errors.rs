/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1::{ExportTagsStatus, ObjectType};
use num_enum::TryFromPrimitiveError;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
///
/// Expected failures reported by the service (not logged in, wrong node, ...) are not errors,
/// they are carried as the status of a [`crate::v1::Response`].
#[derive(Error, Debug)]
pub enum BoxError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("XML read error: {0}")]
    XmlRead(#[from] quick_xml::Error),

    #[error("XML deserialization error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Base64 decode error")]
    Base64(#[from] base64::DecodeError),

    #[error("'{0}' can not be None")]
    MissingCallback(&'static str),

    #[error("Object type is not supported: {0}")]
    UnsupportedObjectType(#[from] TryFromPrimitiveError<ObjectType>),

    #[error("Expected response field missing: {0}")]
    MissingField(&'static str),

    #[error("Response field {0} is invalid: {1}")]
    InvalidField(&'static str, String),

    #[error("SOAP fault: {0}")]
    SoapFault(String),

    #[error("Tag not found: {0}")]
    TagNotFound(u64),

    #[error("Tags could not be exported: {0:?}")]
    TagExport(ExportTagsStatus),

    #[error("No authenticated user")]
    NotAuthenticated(),

    #[error("Background operation failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("No tokio runtime available to run the operation")]
    NoRuntime(),

    #[error("Configuration error: {0}")]
    Config(String),
}
