/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Box.NET
//!
//! This library was created for working with the Box.NET v1.0 SOAP interface.
//!
//! ## Features
//!
//! - Interactive login (ticket, credentials, auth token) with progress reporting, or direct
//!   authentication for applications allowed to use it
//! - Account information, registration and server time
//! - Folder trees
//!     - Owners and tags are fetched the first time they are read
//!     - Zipped and plain trees
//! - File upload, with cancellation, overwrite and new copies of existing files
//! - Account changes between two points in time
//! - Create, delete, rename, move and copy of files and folders
//! - Tags, descriptions, comments and sharing
//!
//! Every operation can be awaited, handed a completion callback or run blocking through
//! [`v1::BlockingClient`]. Each answer is a [`v1::Response`] carrying the status the service
//! returned. Refusals (not logged in, wrong node, ...) are statuses, not errors.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! boxnet = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key from Box.NET prior to using the API**
//!
//! ```rust,no_run
//! use boxnet::v1::{Client, Config, FolderStructureOptions, StatusObserver};
//!
//!async fn list_root(api_key: &str, login: &str, password: &str) -> anyhow::Result<()> {
//!    let client = Client::new(Config::new(api_key))?;
//!
//!    // Log in, printing each step
//!    let observer: StatusObserver = std::sync::Arc::new(|msg: &str| println!("{}", msg));
//!    if !client.login(login, password, Some(observer)).await? {
//!        anyhow::bail!("login refused");
//!    }
//!
//!    // Retrieve the root folder without zipping
//!    let resp = client
//!        .get_root_folder_structure(FolderStructureOptions::NO_ZIP)
//!        .await?;
//!    if let Some(root) = resp.payload {
//!        for file in &root.files {
//!            println!("{} ({} bytes)", file.name, file.size);
//!        }
//!    }
//!    Ok(())
//!}
//! ```
//!
pub mod v1;
