/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod auth;
pub mod blocking;
pub mod client;
pub mod config;
pub mod errors;
pub mod lazy;
mod macros;
pub mod messages;
mod parsers;
pub mod primitives;
pub mod response;
pub mod statuses;

pub use api::{HttpTransport, Transport};
pub use auth::*;
pub use blocking::*;
pub use client::*;
pub use config::*;
pub use errors::*;
pub use futures::future::{AbortHandle, AbortRegistration};
pub use primitives::*;
pub use response::*;
pub use statuses::*;
