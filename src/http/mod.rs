//! HTTP transport for the BuiltByBit API.
//!
//! This module contains the transport layer shared by every resource helper:
//!
//! - [`HttpClient`]: authenticated request execution and envelope unwrapping
//! - [`HttpClient::list_until`]: predicate-driven pagination over list endpoints
//! - [`HttpError`] and friends: the transport error taxonomy
//!
//! Resource helpers hold a shared reference to one [`HttpClient`] and delegate
//! every operation to it; no request logic lives outside this module.

mod client;
mod errors;
mod list;
mod response;

pub use client::{HttpClient, RETRY_WAIT_MS, SDK_VERSION};
pub use errors::{ApiResponseError, HttpError, MaxRetriesExceededError};
