//! # BuiltByBit API Rust SDK
//!
//! A Rust SDK for the BuiltByBit Ultimate API, providing typed endpoint
//! helpers, authentication handling, and predicate-driven pagination over
//! list endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for API tokens and the base URL
//! - An async HTTP client with response envelope unwrapping and optional
//!   rate-limit retry handling
//! - Resource-area helpers (threads, members, resources, and their nested
//!   listings) composed statically on [`BuiltByBitClient`]
//! - Predicate-bounded multi-page listing via the `list_until` family
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use builtbybit_api::{ApiToken, BuiltByBitClient};
//!
//! let token = ApiToken::private("your-api-token")?;
//! let client = BuiltByBitClient::new(&token);
//!
//! // Verify connectivity and token validity.
//! client.health().await?;
//!
//! // Single page.
//! let threads = client.threads().list(None).await?;
//!
//! // Every page.
//! let all_threads = client.threads().list_all(None).await?;
//! ```
//!
//! ## Bounded Pagination
//!
//! Every listable resource offers three forms: `list` (one page), `list_all`
//! (every page), and `list_until` (predicate-bounded). The predicate is
//! evaluated once per page against the last item fetched; returning `false`
//! stops the traversal before any further request:
//!
//! ```rust,ignore
//! use builtbybit_api::SortOptions;
//! use builtbybit_api::SortOrder;
//!
//! // Newest first, stop once we reach last week's replies.
//! let sort = SortOptions::new().sort("post_date").order(SortOrder::Desc);
//! let recent = client
//!     .threads()
//!     .list_replies_until(42, |reply| reply.post_date > cutoff, Some(&sort))
//!     .await?;
//! ```
//!
//! A traversal is all-or-nothing: any transport failure aborts it and no
//! partial listing is returned.
//!
//! ## Configuration
//!
//! ```rust
//! use builtbybit_api::{ApiConfig, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.builtbybit.com/v1").unwrap())
//!     .user_agent_prefix("MyBot/1.0")
//!     .http_tries(3) // retry rate-limited requests up to twice
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Opaque sort options**: Query options are forwarded verbatim; the SDK
//!   only ever touches the page number

pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod http;
pub mod sort;

// Re-export public types at crate root for convenience
pub use client::BuiltByBitClient;
pub use config::{ApiConfig, ApiConfigBuilder, ApiToken, BaseUrl, TokenKind, ITEMS_PER_PAGE};
pub use error::ConfigError;
pub use http::{ApiResponseError, HttpClient, HttpError, MaxRetriesExceededError};
pub use sort::{SortOptions, SortOrder};

// Re-export helper and record types
pub use helpers::{
    Ban, BasicResource, BasicThread, Download, DownloadsHelper, License, LicenseFields,
    LicensesHelper, Member, MembersHelper, ProfilePost, ProfilePostsHelper, Purchase,
    PurchasesHelper, Reply, Resource, ResourceEdit, ResourcesHelper, Review, ReviewsHelper,
    Thread, ThreadsHelper, Update, UpdatesHelper, Version, VersionsHelper,
};
