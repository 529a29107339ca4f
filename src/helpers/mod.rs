//! Resource-area helpers for the BuiltByBit API.
//!
//! Each helper wraps the endpoints of one resource area (threads, members,
//! resources, and their nested listings) as thin pass-throughs over the
//! shared [`crate::http::HttpClient`]. Helpers never loop or branch
//! themselves; multi-page listings delegate to
//! [`crate::http::HttpClient::list_until`].

mod members;
mod profile_posts;
mod resources;
mod threads;

pub use members::{Ban, Member, MembersHelper};
pub use profile_posts::{ProfilePost, ProfilePostsHelper};
pub use resources::{
    BasicResource, Download, DownloadsHelper, License, LicenseFields, LicensesHelper, Purchase,
    PurchasesHelper, Resource, ResourceEdit, ResourcesHelper, Review, ReviewsHelper, Update,
    UpdatesHelper, Version, VersionsHelper,
};
pub use threads::{BasicThread, Reply, Thread, ThreadsHelper};
