//! Read-only profile page: fetch, cache and display helpers.

pub mod cache;
pub mod format;
pub mod service;
pub mod view;

pub use cache::{PROFILE_MAX_AGE, ProfileCache};
pub use service::{HttpProfileService, MockProfileService, ProfileService};
pub use view::ProfileView;
