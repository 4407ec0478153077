//! Profile view state

use crate::api::models::ProfileRecord;

/// Shown while the profile loads.
pub const LOADING_MESSAGE: &str = "Loading your profile...";

/// Heading shown when the profile cannot be loaded.
pub const UNAVAILABLE_TITLE: &str = "Access Denied";

/// Body shown when the profile cannot be loaded.
pub const UNAVAILABLE_MESSAGE: &str =
    "Unable to load your profile. Please check your authentication or try again later.";

/// What the profile page renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileView {
    /// Request in flight
    #[default]
    Loading,

    /// Profile fetched
    Loaded(ProfileRecord),

    /// Fetch failed; the reason is not shown
    Unavailable,
}

impl ProfileView {
    /// The loaded profile, if any.
    pub fn profile(&self) -> Option<&ProfileRecord> {
        match self {
            ProfileView::Loaded(profile) => Some(profile),
            ProfileView::Loading | ProfileView::Unavailable => None,
        }
    }
}
