//! Profile cache
//!
//! Holds the last fetched profile and reuses it until it goes stale.

use jiff::{SignedDuration, Timestamp};
use storefront::clock::{Clock, SystemClock};
use tracing::{debug, warn};

use crate::{
    api::models::ProfileRecord,
    profile::{service::ProfileService, view::ProfileView},
};

/// How long a fetched profile is reused.
pub const PROFILE_MAX_AGE: SignedDuration = SignedDuration::from_mins(5);

#[derive(Debug, Clone)]
struct Entry {
    profile: ProfileRecord,
    fetched_at: Timestamp,
}

/// Caches one user's profile.
#[derive(Debug)]
pub struct ProfileCache<C = SystemClock> {
    entry: Option<Entry>,
    max_age: SignedDuration,
    clock: C,
}

impl ProfileCache<SystemClock> {
    /// Cache using the wall clock and the default max age.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ProfileCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ProfileCache<C> {
    /// Cache using `clock` and the default max age.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entry: None,
            max_age: PROFILE_MAX_AGE,
            clock,
        }
    }

    /// Whether a cached profile exists and is younger than the max age.
    pub fn is_fresh(&self) -> bool {
        self.entry.as_ref().is_some_and(|entry| {
            self.clock.now().duration_since(entry.fetched_at) < self.max_age
        })
    }

    /// The cached profile, fresh or not.
    pub fn cached(&self) -> Option<&ProfileRecord> {
        self.entry.as_ref().map(|entry| &entry.profile)
    }

    /// Drop the cached profile.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Resolve the view: the cached profile while fresh, otherwise one
    /// fetch. A failed fetch is not retried and clears the cache.
    pub async fn load<S>(&mut self, service: &S) -> ProfileView
    where
        S: ProfileService + ?Sized,
    {
        if self.is_fresh()
            && let Some(profile) = self.cached()
        {
            debug!("profile served from cache");

            return ProfileView::Loaded(profile.clone());
        }

        match service.fetch_profile().await {
            Ok(profile) => {
                debug!(orders = profile.orders.len(), "profile fetched");

                self.entry = Some(Entry {
                    profile: profile.clone(),
                    fetched_at: self.clock.now(),
                });

                ProfileView::Loaded(profile)
            }
            Err(error) => {
                warn!(%error, "profile unavailable");

                self.entry = None;

                ProfileView::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use storefront::clock::ManualClock;
    use testresult::TestResult;

    use super::*;
    use crate::{
        api::{ApiError, models::UserRecord},
        profile::service::MockProfileService,
    };

    fn profile() -> ProfileRecord {
        ProfileRecord {
            user: UserRecord {
                id: "u1".to_string(),
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            },
            orders: Vec::new(),
        }
    }

    #[tokio::test]
    async fn reuses_profile_for_five_minutes() -> TestResult {
        let clock = ManualClock::new("2026-10-16T09:00:00Z".parse()?);
        let mut service = MockProfileService::new();

        service
            .expect_fetch_profile()
            .times(2)
            .returning(|| Ok(profile()));

        let mut cache = ProfileCache::with_clock(&clock);

        assert_eq!(cache.load(&service).await, ProfileView::Loaded(profile()));

        clock.advance(SignedDuration::from_secs(299));

        assert!(cache.is_fresh());
        assert_eq!(cache.load(&service).await, ProfileView::Loaded(profile()));

        clock.advance(SignedDuration::from_secs(1));

        assert!(!cache.is_fresh());
        assert_eq!(cache.load(&service).await, ProfileView::Loaded(profile()));

        Ok(())
    }

    #[tokio::test]
    async fn failure_is_unavailable_without_retry() -> TestResult {
        let clock = ManualClock::new("2026-10-16T09:00:00Z".parse()?);
        let mut service = MockProfileService::new();

        service.expect_fetch_profile().once().return_once(|| {
            Err(ApiError::UnexpectedResponse {
                status: 401,
                body: String::new(),
            })
        });

        let mut cache = ProfileCache::with_clock(&clock);

        assert_eq!(cache.load(&service).await, ProfileView::Unavailable);
        assert!(cache.cached().is_none());

        Ok(())
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() -> TestResult {
        let clock = ManualClock::new("2026-10-16T09:00:00Z".parse()?);
        let mut service = MockProfileService::new();

        service
            .expect_fetch_profile()
            .times(2)
            .returning(|| Ok(profile()));

        let mut cache = ProfileCache::with_clock(&clock);

        cache.load(&service).await;
        cache.invalidate();
        cache.load(&service).await;

        Ok(())
    }
}
