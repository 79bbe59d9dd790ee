//! Shared browsing profile.
//!
//! One profile is created per window and handed to every tab session at
//! creation. Toggles are atomics and are re-read on every request, so flipping
//! the ad blocker affects all tabs' subsequent requests at once.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::services::request_filter::RequestFilter;
use crate::types::permission::{PageFeature, PermissionDecision, PermissionPolicy, RequestDecision};
use crate::types::settings::Preferences;

pub type SharedProfile = Arc<BrowserProfile>;

#[derive(Debug)]
pub struct BrowserProfile {
    filter: RequestFilter,
    ad_blocker_enabled: AtomicBool,
    cursor_lock_enabled: AtomicBool,
    permission_policy: PermissionPolicy,
    blocked_requests: AtomicU64,
}

impl BrowserProfile {
    pub fn new(filter: RequestFilter, ad_blocker_enabled: bool, cursor_lock_enabled: bool) -> Self {
        Self {
            filter,
            ad_blocker_enabled: AtomicBool::new(ad_blocker_enabled),
            cursor_lock_enabled: AtomicBool::new(cursor_lock_enabled),
            permission_policy: PermissionPolicy::default(),
            blocked_requests: AtomicU64::new(0),
        }
    }

    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self::new(RequestFilter::with_defaults(), prefs.ad_blocker, prefs.cursor_lock)
    }

    pub fn with_permission_policy(mut self, policy: PermissionPolicy) -> Self {
        self.permission_policy = policy;
        self
    }

    pub fn shared(self) -> SharedProfile {
        Arc::new(self)
    }

    pub fn filter(&self) -> &RequestFilter {
        &self.filter
    }

    pub fn ad_blocker_enabled(&self) -> bool {
        self.ad_blocker_enabled.load(Ordering::Relaxed)
    }

    pub fn set_ad_blocker_enabled(&self, enabled: bool) {
        self.ad_blocker_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn cursor_lock_enabled(&self) -> bool {
        self.cursor_lock_enabled.load(Ordering::Relaxed)
    }

    pub fn set_cursor_lock_enabled(&self, enabled: bool) {
        self.cursor_lock_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn permission_policy(&self) -> PermissionPolicy {
        self.permission_policy
    }

    /// Decides an outgoing request. The filter is consulted only while the
    /// ad blocker is on.
    pub fn intercept_request(&self, url: &str) -> RequestDecision {
        if self.ad_blocker_enabled() && self.filter.should_block(url) {
            self.blocked_requests.fetch_add(1, Ordering::Relaxed);
            log::debug!("Blocked request: {}", url);
            RequestDecision::Block
        } else {
            RequestDecision::Allow
        }
    }

    /// Navigation requests are accepted unless the request itself is blocked.
    pub fn accept_navigation(&self, url: &str) -> bool {
        self.intercept_request(url) == RequestDecision::Allow
    }

    pub fn decide_permission(&self, feature: PageFeature) -> PermissionDecision {
        if !self.cursor_lock_enabled() {
            return PermissionDecision::Deny;
        }
        match (self.permission_policy, feature) {
            (PermissionPolicy::GrantAll, _) => PermissionDecision::Grant,
            (PermissionPolicy::PointerLockOnly, PageFeature::PointerLock) => PermissionDecision::Grant,
            _ => PermissionDecision::Deny,
        }
    }

    pub fn blocked_count(&self) -> u64 {
        self.blocked_requests.load(Ordering::Relaxed)
    }
}

impl Default for BrowserProfile {
    fn default() -> Self {
        Self::from_preferences(&Preferences::default())
    }
}
