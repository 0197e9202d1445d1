//! Client-side cache of server state
//!
//! Explicit replacement for an implicit query cache: each key holds the
//! last fetched value plus a stale flag. `invalidate` marks a key stale
//! without dropping the data - consumers keep rendering the old value until
//! the refetch lands, so there is never an optimistic local mutation.

use crate::api::{AuthUser, Notification};

/// Cache keys the application knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey {
    Notifications,
    AuthUser,
}

#[derive(Debug, Default)]
struct CacheEntry<T> {
    value: Option<T>,
    stale: bool,
}

impl<T> CacheEntry<T> {
    fn put(&mut self, value: T) {
        self.value = Some(value);
        self.stale = false;
    }
}

/// Cached server state shared by every component
#[derive(Debug, Default)]
pub struct Store {
    notifications: CacheEntry<Vec<Notification>>,
    auth_user: CacheEntry<AuthUser>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notification list as last fetched; empty before the first fetch.
    pub fn notifications(&self) -> &[Notification] {
        self.notifications.value.as_deref().unwrap_or(&[])
    }

    pub fn auth_user(&self) -> Option<&AuthUser> {
        self.auth_user.value.as_ref()
    }

    pub fn put_notifications(&mut self, notifications: Vec<Notification>) {
        self.notifications.put(notifications);
    }

    pub fn put_auth_user(&mut self, user: AuthUser) {
        self.auth_user.put(user);
    }

    /// Mark a key stale so the next scheduler tick refetches it.
    pub fn invalidate(&mut self, key: CacheKey) {
        match key {
            CacheKey::Notifications => self.notifications.stale = true,
            CacheKey::AuthUser => self.auth_user.stale = true,
        }
    }

    /// Acknowledge a stale key once its refetch has been scheduled. The old
    /// value stays visible; a failed refetch falls back to the regular
    /// cadence instead of retrying hot.
    pub fn begin_refresh(&mut self, key: CacheKey) {
        match key {
            CacheKey::Notifications => self.notifications.stale = false,
            CacheKey::AuthUser => self.auth_user.stale = false,
        }
    }

    pub fn is_stale(&self, key: CacheKey) -> bool {
        match key {
            CacheKey::Notifications => self.notifications.stale,
            CacheKey::AuthUser => self.auth_user.stale,
        }
    }

    /// True once a key has been fetched at least once.
    pub fn is_loaded(&self, key: CacheKey) -> bool {
        match key {
            CacheKey::Notifications => self.notifications.value.is_some(),
            CacheKey::AuthUser => self.auth_user.value.is_some(),
        }
    }
}
