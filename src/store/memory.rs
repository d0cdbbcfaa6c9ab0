//! In-memory profile store

use super::ProfileStore;
use crate::core::Profile;
use crate::error::StoreError;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
struct Inner {
    raw: Option<String>,
    saves: usize,
    reject_saves: bool,
}

/// Profile store held in memory as serialized JSON
///
/// Keeping the serialized form lets tests seed corrupt data and observe
/// exactly what was written.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw (possibly invalid) content
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        store.lock().raw = Some(raw.into());
        store
    }

    /// Store seeded with a valid profile
    ///
    /// # Panics
    /// Will not panic - `Profile` always serializes.
    #[must_use]
    pub fn with_profile(profile: &Profile) -> Self {
        Self::with_raw(serde_json::to_string(profile).expect("profile serializes"))
    }

    /// Make subsequent saves fail with `StoreError::Rejected`
    pub fn reject_saves(&self, reject: bool) {
        self.lock().reject_saves = reject;
    }

    /// Number of successful saves
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// Raw stored content
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.lock().raw.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Option<Profile>, StoreError> {
        match self.lock().raw.as_deref() {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(StoreError::Corrupt),
        }
    }

    fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.reject_saves {
            return Err(StoreError::Rejected);
        }

        inner.raw = Some(serde_json::to_string(profile).map_err(StoreError::Serialize)?);
        inner.saves += 1;
        Ok(())
    }
}
