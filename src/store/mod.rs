//! Durable storage for the player profile
//!
//! A store only moves bytes. Recovering from corrupt data is handled once,
//! in [`load_or_default`], so every caller gets the same fallback.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::Profile;
use crate::error::StoreError;
use tracing::warn;

/// Key-value storage for the single persisted profile
pub trait ProfileStore: Send + Sync {
    /// Read the stored profile
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Profile>, StoreError>;

    /// Replace the stored profile
    ///
    /// Either the whole profile is written or the previous one is kept.
    fn save(&self, profile: &Profile) -> Result<(), StoreError>;
}

/// Load the profile, falling back to defaults on absence or corruption
///
/// A corrupt or unreadable profile is logged, never propagated.
pub fn load_or_default<S: ProfileStore + ?Sized>(store: &S) -> Profile {
    match store.load() {
        Ok(Some(profile)) => profile,
        Ok(None) => Profile::default(),
        Err(e) => {
            warn!("Ignoring stored profile: {}", e);
            Profile::default()
        }
    }
}
