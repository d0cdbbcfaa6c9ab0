//! Profile inspection and reset

use crate::core::Profile;
use crate::store::{ProfileStore, load_or_default};
use anyhow::{Context, Result, bail};
use tracing::info;

/// Load the stored profile for display
///
/// Corrupt data shows as the default profile, the same as in play.
pub fn load_stats<S: ProfileStore + ?Sized>(store: &S) -> Profile {
    load_or_default(store)
}

/// Overwrite the stored profile with defaults
///
/// # Errors
///
/// Refuses without `confirmed`, and fails if the store cannot be written.
pub fn reset_profile<S: ProfileStore + ?Sized>(store: &S, confirmed: bool) -> Result<Profile> {
    if !confirmed {
        bail!("refusing to reset the profile without --yes");
    }

    let profile = Profile::default();
    store.save(&profile).context("resetting profile")?;
    info!("Profile reset");
    Ok(profile)
}
