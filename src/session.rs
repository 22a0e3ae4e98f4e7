//! The local-storage-backed session.
//!
//! There is no real authentication in FundMyChai: "logged in" is a flag in
//! the key-value store, exactly as in the original client. Sign-up also seeds
//! an initial profile so the dashboard has something to edit.

use chrono::Utc;
use fundmychai_types::Creator;

use crate::store::{self, KeyValueStore, PROFILE_KEY, SESSION_KEY, StoreError};

/// Whether the session flag is set.
pub fn is_authenticated(store: &dyn KeyValueStore) -> bool {
    store.get(SESSION_KEY).as_deref() == Some("true")
}

/// Sets the session flag.
pub fn log_in(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.set(SESSION_KEY, "true")
}

/// Clears the session flag. The profile and ledger stay put.
pub fn log_out(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(SESSION_KEY)
}

/// Sets the session flag and, when no profile exists yet, seeds an initial
/// one carrying the signed-up name.
///
/// Returns the profile the dashboard should edit next.
pub fn sign_up(store: &mut dyn KeyValueStore, name: &str) -> Result<Creator, StoreError> {
    log_in(store)?;
    if let Some(existing) = load_profile(store) {
        return Ok(existing);
    }
    let profile = Creator {
        id: format!("user_{}", Utc::now().timestamp_millis()),
        name: name.to_string(),
        ..Creator::default()
    };
    save_profile(store, &profile)?;
    tracing::info!(id = %profile.id, "seeded initial profile");
    Ok(profile)
}

/// The creator's own stored profile, if any.
pub fn load_profile(store: &dyn KeyValueStore) -> Option<Creator> {
    store::get_json(store, PROFILE_KEY)
}

/// Persists the creator's profile. Called on every mutation.
pub fn save_profile(store: &mut dyn KeyValueStore, profile: &Creator) -> Result<(), StoreError> {
    store::set_json(store, PROFILE_KEY, profile)
}
