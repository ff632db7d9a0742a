//! Anonymous guest identity.
//!
//! Visitors never authenticate; orders are attributed to a random
//! identifier generated on first use and persisted locally, so it is
//! stable across sessions on the same machine.

use tracing::debug;
use uuid::Uuid;

use crate::storage::{LocalStore, StorageError, StoreKey};

const GUEST_PREFIX: &str = "guest_";

/// Returns the persisted guest identifier, creating and persisting a
/// fresh one on first call.
pub fn get_or_create(store: &LocalStore) -> Result<String, StorageError> {
    if let Some(id) = store.read::<String>(StoreKey::GuestId)? {
        return Ok(id);
    }

    let id = format!("{}{}", GUEST_PREFIX, Uuid::new_v4().simple());
    store.write(StoreKey::GuestId, &id)?;
    debug!(guest_id = %id, "created guest identity");
    Ok(id)
}
