use crate::storage::KeyValueStore;
use log::warn;

/// Key holding the eye-comfort (high contrast) flag as "true"/"false"
pub const CONTRAST_KEY: &str = "f2t_contrast";

/// Whether eye-comfort mode is on; anything but a stored "true" means off
pub fn load_contrast_mode(store: &dyn KeyValueStore) -> bool {
    match store.get(CONTRAST_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            warn!("Could not read contrast preference: {}", e);
            false
        }
    }
}

/// Persist the eye-comfort flag; failures are logged and ignored
pub fn save_contrast_mode(store: &mut dyn KeyValueStore, enabled: bool) {
    if let Err(e) = store.set(CONTRAST_KEY, if enabled { "true" } else { "false" }) {
        warn!("Could not save contrast preference: {}", e);
    }
}
