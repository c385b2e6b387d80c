//! Browser `localStorage` backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate builds read and write `window.localStorage`. SSR builds have no
//! window, so reads report `Unavailable` and the session core treats that as
//! "no session".

use eventdesk::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|_| StorageError::Unavailable("localStorage access denied".to_owned()))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable(format!("read of {key} failed")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("not available on server".to_owned()))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Unavailable(format!("write of {key} failed")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("not available on server".to_owned()))
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Unavailable(format!("remove of {key} failed")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("not available on server".to_owned()))
        }
    }
}
