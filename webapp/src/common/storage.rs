use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use serde_json::Value;

use gridhub_common::storage::{KeyValueStore, decode_value};

fn local_storage_available() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .is_some()
}

// BrowserStore
//
// reads the unprefixed keys the rest of the app writes.  private browsing modes
// can disable localStorage entirely, which reads as "nothing stored"
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn fetch(&self, key: &str) -> anyhow::Result<Option<String>> {
        if !local_storage_available() {
            return Ok(None);
        }

        match LocalStorage::get::<Value>(key) {
            Ok(value) => decode_value(value).map(Some).ok_or_else(|| {
                console_error!(format!("Unexpected local storage contents for {key}"));
                anyhow::Error::msg("Local storage failure, see console log")
            }),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => {
                console_error!(format!("Failed to fetch local storage {key}: {err}"));
                Err(anyhow::Error::msg("Local storage failure, see console log"))
            }
        }
    }
}
