use std::collections::HashMap;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

// StorageKey
//
// the persisted values the dashboard reads.  they are written by the profile and
// alert pages, so the key names must stay in sync with those writers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    ProfileName,
    SocialFollowers,
    ProfileBio,
    AlertLocation,
    ProfileAvatar,
}

impl StorageKey {
    pub fn all() -> [Self; 5] {
        [
            Self::ProfileName,
            Self::SocialFollowers,
            Self::ProfileBio,
            Self::AlertLocation,
            Self::ProfileAvatar,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::ProfileName => "profile-name",
            Self::SocialFollowers => "social-followers",
            Self::ProfileBio => "profile-bio",
            Self::AlertLocation => "alert-location",
            Self::ProfileAvatar => "profile-avatar",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Self::ProfileName => "",
            Self::SocialFollowers => "0",
            Self::ProfileBio => "Your bio will appear here.",
            Self::AlertLocation => "Your location",
            Self::ProfileAvatar => "",
        }
    }
}

/// Decode a raw stored item into display text.
///
/// Items are JSON documents.  Strings decode to their contents, numbers and
/// booleans to their textual form.  Anything else is treated as malformed.
pub fn decode_stored(raw: &str) -> Option<String> {
    decode_value(serde_json::from_str(raw).ok()?)
}

pub fn decode_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// KeyValueStore
//
// implementors only provide the raw, fallible read.  get_or() is the one accessor
// the rest of the app uses, and it never fails: absent, malformed, or unreadable
// values all come back as the caller's default
pub trait KeyValueStore {
    fn fetch(&self, key: &str) -> Result<Option<String>>;

    fn get_or(&self, key: &str, default: &str) -> String {
        match self.fetch(key) {
            Ok(Some(v)) => v,
            Ok(None) => default.to_owned(),
            Err(err) => {
                warn!(key, "storage read failed, using default: {err}");
                default.to_owned()
            }
        }
    }

    fn read(&self, key: StorageKey) -> String {
        self.get_or(key.key(), key.default_value())
    }
}

// MemoryStore
//
// holds raw items exactly as the browser would, so the same decoding path is
// exercised.  used when localStorage is missing and in tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            items: HashMap::new(),
        }
    }

    pub fn insert_raw(&mut self, key: &str, raw: &str) {
        self.items.insert(key.to_owned(), raw.to_owned());
    }

    pub fn insert<T: Serialize>(&mut self, key: StorageKey, value: T) -> Result<()> {
        let raw = serde_json::to_string(&value)?;
        self.items.insert(key.key().to_owned(), raw);
        Ok(())
    }

    pub fn remove(&mut self, key: StorageKey) {
        self.items.remove(key.key());
    }
}

impl KeyValueStore for MemoryStore {
    fn fetch(&self, key: &str) -> Result<Option<String>> {
        let Some(raw) = self.items.get(key) else {
            return Ok(None);
        };

        match decode_stored(raw) {
            Some(v) => Ok(Some(v)),
            None => Err(anyhow::Error::msg(format!("malformed item: {raw}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn fetch(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow::Error::msg("storage unavailable"))
        }
    }

    #[rstest]
    #[case(r#""Ava""#, Some("Ava"))]
    #[case(r#""""#, Some(""))]
    #[case("2500", Some("2500"))]
    #[case("true", Some("true"))]
    #[case("null", None)]
    #[case("[1, 2]", None)]
    #[case(r#"{"name": "Ava"}"#, None)]
    #[case("Ava", None)]
    fn decodes_stored_items(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(decode_stored(raw).as_deref(), expected);
    }

    #[test]
    fn absent_keys_yield_defaults() {
        let store = MemoryStore::new();

        for key in StorageKey::all() {
            assert_eq!(store.read(key), key.default_value());
        }
    }

    #[test]
    fn malformed_items_yield_defaults() {
        let mut store = MemoryStore::new();
        store.insert_raw("profile-bio", "{not json");
        store.insert_raw("alert-location", "null");

        assert_eq!(store.read(StorageKey::ProfileBio), "Your bio will appear here.");
        assert_eq!(store.read(StorageKey::AlertLocation), "Your location");
    }

    #[test]
    fn failing_store_yields_defaults() {
        assert_eq!(BrokenStore.get_or("profile-name", "fallback"), "fallback");
        assert_eq!(BrokenStore.read(StorageKey::SocialFollowers), "0");
    }

    #[test]
    fn stored_values_are_read_verbatim() -> Result<()> {
        let mut store = MemoryStore::new();
        store.insert(StorageKey::ProfileName, "Ava")?;
        store.insert(StorageKey::SocialFollowers, 2500)?;

        assert_eq!(store.read(StorageKey::ProfileName), "Ava");
        assert_eq!(store.read(StorageKey::SocialFollowers), "2500");

        store.remove(StorageKey::ProfileName);
        assert_eq!(store.read(StorageKey::ProfileName), "");
        Ok(())
    }

    #[test]
    fn keys_match_the_profile_writers() {
        let keys: Vec<&str> = StorageKey::all().iter().map(|k| k.key()).collect();
        assert_eq!(
            keys,
            [
                "profile-name",
                "social-followers",
                "profile-bio",
                "alert-location",
                "profile-avatar"
            ]
        );
    }
}
