use crate::storage::{KeyValueStore, StorageKey};

pub const BRAND: &str = "GridHub";
pub const FALLBACK_GREETING: &str = "Welcome to GridHub, let's get building!";
pub const FALLBACK_TITLE: &str = "Your Profile";

pub fn welcome_message(name: &str) -> String {
    if name.is_empty() {
        FALLBACK_GREETING.to_owned()
    } else {
        format!("Welcome to {BRAND}, {name}!")
    }
}

pub fn profile_title(name: &str) -> &str {
    if name.is_empty() { FALLBACK_TITLE } else { name }
}

/// Parse a stored follower count the way a browser `parseInt(s, 10)` would.
///
/// Leading whitespace and a sign are accepted and anything after the leading
/// digits is ignored.  Input without digits and negative counts both give 0.
/// Counts past `u64::MAX` saturate.
pub fn parse_follower_count(raw: &str) -> u64 {
    let s = raw.trim_start();

    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let digits = &rest[..len];

    if negative || digits.is_empty() {
        return 0;
    }

    digits.bytes().fold(0u64, |acc, d| {
        acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    })
}

/// en-US digit grouping, e.g. `12345` becomes `"12,345"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

pub fn format_follower_count(raw: &str) -> String {
    group_thousands(parse_follower_count(raw))
}

// ProfileSummary
//
// everything the profile card shows, already resolved to display text.  an
// empty avatar reference becomes None so the card can fall back to the icon
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub title: String,
    pub followers: String,
    pub location: String,
    pub bio: String,
    pub avatar: Option<String>,
}

impl ProfileSummary {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let name = store.read(StorageKey::ProfileName);
        let avatar = store.read(StorageKey::ProfileAvatar);

        ProfileSummary {
            title: profile_title(&name).to_owned(),
            followers: format_follower_count(&store.read(StorageKey::SocialFollowers)),
            location: store.read(StorageKey::AlertLocation),
            bio: store.read(StorageKey::ProfileBio),
            avatar: if avatar.trim().is_empty() {
                None
            } else {
                Some(avatar)
            },
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rstest::rstest;

    #[rstest]
    #[case("Ava", "Welcome to GridHub, Ava!")]
    #[case("Jean-Luc Picard", "Welcome to GridHub, Jean-Luc Picard!")]
    #[case("", "Welcome to GridHub, let's get building!")]
    fn greets_by_name(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(welcome_message(name), expected);
    }

    #[test]
    fn empty_name_falls_back_to_profile_label() {
        assert_eq!(profile_title(""), "Your Profile");
        assert_eq!(profile_title("Ava"), "Ava");
    }

    #[rstest]
    #[case("0", "0")]
    #[case("7", "7")]
    #[case("999", "999")]
    #[case("1000", "1,000")]
    #[case("2500", "2,500")]
    #[case("12345", "12,345")]
    #[case("1234567", "1,234,567")]
    #[case("", "0")]
    #[case("abc", "0")]
    #[case("NaN", "0")]
    #[case("   42", "42")]
    #[case("+42", "42")]
    #[case("12abc", "12")]
    #[case("3.75", "3")]
    #[case("-5", "0")]
    #[case("007", "7")]
    fn formats_follower_counts(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_follower_count(raw), expected);
    }

    #[test]
    fn oversized_counts_saturate() {
        assert_eq!(parse_follower_count("99999999999999999999999"), u64::MAX);
        assert_eq!(
            group_thousands(u64::MAX),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn summary_reads_every_key() -> anyhow::Result<()> {
        let mut store = MemoryStore::new();
        store.insert(StorageKey::ProfileName, "Ava")?;
        store.insert(StorageKey::SocialFollowers, "2500")?;
        store.insert(StorageKey::ProfileBio, "Solar enthusiast")?;
        store.insert(StorageKey::AlertLocation, "Austin, TX")?;
        store.insert(StorageKey::ProfileAvatar, "https://example.com/ava.png")?;

        let summary = ProfileSummary::load(&store);

        assert_eq!(summary.title, "Ava");
        assert_eq!(summary.followers, "2,500");
        assert_eq!(summary.location, "Austin, TX");
        assert_eq!(summary.bio, "Solar enthusiast");
        assert_eq!(summary.avatar.as_deref(), Some("https://example.com/ava.png"));
        Ok(())
    }

    #[test]
    fn blank_avatar_uses_fallback() -> anyhow::Result<()> {
        let mut store = MemoryStore::new();
        store.insert(StorageKey::ProfileAvatar, "   ")?;

        assert_eq!(ProfileSummary::load(&store).avatar, None);
        Ok(())
    }
}
