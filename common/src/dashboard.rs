use tracing::debug;

use crate::{
    community::TOTAL_COMMUNITY_MEMBERS,
    features::{FEATURES, Feature, Section},
    profile::{ProfileSummary, welcome_message},
    storage::KeyValueStore,
};

pub const TAGLINE: &str = "Your comprehensive companion for sustainable, off-grid living.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advert {
    pub title: &'static str,
    pub blurb: &'static str,
    pub cta: &'static str,
    pub section: Section,
}

pub const ADVERT: Advert = Advert {
    title: "Advertise Here",
    blurb: "Reach a dedicated community of homesteaders.",
    cta: "Contact Sales",
    section: Section::Contact,
};

// DashboardView
//
// the fully resolved contents of the dashboard.  load() is a pure function of
// whatever the store holds, so rendering it twice gives the same page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    pub welcome: String,
    pub tagline: &'static str,
    pub profile: ProfileSummary,
    pub community_total: usize,
    pub advert: Advert,
    pub features: &'static [Feature],
}

impl DashboardView {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let profile = ProfileSummary::load(store);

        debug!(
            named = !profile.name.is_empty(),
            has_avatar = profile.avatar.is_some(),
            "building dashboard view"
        );

        DashboardView {
            welcome: welcome_message(&profile.name),
            tagline: TAGLINE,
            profile,
            community_total: TOTAL_COMMUNITY_MEMBERS,
            advert: ADVERT,
            features: &FEATURES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageKey};

    #[test]
    fn populated_store() -> anyhow::Result<()> {
        let mut store = MemoryStore::new();
        store.insert(StorageKey::ProfileName, "Ava")?;
        store.insert(StorageKey::SocialFollowers, "2500")?;
        store.insert(StorageKey::ProfileBio, "Solar enthusiast")?;
        store.insert(StorageKey::AlertLocation, "Austin, TX")?;
        store.insert(StorageKey::ProfileAvatar, "")?;

        let view = DashboardView::load(&store);

        assert_eq!(view.welcome, "Welcome to GridHub, Ava!");
        assert_eq!(view.profile.title, "Ava");
        assert_eq!(view.profile.followers, "2,500");
        assert_eq!(view.profile.location, "Austin, TX");
        assert_eq!(view.profile.bio, "Solar enthusiast");
        assert_eq!(view.profile.avatar, None);
        Ok(())
    }

    #[test]
    fn empty_store() {
        let view = DashboardView::load(&MemoryStore::new());

        assert_eq!(view.welcome, "Welcome to GridHub, let's get building!");
        assert_eq!(view.profile.title, "Your Profile");
        assert_eq!(view.profile.followers, "0");
        assert_eq!(view.profile.location, "Your location");
        assert_eq!(view.profile.bio, "Your bio will appear here.");
        assert_eq!(view.profile.avatar, None);
        assert_eq!(view.community_total, 4);
        assert_eq!(view.advert.section.path(), "/contact");
    }

    #[test]
    fn navigation_grid_is_fixed() {
        let view = DashboardView::load(&MemoryStore::new());

        let titles: Vec<&str> = view.features.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            ["Calculators", "Disaster Alerts", "Resource Hub", "Community Chat"]
        );
        let paths: Vec<&str> = view.features.iter().map(|f| f.href()).collect();
        assert_eq!(paths, ["/calculators", "/alerts", "/resources", "/chat"]);
    }

    #[test]
    fn loading_is_idempotent() -> anyhow::Result<()> {
        let mut store = MemoryStore::new();
        store.insert(StorageKey::ProfileName, "Ava")?;
        store.insert_raw("social-followers", "garbage");

        assert_eq!(DashboardView::load(&store), DashboardView::load(&store));
        Ok(())
    }

    #[test]
    fn malformed_follower_item_shows_zero() {
        let mut store = MemoryStore::new();
        store.insert_raw("social-followers", "{oops");

        assert_eq!(DashboardView::load(&store).profile.followers, "0");
    }
}
