use serde::{Deserialize, Serialize};

// Section
//
// the app sections reachable from the dashboard.  the webapp maps each one onto
// a route, so adding a variant here means adding a route there
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Calculators,
    Alerts,
    Resources,
    Chat,
    Contact,
}

impl Section {
    pub fn all() -> [Self; 5] {
        [
            Self::Calculators,
            Self::Alerts,
            Self::Resources,
            Self::Chat,
            Self::Contact,
        ]
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Calculators => "/calculators",
            Self::Alerts => "/alerts",
            Self::Resources => "/resources",
            Self::Chat => "/chat",
            Self::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Calculators => "Calculators",
            Self::Alerts => "Alerts",
            Self::Resources => "Resources",
            Self::Chat => "Chat",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureIcon {
    Calculator,
    ShieldAlert,
    BookOpen,
    MessageSquare,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub section: Section,
    pub icon: FeatureIcon,
}

impl Feature {
    pub fn href(&self) -> &'static str {
        self.section.path()
    }

    pub fn cta(&self) -> String {
        format!("Go to {}", self.title)
    }
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        title: "Calculators",
        description: "Tools for rainfall, solar power, and Ohm's law.",
        section: Section::Calculators,
        icon: FeatureIcon::Calculator,
    },
    Feature {
        title: "Disaster Alerts",
        description: "Stay informed about natural disaster alerts.",
        section: Section::Alerts,
        icon: FeatureIcon::ShieldAlert,
    },
    Feature {
        title: "Resource Hub",
        description: "Gardening tips, zone maps, and guides.",
        section: Section::Resources,
        icon: FeatureIcon::BookOpen,
    },
    Feature {
        title: "Community Chat",
        description: "Connect with others and share knowledge.",
        section: Section::Chat,
        icon: FeatureIcon::MessageSquare,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_keep_declared_order() {
        let listed: Vec<(&str, &str)> = FEATURES.iter().map(|f| (f.title, f.href())).collect();

        assert_eq!(
            listed,
            [
                ("Calculators", "/calculators"),
                ("Disaster Alerts", "/alerts"),
                ("Resource Hub", "/resources"),
                ("Community Chat", "/chat"),
            ]
        );
    }

    #[test]
    fn call_to_action_names_the_feature() {
        assert_eq!(FEATURES[2].cta(), "Go to Resource Hub");
    }

    #[test]
    fn section_paths_are_unique() {
        let mut paths: Vec<&str> = Section::all().iter().map(|s| s.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Section::all().len());
    }

    #[test]
    fn sections_serialize_by_name() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&Section::Alerts)?, r#""Alerts""#);
        assert_eq!(serde_json::from_str::<Section>(r#""Chat""#)?, Section::Chat);
        Ok(())
    }
}
