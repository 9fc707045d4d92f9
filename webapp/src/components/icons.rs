use dioxus::prelude::*;

use gridhub_common::features::FeatureIcon;

// outline icons drawn on a 24x24 grid with a 2px stroke.  circles and rects
// are written as paths so every icon is just a list of path data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Calculator,
    ShieldAlert,
    BookOpen,
    MessageSquare,
    Users,
    Megaphone,
    UserCircle,
    MapPin,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Calculator => &[
                "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M8 6h8",
                "M16 14v4",
                "M16 10h.01",
                "M12 10h.01",
                "M8 10h.01",
                "M12 14h.01",
                "M8 14h.01",
                "M12 18h.01",
                "M8 18h.01",
            ],
            Self::ShieldAlert => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
                "M12 8v4",
                "M12 16h.01",
            ],
            Self::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Self::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0 -8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Megaphone => &["M3 11l18-5v12L3 14v-3z", "M11.6 16.8a3 3 0 1 1-5.8-1.6"],
            Self::UserCircle => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0 -20 0",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
                "M7 20.662V19a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v1.662",
            ],
            Self::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
            ],
        }
    }
}

impl From<FeatureIcon> for Icon {
    fn from(icon: FeatureIcon) -> Self {
        match icon {
            FeatureIcon::Calculator => Icon::Calculator,
            FeatureIcon::ShieldAlert => Icon::ShieldAlert,
            FeatureIcon::BookOpen => Icon::BookOpen,
            FeatureIcon::MessageSquare => Icon::MessageSquare,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum IconSize {
    Xs,
    Sm,
    Md,
}

impl Default for IconSize {
    fn default() -> Self {
        IconSize::Md
    }
}

impl IconSize {
    fn pixels(self) -> u32 {
        match self {
            IconSize::Xs => 12,
            IconSize::Sm => 16,
            IconSize::Md => 24,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconSvgProps {
    icon: Icon,
    #[props(default)]
    size: IconSize,
    #[props(default)]
    muted: bool,
}

#[component]
pub fn IconSvg(props: IconSvgProps) -> Element {
    let px = props.size.pixels();
    let color = if props.muted {
        "color: var(--text-muted);"
    } else {
        ""
    };

    rsx! {
        svg {
            class: "icon",
            style: "{color}",
            width: "{px}",
            height: "{px}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in props.icon.paths().iter() {
                path { key: "{d}", d: "{d}" }
            }
        }
    }
}
