use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct LogoProps {
    #[props(default = 32)]
    size: u32,
}

// sun over a roof with a leaf, drawn in currentColor
#[component]
pub fn Logo(props: LogoProps) -> Element {
    let size = props.size;

    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 64 64",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "3",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M26 14a6 6 0 1 0 12 0a6 6 0 1 0 -12 0" }
            path { d: "M32 2v2M44 14h2M18 14h2M40.5 5.5l-1.4 1.4M23.5 5.5l1.4 1.4" }
            path { d: "M8 36L32 22l24 14" }
            path { d: "M14 33v25h36V33" }
            path { d: "M26 58V46a6 6 0 0 1 12 0v12" }
            path { d: "M20 30l6-3.5M38 26.5l6 3.5" }
        }
    }
}
