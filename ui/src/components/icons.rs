use dioxus::prelude::*;

/// Stroke icons used on the page (24×24 grid, drawn with `currentColor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Globe,
    Gallery,
    ExternalLink,
    Mail,
    Phone,
    MapPin,
    ChevronLeft,
    ChevronRight,
    Close,
}

#[component]
pub fn Icon(kind: IconKind, #[props(default, into)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {shapes(kind)}
        }
    }
}

fn shapes(kind: IconKind) -> Element {
    match kind {
        IconKind::Globe => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
            path { d: "M2 12h20" }
        },
        IconKind::Gallery => rsx! {
            path { d: "M2 7v10" }
            path { d: "M6 5v14" }
            rect { width: "12", height: "18", x: "10", y: "3", rx: "2" }
        },
        IconKind::ExternalLink => rsx! {
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        },
        IconKind::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        IconKind::Phone => rsx! {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        },
        IconKind::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        IconKind::ChevronLeft => rsx! {
            path { d: "m15 18-6-6 6-6" }
        },
        IconKind::ChevronRight => rsx! {
            path { d: "m9 18 6-6-6-6" }
        },
        IconKind::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    }
}
