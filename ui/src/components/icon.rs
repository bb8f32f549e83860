use dioxus::prelude::*;

/// Line icons used on the page (24×24 grid, stroke-based, Lucide geometry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Users,
    MapPin,
    BookOpen,
    Home,
    Briefcase,
    ShieldCheck,
    ArrowRight,
    Play,
    Heart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
    Polyline(&'static str),
    Polygon(&'static str),
}

impl IconName {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Self::Users => &[
                Shape::Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Shape::Circle { cx: 9.0, cy: 7.0, r: 4.0 },
                Shape::Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Shape::Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Self::MapPin => &[
                Shape::Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
                Shape::Circle { cx: 12.0, cy: 10.0, r: 3.0 },
            ],
            Self::BookOpen => &[
                Shape::Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
                Shape::Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
            ],
            Self::Home => &[
                Shape::Path("m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
                Shape::Polyline("9 22 9 12 15 12 15 22"),
            ],
            Self::Briefcase => &[
                Shape::Rect { x: 2.0, y: 7.0, width: 20.0, height: 14.0, rx: 2.0 },
                Shape::Path("M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
            ],
            Self::ShieldCheck => &[
                Shape::Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10"),
                Shape::Path("m9 12 2 2 4-4"),
            ],
            Self::ArrowRight => &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")],
            Self::Play => &[Shape::Polygon("6 3 20 12 6 21 6 3")],
            Self::Heart => &[Shape::Path(
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            )],
        }
    }
}

/// Decorative inline SVG glyph. Inherits `currentColor`.
#[component]
pub fn Icon(
    name: IconName,
    #[props(default = 24)] size: u32,
    #[props(into, default)] class: String,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in name.shapes().iter() {
                {render_shape(*shape)}
            }
        }
    }
}

fn render_shape(shape: Shape) -> Element {
    match shape {
        Shape::Path(d) => rsx! { path { d: "{d}" } },
        Shape::Circle { cx, cy, r } => rsx! { circle { cx: "{cx}", cy: "{cy}", r: "{r}" } },
        Shape::Rect { x, y, width, height, rx } => rsx! {
            rect { x: "{x}", y: "{y}", width: "{width}", height: "{height}", rx: "{rx}", ry: "{rx}" }
        },
        Shape::Polyline(points) => rsx! { polyline { points: "{points}" } },
        Shape::Polygon(points) => rsx! { polygon { points: "{points}" } },
    }
}
