use dioxus::prelude::*;

/// Stroke icons used across the page (24x24 grid, drawn with `currentColor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
  TrendingUp,
  BarChart,
  BarChart3,
  BarChart4,
  Percent,
  DollarSign,
  Target,
  Shield,
  Eye,
  ArrowUpRight,
  ArrowDownRight,
  ChevronLeft,
  ChevronRight,
  Quote,
  Clock,
  Users,
  Award,
  BookOpen,
  Mail,
  MessageSquare,
  Send,
  Check,
  Menu,
  Close,
  Twitter,
  Linkedin,
  Instagram,
  Youtube,
}

enum Shape {
  Path(&'static str),
  Circle(&'static str, &'static str, &'static str),
  Rect(&'static str, &'static str, &'static str, &'static str, &'static str),
  Line(&'static str, &'static str, &'static str, &'static str),
  Polyline(&'static str),
}

impl IconKind {
  fn shapes(self) -> &'static [Shape] {
    use Shape::*;
    match self {
      IconKind::TrendingUp => &[Polyline("22 7 13.5 15.5 8.5 10.5 2 17"), Polyline("16 7 22 7 22 13")],
      IconKind::BarChart => &[Line("12", "20", "12", "10"), Line("18", "20", "18", "4"), Line("6", "20", "6", "16")],
      IconKind::BarChart3 => &[Path("M3 3v18h18"), Path("M18 17V9"), Path("M13 17V5"), Path("M8 17v-3")],
      IconKind::BarChart4 => &[Path("M3 3v18h18"), Path("M13 17V9"), Path("M18 17V5"), Path("M8 17v-3")],
      IconKind::Percent => &[Line("19", "5", "5", "19"), Circle("6.5", "6.5", "2.5"), Circle("17.5", "17.5", "2.5")],
      IconKind::DollarSign => &[Line("12", "1", "12", "23"), Path("M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6")],
      IconKind::Target => &[Circle("12", "12", "10"), Circle("12", "12", "6"), Circle("12", "12", "2")],
      IconKind::Shield => &[Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")],
      IconKind::Eye => &[Path("M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"), Circle("12", "12", "3")],
      IconKind::ArrowUpRight => &[Path("M7 7h10v10"), Path("M7 17 17 7")],
      IconKind::ArrowDownRight => &[Path("m7 7 10 10"), Path("M17 7v10H7")],
      IconKind::ChevronLeft => &[Path("m15 18-6-6 6-6")],
      IconKind::ChevronRight => &[Path("m9 18 6-6-6-6")],
      IconKind::Quote => &[
        Path("M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z"),
        Path("M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"),
      ],
      IconKind::Clock => &[Circle("12", "12", "10"), Polyline("12 6 12 12 16 14")],
      IconKind::Users => &[
        Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
        Circle("9", "7", "4"),
        Path("M22 21v-2a4 4 0 0 0-3-3.87"),
        Path("M16 3.13a4 4 0 0 1 0 7.75"),
      ],
      IconKind::Award => &[Circle("12", "8", "6"), Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11")],
      IconKind::BookOpen => &[
        Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
        Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
      ],
      IconKind::Mail => &[Rect("2", "4", "20", "16", "2"), Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7")],
      IconKind::MessageSquare => &[Path("M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z")],
      IconKind::Send => &[Path("m22 2-7 20-4-9-9-4Z"), Path("M22 2 11 13")],
      IconKind::Check => &[Path("M20 6 9 17l-5-5")],
      IconKind::Menu => &[Line("4", "12", "20", "12"), Line("4", "6", "20", "6"), Line("4", "18", "20", "18")],
      IconKind::Close => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
      IconKind::Twitter => &[Path("M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z")],
      IconKind::Linkedin => &[
        Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
        Rect("2", "9", "4", "12", "0"),
        Circle("4", "4", "2"),
      ],
      IconKind::Instagram => &[
        Rect("2", "2", "20", "20", "5"),
        Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
        Line("17.5", "6.5", "17.51", "6.5"),
      ],
      IconKind::Youtube => &[
        Path("M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"),
        Path("m10 15 5-3-5-3z"),
      ],
    }
  }
}

fn render_shape(shape: &Shape) -> Element {
  match *shape {
    Shape::Path(d) => rsx! { path { d } },
    Shape::Circle(cx, cy, r) => rsx! { circle { cx, cy, r } },
    Shape::Rect(x, y, width, height, rx) => rsx! { rect { x, y, width, height, rx } },
    Shape::Line(x1, y1, x2, y2) => rsx! { line { x1, y1, x2, y2 } },
    Shape::Polyline(points) => rsx! { polyline { points } },
  }
}

#[component]
pub fn Icon(kind: IconKind, #[props(into, default = "icon".to_string())] class: String) -> Element {
  rsx! {
    svg {
      class: "{class}",
      xmlns: "http://www.w3.org/2000/svg",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      {kind.shapes().iter().map(render_shape)}
    }
  }
}
