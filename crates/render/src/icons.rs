//! Inline SVG for the enumerated icon set.
//!
//! The lookup is total: unknown icon names already collapsed to the
//! fallback when the block data was parsed, so a feature item always gets
//! a glyph.

use kemas_core::block::model::IconId;
use maud::{html, Markup, PreEscaped};

/// Render an icon as a 24x24 inline SVG.
pub fn icon_svg(icon: IconId) -> Markup {
    html! {
        svg class="icon" viewBox="0 0 24 24" width="24" height="24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            (PreEscaped(icon_shape(icon)))
        }
    }
}

fn icon_shape(icon: IconId) -> &'static str {
    match icon {
        IconId::PackageBox => {
            r#"<path d="M21 8l-9-5-9 5v8l9 5 9-5z"/><path d="M3 8l9 5 9-5"/><path d="M12 13v8"/>"#
        }
        IconId::Truck => {
            r#"<rect x="1" y="5" width="14" height="11"/><path d="M15 8h4l3 4v4h-7z"/><circle cx="6" cy="18" r="2"/><circle cx="18" cy="18" r="2"/>"#
        }
        IconId::Shield => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
        IconId::Star => {
            r#"<path d="M12 2l3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1z"/>"#
        }
        IconId::Heart => {
            r#"<path d="M20.8 5.6a5.5 5.5 0 0 0-7.8 0L12 6.6l-1-1a5.5 5.5 0 0 0-7.8 7.8l8.8 8.8 8.8-8.8a5.5 5.5 0 0 0 0-7.8z"/>"#
        }
        IconId::Globe => {
            r#"<circle cx="12" cy="12" r="10"/><path d="M2 12h20"/><path d="M12 2a15 15 0 0 1 0 20 15 15 0 0 1 0-20z"/>"#
        }
        IconId::Leaf => r#"<path d="M6 21c12 0 14-10 14-17-9 0-17 3-17 13 0 2 1 4 3 4z"/><path d="M6 21C6 13 10 9 16 6"/>"#,
        IconId::Layers => {
            r#"<path d="M12 2l10 5-10 5L2 7z"/><path d="M2 12l10 5 10-5"/><path d="M2 17l10 5 10-5"/>"#
        }
        IconId::Zap => r#"<path d="M13 2L3 14h7l-1 8 10-12h-7z"/>"#,
        IconId::Award => r#"<circle cx="12" cy="8" r="6"/><path d="M9 13l-2 9 5-3 5 3-2-9"/>"#,
        IconId::Users => {
            r#"<circle cx="9" cy="7" r="4"/><path d="M1 21v-2a6 6 0 0 1 6-6h4a6 6 0 0 1 6 6v2"/><path d="M17 3.5a4 4 0 0 1 0 7"/><path d="M23 21v-2a6 6 0 0 0-4-5.7"/>"#
        }
        IconId::Settings => {
            r#"<circle cx="12" cy="12" r="3"/><path d="M19 12a7 7 0 0 0-.1-1.2l2-1.6-2-3.4-2.4 1a7 7 0 0 0-2-1.2L14 3h-4l-.5 2.6a7 7 0 0 0-2 1.2l-2.4-1-2 3.4 2 1.6A7 7 0 0 0 5 12a7 7 0 0 0 .1 1.2l-2 1.6 2 3.4 2.4-1a7 7 0 0 0 2 1.2L10 21h4l.5-2.6a7 7 0 0 0 2-1.2l2.4 1 2-3.4-2-1.6A7 7 0 0 0 19 12z"/>"#
        }
        IconId::Check => r#"<path d="M20 6L9 17l-5-5"/>"#,
        IconId::Phone => {
            r#"<path d="M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7 12.8 12.8 0 0 0 .7 2.8 2 2 0 0 1-.5 2.1L8 10a16 16 0 0 0 6 6l1.4-1.3a2 2 0 0 1 2.1-.5 12.8 12.8 0 0 0 2.8.7 2 2 0 0 1 1.7 2z"/>"#
        }
        IconId::Mail => {
            r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="M22 7l-10 6L2 7"/>"#
        }
        IconId::Image => {
            r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="8.5" cy="8.5" r="1.5"/><path d="M21 15l-5-5L5 21"/>"#
        }
        IconId::Film => {
            r#"<rect x="2" y="2" width="20" height="20" rx="2"/><path d="M7 2v20"/><path d="M17 2v20"/><path d="M2 12h20"/>"#
        }
        IconId::Quote => {
            r#"<path d="M10 11H6a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2a2 2 0 0 1 2 2v8a4 4 0 0 1-4 4"/><path d="M20 11h-4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2a2 2 0 0 1 2 2v8a4 4 0 0 1-4 4"/>"#
        }
        IconId::HelpCircle => {
            r#"<circle cx="12" cy="12" r="10"/><path d="M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#
        }
        IconId::Tag => {
            r#"<path d="M20.6 13.4l-7.2 7.2a2 2 0 0 1-2.8 0L2 12V2h10l8.6 8.6a2 2 0 0 1 0 2.8z"/><path d="M7 7h.01"/>"#
        }
        IconId::BarChart => r#"<path d="M12 20V10"/><path d="M18 20V4"/><path d="M6 20v-4"/>"#,
        IconId::Type => r#"<path d="M4 7V4h16v3"/><path d="M9 20h6"/><path d="M12 4v16"/>"#,
        IconId::Megaphone => r#"<path d="M3 11l18-7v16L3 13z"/><path d="M11.6 16.8a3 3 0 1 1-5.8-1.6"/>"#,
        IconId::Code => r#"<path d="M16 18l6-6-6-6"/><path d="M8 6l-6 6 6 6"/>"#,
        IconId::Circle => r#"<circle cx="12" cy="12" r="10"/>"#,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_renders_a_shape() {
        // A new IconId variant without path data fails to compile, but the
        // rendered markup should also never be an empty svg.
        for icon in [
            IconId::PackageBox,
            IconId::Truck,
            IconId::Users,
            IconId::Circle,
        ] {
            let svg = icon_svg(icon).into_string();
            assert!(svg.starts_with("<svg"));
            assert!(svg.contains("path") || svg.contains("circle") || svg.contains("rect"));
        }
    }

    #[test]
    fn fallback_icon_is_the_circle() {
        assert_eq!(IconId::default(), IconId::Circle);
    }
}
