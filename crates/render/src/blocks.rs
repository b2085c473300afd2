//! Block-array rendering: a pure mapping from an ordered block array to
//! markup. Blocks render strictly in array order; a block whose data is
//! missing or unusable renders nothing rather than erroring — the uniform
//! fallback policy for the whole renderer.

use kemas_core::block::model::{
    BlockBody, ContactField, ContactFormData, ContentBlock, CtaData, FaqData, FeaturesData,
    GalleryData, GalleryLayout, HeroData, HtmlData, PricingData, StatsData, TeamData,
    TestimonialData, TextData, VideoData,
};
use kemas_core::page::model::StaticContent;
use maud::{html, Markup, PreEscaped};

use crate::icons::icon_svg;
use crate::sanitize::clean_rich_text;
use crate::video::youtube_video_id;

/// Render an ordered block array. Empty input renders nothing. Each block
/// section carries its id as `data-block-id`; the id is used for nothing
/// else here.
pub fn render_blocks(blocks: &[ContentBlock]) -> Markup {
    html! {
        @for block in blocks {
            (render_block(block))
        }
    }
}

fn render_block(block: &ContentBlock) -> Markup {
    let id = block.id.as_str();
    match &block.body {
        BlockBody::Hero(d) => hero(id, d),
        BlockBody::Text(d) => text(id, d),
        BlockBody::ImageGallery(d) => gallery(id, d),
        BlockBody::Cta(d) => cta(id, d),
        BlockBody::Features(d) => features(id, d),
        BlockBody::Testimonial(d) => testimonial(id, d),
        BlockBody::Video(d) => video(id, d),
        BlockBody::Faq(d) => faq(id, d),
        BlockBody::PricingTable(d) => pricing(id, d),
        BlockBody::TeamMembers(d) => team(id, d),
        BlockBody::StatsCounter(d) => stats(id, d),
        BlockBody::ContactForm(d) => contact_form(id, d),
        BlockBody::Html(d) => raw_html(id, d),
        // Unknown and legacy kinds degrade to nothing, never an error.
        BlockBody::Unknown { .. } => html! {},
    }
}

/// The fixed sections of a built-in marketing page reuse the block
/// renderers, keyed by section name instead of a block id.
pub fn render_static_sections(content: &StaticContent) -> Markup {
    html! {
        @if let Some(d) = &content.hero { (hero("section-hero", d)) }
        @if let Some(d) = &content.features { (features("section-features", d)) }
        @if let Some(d) = &content.stats { (stats("section-stats", d)) }
        @if let Some(d) = &content.cta { (cta("section-cta", d)) }
    }
}

fn section(id: &str, class: &str, body: Markup) -> Markup {
    html! {
        section class=(class) data-block-id=(id) { (body) }
    }
}

fn link_or_hash(link: &str) -> &str {
    if link.is_empty() {
        "#"
    } else {
        link
    }
}

fn hero(id: &str, d: &HeroData) -> Markup {
    // Text inverts to light-on-dark when a background image is set.
    let has_image = !d.background_image.is_empty();
    let class = if has_image {
        "block block-hero block-hero--image"
    } else {
        "block block-hero"
    };
    section(id, class, html! {
        @if has_image {
            img class="block-hero__backdrop" src=(d.background_image) alt="";
        }
        div class="block-hero__body" {
            @if !d.title.is_empty() { h1 class="block-hero__title" { (d.title) } }
            @if !d.subtitle.is_empty() { p class="block-hero__subtitle" { (d.subtitle) } }
            @if !d.primary_button_text.is_empty() || !d.secondary_button_text.is_empty() {
                div class="block-hero__actions" {
                    @if !d.primary_button_text.is_empty() {
                        a class="button button--primary" href=(link_or_hash(&d.primary_button_link)) {
                            (d.primary_button_text)
                        }
                    }
                    @if !d.secondary_button_text.is_empty() {
                        a class="button button--ghost" href=(link_or_hash(&d.secondary_button_link)) {
                            (d.secondary_button_text)
                        }
                    }
                }
            }
        }
    })
}

fn text(id: &str, d: &TextData) -> Markup {
    if d.content.trim().is_empty() {
        return html! {};
    }
    section(id, "block block-text", html! {
        div class="rich-text" { (PreEscaped(clean_rich_text(&d.content))) }
    })
}

fn gallery(id: &str, d: &GalleryData) -> Markup {
    if d.images.is_empty() {
        return html! {};
    }
    let layout = match d.layout {
        GalleryLayout::Grid => "block-gallery--grid",
        GalleryLayout::Carousel => "block-gallery--carousel",
        GalleryLayout::Masonry => "block-gallery--masonry",
    };
    section(id, &format!("block block-gallery {layout}"), html! {
        @for image in &d.images {
            figure class="block-gallery__item" {
                img src=(image) alt="" loading="lazy";
            }
        }
    })
}

fn cta(id: &str, d: &CtaData) -> Markup {
    if d.title.is_empty() && d.description.is_empty() && d.button_text.is_empty() {
        return html! {};
    }
    section(id, "block block-cta", html! {
        @if !d.title.is_empty() { h2 { (d.title) } }
        @if !d.description.is_empty() { p { (d.description) } }
        @if !d.button_text.is_empty() {
            a class="button button--primary" href=(link_or_hash(&d.button_link)) { (d.button_text) }
        }
    })
}

fn features(id: &str, d: &FeaturesData) -> Markup {
    if d.items.is_empty() {
        return html! {};
    }
    section(id, "block block-features", html! {
        div class="block-features__grid" {
            @for item in &d.items {
                div class="block-features__item" {
                    span class="block-features__icon" { (icon_svg(item.icon)) }
                    @if !item.title.is_empty() { h3 { (item.title) } }
                    @if !item.description.is_empty() { p { (item.description) } }
                }
            }
        }
    })
}

fn testimonial(id: &str, d: &TestimonialData) -> Markup {
    if d.quote.is_empty() {
        return html! {};
    }
    section(id, "block block-testimonial", html! {
        blockquote class="block-testimonial__quote" { (d.quote) }
        footer class="block-testimonial__author" {
            @if !d.author_image.is_empty() {
                img class="block-testimonial__avatar" src=(d.author_image) alt=(d.author_name);
            }
            div {
                @if !d.author_name.is_empty() { cite { (d.author_name) } }
                @if !d.author_title.is_empty() { span { (d.author_title) } }
            }
        }
    })
}

fn video(id: &str, d: &VideoData) -> Markup {
    let Some(video_id) = youtube_video_id(&d.youtube_url) else {
        return html! {};
    };
    section(id, "block block-video", html! {
        iframe class="block-video__frame"
            src=(format!("https://www.youtube.com/embed/{video_id}"))
            title="Video"
            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
            allowfullscreen {}
    })
}

fn faq(id: &str, d: &FaqData) -> Markup {
    if d.items.is_empty() {
        return html! {};
    }
    section(id, "block block-faq", html! {
        @for item in &d.items {
            details class="block-faq__item" {
                summary { (item.question) }
                p { (item.answer) }
            }
        }
    })
}

fn pricing(id: &str, d: &PricingData) -> Markup {
    if d.plans.is_empty() {
        return html! {};
    }
    // Column layout adapts to the plan count; three and up share a class.
    let columns = match d.plans.len() {
        1 => "block-pricing--cols-1",
        2 => "block-pricing--cols-2",
        _ => "block-pricing--cols-3",
    };
    section(id, &format!("block block-pricing {columns}"), html! {
        @for plan in &d.plans {
            div."block-pricing__plan"."block-pricing__plan--popular"[plan.is_popular] {
                @if plan.is_popular {
                    span class="block-pricing__badge" { "Popular" }
                }
                h3 { (plan.name) }
                p class="block-pricing__price" {
                    (plan.price)
                    @if !plan.period.is_empty() { span { (plan.period) } }
                }
                @if !plan.features.is_empty() {
                    ul class="block-pricing__features" {
                        @for feature in &plan.features {
                            li { (feature) }
                        }
                    }
                }
                @if !plan.button_text.is_empty() {
                    a class="button button--primary" href=(link_or_hash(&plan.button_link)) {
                        (plan.button_text)
                    }
                }
            }
        }
    })
}

fn team(id: &str, d: &TeamData) -> Markup {
    if d.members.is_empty() {
        return html! {};
    }
    section(id, "block block-team", html! {
        div class="block-team__grid" {
            @for member in &d.members {
                div class="block-team__card" {
                    @if !member.image.is_empty() {
                        img class="block-team__photo" src=(member.image) alt=(member.name);
                    }
                    h3 { (member.name) }
                    @if !member.role.is_empty() { p class="block-team__role" { (member.role) } }
                    @if !member.bio.is_empty() { p class="block-team__bio" { (member.bio) } }
                    @if !member.linkedin.is_empty() {
                        a class="block-team__link" href=(member.linkedin) rel="noopener" { "LinkedIn" }
                    }
                }
            }
        }
    })
}

fn stats(id: &str, d: &StatsData) -> Markup {
    if d.stats.is_empty() {
        return html! {};
    }
    section(id, "block block-stats", html! {
        @for stat in &d.stats {
            div class="block-stats__item" {
                span class="block-stats__value" {
                    (stat.prefix) (stat.value) (stat.suffix)
                }
                @if !stat.label.is_empty() { span class="block-stats__label" { (stat.label) } }
            }
        }
    })
}

fn contact_form(id: &str, d: &ContactFormData) -> Markup {
    // Name and email are always collected, whatever the configured subset
    // says; the inbox contract requires them.
    let mut fields = vec![ContactField::Name, ContactField::Email];
    for field in &d.fields {
        if !fields.contains(field) {
            fields.push(*field);
        }
    }
    let button_text = if d.button_text.is_empty() {
        "Send"
    } else {
        d.button_text.as_str()
    };
    section(id, "block block-contact-form", html! {
        @if !d.title.is_empty() { h2 { (d.title) } }
        @if !d.description.is_empty() { p { (d.description) } }
        form class="contact-form" method="post" action="/contact" {
            @for field in &fields { (contact_input(*field)) }
            button type="submit" class="button button--primary" { (button_text) }
        }
    })
}

fn contact_input(field: ContactField) -> Markup {
    match field {
        ContactField::Name => html! {
            label { "Name / Nama"
                input type="text" name="name" required;
            }
        },
        ContactField::Email => html! {
            label { "Email"
                input type="email" name="email" required;
            }
        },
        ContactField::Phone => html! {
            label { "Phone / Telepon"
                input type="tel" name="phone";
            }
        },
        ContactField::Company => html! {
            label { "Company / Perusahaan"
                input type="text" name="company";
            }
        },
        ContactField::Subject => html! {
            label { "Subject / Subjek"
                input type="text" name="subject";
            }
        },
        ContactField::Message => html! {
            label { "Message / Pesan"
                textarea name="message" rows="5" {}
            }
        },
    }
}

fn raw_html(id: &str, d: &HtmlData) -> Markup {
    if d.content.trim().is_empty() {
        return html! {};
    }
    // Legacy blocks predate the editor; their markup gets the same
    // sanitizer treatment as rich text.
    section(id, "block block-html", html! {
        (PreEscaped(clean_rich_text(&d.content)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kemas_core::block::id::BlockId;
    use kemas_core::block::model::{FaqItem, PricingPlan};
    use serde_json::json;

    fn block(id: &str, body: BlockBody) -> ContentBlock {
        ContentBlock::new(BlockId::from(id), body)
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_blocks(&[]).into_string(), "");
    }

    #[test]
    fn unknown_type_renders_nothing_and_does_not_panic() {
        let blocks: Vec<ContentBlock> =
            serde_json::from_value(json!([{"id": "x", "type": "unknown_type", "data": {}}]))
                .unwrap();
        assert_eq!(render_blocks(&blocks).into_string(), "");
    }

    #[test]
    fn rendering_is_pure() {
        let blocks = vec![block(
            "a",
            BlockBody::Text(TextData {
                content: "<p>Hello</p>".into(),
            }),
        )];
        assert_eq!(
            render_blocks(&blocks).into_string(),
            render_blocks(&blocks).into_string()
        );
    }

    #[test]
    fn blocks_render_in_array_order() {
        let blocks = vec![
            block("a", BlockBody::Text(TextData { content: "<p>first</p>".into() })),
            block("b", BlockBody::Text(TextData { content: "<p>second</p>".into() })),
        ];
        let out = render_blocks(&blocks).into_string();
        let first = out.find("first").unwrap();
        let second = out.find("second").unwrap();
        assert!(first < second);
        assert!(out.contains(r#"data-block-id="a""#));
        assert!(out.contains(r#"data-block-id="b""#));
    }

    #[test]
    fn text_block_is_sanitized() {
        let blocks = vec![block(
            "t",
            BlockBody::Text(TextData {
                content: "<script>alert(1)</script><p>ok</p>".into(),
            }),
        )];
        let out = render_blocks(&blocks).into_string();
        assert!(!out.contains("<script"));
        assert!(out.contains("<p>ok</p>"));
    }

    #[test]
    fn legacy_html_block_is_sanitized_too() {
        let blocks: Vec<ContentBlock> = serde_json::from_value(json!([
            {"id": "h", "type": "html", "data": {"content": "<img src=x onerror=alert(1)><b>kept</b>"}}
        ]))
        .unwrap();
        let out = render_blocks(&blocks).into_string();
        assert!(!out.contains("onerror"));
        assert!(out.contains("<b>kept</b>"));
    }

    #[test]
    fn empty_text_block_renders_nothing() {
        let blocks = vec![block("t", BlockBody::Text(TextData::default()))];
        assert_eq!(render_blocks(&blocks).into_string(), "");
    }

    #[test]
    fn hero_inverts_when_background_image_set() {
        let plain = render_blocks(&[block(
            "h",
            BlockBody::Hero(HeroData {
                title: "Welcome".into(),
                ..HeroData::default()
            }),
        )])
        .into_string();
        assert!(!plain.contains("block-hero--image"));

        let imaged = render_blocks(&[block(
            "h",
            BlockBody::Hero(HeroData {
                title: "Welcome".into(),
                background_image: "/media/hero.jpg".into(),
                ..HeroData::default()
            }),
        )])
        .into_string();
        assert!(imaged.contains("block-hero--image"));
        assert!(imaged.contains("/media/hero.jpg"));
    }

    #[test]
    fn hero_omits_buttons_without_text() {
        let out = render_blocks(&[block(
            "h",
            BlockBody::Hero(HeroData {
                title: "Welcome".into(),
                primary_button_link: "/contact".into(),
                ..HeroData::default()
            }),
        )])
        .into_string();
        assert!(!out.contains("block-hero__actions"));
    }

    #[test]
    fn gallery_layout_selects_arrangement() {
        let out = render_blocks(&[block(
            "g",
            BlockBody::ImageGallery(GalleryData {
                images: vec!["/media/a.jpg".into()],
                layout: GalleryLayout::Masonry,
            }),
        )])
        .into_string();
        assert!(out.contains("block-gallery--masonry"));

        let empty = render_blocks(&[block("g", BlockBody::ImageGallery(GalleryData::default()))]);
        assert_eq!(empty.into_string(), "");
    }

    #[test]
    fn pricing_with_no_plans_renders_nothing() {
        let out = render_blocks(&[block("p", BlockBody::PricingTable(PricingData::default()))]);
        assert_eq!(out.into_string(), "");
    }

    #[test]
    fn pricing_single_plan_scenario() {
        let out = render_blocks(&[block(
            "p",
            BlockBody::PricingTable(PricingData {
                plans: vec![PricingPlan {
                    name: "Basic".into(),
                    price: "$10".into(),
                    period: "/mo".into(),
                    features: vec!["A".into(), "B".into()],
                    is_popular: false,
                    button_text: String::new(),
                    button_link: String::new(),
                }],
            }),
        )])
        .into_string();

        assert!(out.contains("block-pricing--cols-1"));
        assert!(out.contains("Basic"));
        assert_eq!(out.matches("<li>").count(), 2);
        assert!(!out.contains("block-pricing__plan--popular"));
        assert!(!out.contains("Popular"));
    }

    #[test]
    fn pricing_popular_plan_is_emphasized() {
        let plan = |name: &str, popular: bool| PricingPlan {
            name: name.into(),
            price: "$1".into(),
            is_popular: popular,
            ..PricingPlan::default()
        };
        let out = render_blocks(&[block(
            "p",
            BlockBody::PricingTable(PricingData {
                plans: vec![plan("A", false), plan("B", true), plan("C", false)],
            }),
        )])
        .into_string();
        assert!(out.contains("block-pricing--cols-3"));
        assert_eq!(out.matches("block-pricing__plan--popular").count(), 1);
        assert!(out.contains("block-pricing__badge"));
    }

    #[test]
    fn video_embeds_parsed_id() {
        let out = render_blocks(&[block(
            "v",
            BlockBody::Video(VideoData {
                youtube_url: "https://youtu.be/abc123".into(),
            }),
        )])
        .into_string();
        assert!(out.contains("https://www.youtube.com/embed/abc123"));
    }

    #[test]
    fn video_with_unparseable_url_renders_nothing() {
        let out = render_blocks(&[block(
            "v",
            BlockBody::Video(VideoData {
                youtube_url: "not a url".into(),
            }),
        )]);
        assert_eq!(out.into_string(), "");
    }

    #[test]
    fn faq_uses_accordion_semantics() {
        let out = render_blocks(&[block(
            "f",
            BlockBody::Faq(FaqData {
                items: vec![FaqItem {
                    question: "Delivery time?".into(),
                    answer: "Two weeks.".into(),
                }],
            }),
        )])
        .into_string();
        assert!(out.contains("<details"));
        assert!(out.contains("<summary>Delivery time?</summary>"));

        let empty = render_blocks(&[block("f", BlockBody::Faq(FaqData::default()))]);
        assert_eq!(empty.into_string(), "");
    }

    #[test]
    fn testimonial_without_quote_renders_nothing() {
        let out = render_blocks(&[block(
            "t",
            BlockBody::Testimonial(TestimonialData {
                author_name: "Ani".into(),
                ..TestimonialData::default()
            }),
        )]);
        assert_eq!(out.into_string(), "");
    }

    #[test]
    fn contact_form_always_requires_name_and_email() {
        let out = render_blocks(&[block(
            "c",
            BlockBody::ContactForm(ContactFormData {
                fields: vec![ContactField::Message],
                ..ContactFormData::default()
            }),
        )])
        .into_string();
        assert!(out.contains(r#"name="name" required"#));
        assert!(out.contains(r#"name="email" required"#));
        assert!(out.contains(r#"name="message""#));
        assert!(out.contains(r#"action="/contact""#));
    }

    #[test]
    fn contact_form_never_leaks_email_to() {
        let out = render_blocks(&[block(
            "c",
            BlockBody::ContactForm(ContactFormData {
                email_to: "sales@kemas.example".into(),
                ..ContactFormData::default()
            }),
        )])
        .into_string();
        assert!(!out.contains("sales@kemas.example"));
    }

    #[test]
    fn static_sections_reuse_block_renderers() {
        let content = StaticContent {
            hero: Some(HeroData {
                title: "Packaging done right".into(),
                ..HeroData::default()
            }),
            ..StaticContent::default()
        };
        let out = render_static_sections(&content).into_string();
        assert!(out.contains("block-hero"));
        assert!(out.contains("Packaging done right"));
        assert_eq!(
            render_static_sections(&StaticContent::default()).into_string(),
            ""
        );
    }
}
