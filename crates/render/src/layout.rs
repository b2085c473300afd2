//! Page chrome: the document shell each rendered page sits in, selected by
//! the page's template, plus the handful of fully server-rendered pages
//! (blog posts, 404, contact responses).

use kemas_core::lang::Lang;
use kemas_core::page::model::{PageTemplate, Post};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::sanitize::clean_rich_text;

const SITE_NAME: &str = "Kemas Packaging";

/// Compact base stylesheet embedded in every page; the site ships no
/// separate asset pipeline.
const STYLE: &str = "\
:root{--ink:#1f2430;--muted:#6b7280;--accent:#0b6e4f;--paper:#ffffff}\
*{box-sizing:border-box}body{margin:0;font-family:system-ui,sans-serif;color:var(--ink);background:var(--paper);line-height:1.6}\
.site-header,.site-footer{display:flex;align-items:center;justify-content:space-between;max-width:1080px;margin:0 auto;padding:1rem 1.5rem}\
.site-header nav a{margin-left:1.25rem;color:var(--ink);text-decoration:none}\
.site-footer{color:var(--muted);font-size:.9rem}\
main{max-width:1080px;margin:0 auto;padding:1rem 1.5rem}\
.block{margin:3rem 0}\
.block-hero{position:relative;text-align:center;padding:4rem 1rem}\
.block-hero--image{color:#fff}\
.block-hero__backdrop{position:absolute;inset:0;width:100%;height:100%;object-fit:cover;z-index:-1;filter:brightness(.55)}\
.block-hero__actions{display:flex;gap:1rem;justify-content:center;margin-top:1.5rem}\
.button{display:inline-block;padding:.6rem 1.4rem;border-radius:6px;text-decoration:none}\
.button--primary{background:var(--accent);color:#fff}\
.button--ghost{border:1px solid currentColor;color:inherit}\
.block-gallery--grid,.block-gallery--masonry{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:1rem}\
.block-gallery--carousel{display:flex;overflow-x:auto;gap:1rem}\
.block-gallery__item{margin:0}.block-gallery__item img{width:100%;border-radius:6px}\
.block-features__grid,.block-team__grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:1.5rem}\
.block-stats{display:flex;flex-wrap:wrap;gap:2rem;justify-content:center;text-align:center}\
.block-stats__value{display:block;font-size:2rem;font-weight:700}\
.block-pricing--cols-1{display:grid;grid-template-columns:minmax(260px,420px);justify-content:center;gap:1.5rem}\
.block-pricing--cols-2{display:grid;grid-template-columns:repeat(2,1fr);gap:1.5rem}\
.block-pricing--cols-3{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:1.5rem}\
.block-pricing__plan{border:1px solid #e5e7eb;border-radius:8px;padding:1.5rem;position:relative}\
.block-pricing__plan--popular{border-color:var(--accent);box-shadow:0 4px 16px rgba(11,110,79,.15)}\
.block-pricing__badge{position:absolute;top:-.8rem;right:1rem;background:var(--accent);color:#fff;padding:.1rem .6rem;border-radius:999px;font-size:.8rem}\
.block-faq__item{border-bottom:1px solid #e5e7eb;padding:.75rem 0}\
.block-video__frame{width:100%;aspect-ratio:16/9;border:0}\
.contact-form{display:grid;gap:1rem;max-width:480px}\
.contact-form label{display:grid;gap:.25rem;font-size:.9rem}\
.contact-form input,.contact-form textarea{padding:.5rem;border:1px solid #d1d5db;border-radius:6px;font:inherit}\
.field-errors{color:#b91c1c}";

/// Wrap rendered page content in the chrome its template asks for.
pub fn page_layout(template: PageTemplate, lang: Lang, title: &str, content: Markup) -> Markup {
    document(lang, title, match template {
        PageTemplate::Default => html! {
            (site_header(lang))
            main { (content) }
            (site_footer(lang))
        },
        PageTemplate::Landing => html! {
            header class="site-header" {
                a class="site-logo" href="/" { (SITE_NAME) }
            }
            main { (content) }
        },
        PageTemplate::Blank => html! { (content) },
    })
}

fn document(lang: Lang, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(STYLE)) }
            }
            body { (body) }
        }
    }
}

fn site_header(lang: Lang) -> Markup {
    let nav: [(&str, &str); 5] = match lang {
        Lang::En => [
            ("/", "Home"),
            ("/about", "About"),
            ("/products", "Products"),
            ("/blog", "Blog"),
            ("/contact", "Contact"),
        ],
        Lang::Id => [
            ("/", "Beranda"),
            ("/about", "Tentang"),
            ("/products", "Produk"),
            ("/blog", "Blog"),
            ("/contact", "Kontak"),
        ],
    };
    html! {
        header class="site-header" {
            a class="site-logo" href="/" { (SITE_NAME) }
            nav {
                @for (href, label) in nav {
                    a href=(format!("{href}?lang={}", lang.as_str())) { (label) }
                }
                a href="?lang=en" { "EN" }
                " / "
                a href="?lang=id" { "ID" }
            }
        }
    }
}

fn site_footer(lang: Lang) -> Markup {
    let line = match lang {
        Lang::En => "Flexible and corrugated packaging, made to order.",
        Lang::Id => "Kemasan fleksibel dan karton, dibuat sesuai pesanan.",
    };
    html! {
        footer class="site-footer" {
            span { (SITE_NAME) }
            span { (line) }
        }
    }
}

/// A rendered blog post in the default chrome.
pub fn post_page(lang: Lang, post: &Post) -> Markup {
    let title = post.title.get(lang);
    page_layout(
        PageTemplate::Default,
        lang,
        title,
        html! {
            article class="post" {
                h1 { (title) }
                div class="rich-text" { (PreEscaped(clean_rich_text(post.body.get(lang)))) }
            }
        },
    )
}

pub fn not_found(lang: Lang) -> Markup {
    let (title, line) = match lang {
        Lang::En => ("Page not found", "The page you are looking for does not exist."),
        Lang::Id => ("Halaman tidak ditemukan", "Halaman yang Anda cari tidak ada."),
    };
    page_layout(
        PageTemplate::Default,
        lang,
        title,
        html! {
            h1 { (title) }
            p { (line) }
        },
    )
}

/// Response page after a successful contact submission.
pub fn contact_thanks(lang: Lang) -> Markup {
    let (title, line) = match lang {
        Lang::En => ("Thank you", "We received your message and will reply shortly."),
        Lang::Id => ("Terima kasih", "Pesan Anda sudah kami terima dan akan segera dibalas."),
    };
    page_layout(
        PageTemplate::Default,
        lang,
        title,
        html! {
            h1 { (title) }
            p { (line) }
        },
    )
}

/// Response page when a contact submission fails validation; lists the
/// per-field problems inline.
pub fn contact_invalid(lang: Lang, errors: &[(String, String)]) -> Markup {
    let (title, line) = match lang {
        Lang::En => ("Check your message", "Some fields need attention:"),
        Lang::Id => ("Periksa pesan Anda", "Beberapa kolom perlu diperbaiki:"),
    };
    page_layout(
        PageTemplate::Default,
        lang,
        title,
        html! {
            h1 { (title) }
            p { (line) }
            ul class="field-errors" {
                @for (field, message) in errors {
                    li { strong { (field) } ": " (message) }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kemas_core::lang::Localized;
    use uuid::Uuid;

    #[test]
    fn default_template_carries_site_chrome() {
        let out =
            page_layout(PageTemplate::Default, Lang::En, "Promo", html! { p { "hi" } }).into_string();
        assert!(out.contains("<!DOCTYPE html>"));
        assert!(out.contains("site-header"));
        assert!(out.contains("site-footer"));
        assert!(out.contains("Promo | Kemas Packaging"));
    }

    #[test]
    fn blank_template_has_no_chrome() {
        let out =
            page_layout(PageTemplate::Blank, Lang::En, "Promo", html! { p { "hi" } }).into_string();
        assert!(!out.contains("site-header"));
        assert!(out.contains("<p>hi</p>"));
    }

    #[test]
    fn indonesian_chrome_uses_indonesian_labels() {
        let out =
            page_layout(PageTemplate::Default, Lang::Id, "Promo", html! {}).into_string();
        assert!(out.contains("Beranda"));
        assert!(out.contains(r#"<html lang="id">"#));
    }

    #[test]
    fn post_body_is_sanitized() {
        let post = Post {
            id: Uuid::new_v4(),
            slug: "new-line".into(),
            title: Localized::new("New line".into(), "Lini baru".into()),
            body: Localized::new(
                "<script>x()</script><p>Announcing</p>".into(),
                "<p>Mengumumkan</p>".into(),
            ),
            published: true,
            indexable: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let out = post_page(Lang::En, &post).into_string();
        assert!(!out.contains("<script"));
        assert!(out.contains("<p>Announcing</p>"));
        assert!(out.contains("New line"));
    }
}
