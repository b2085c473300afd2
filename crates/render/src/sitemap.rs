//! Sitemap XML: the fixed marketing routes plus published blog slugs,
//! filtered by each entity's indexing toggle. Custom pages are not
//! enumerated here.

use chrono::{DateTime, Utc};
use kemas_core::page::model::{Post, STATIC_PAGE_KEYS};

struct Entry {
    loc: String,
    lastmod: Option<DateTime<Utc>>,
}

/// Build the sitemap document. `base_url` must not end with a slash.
pub fn sitemap_xml(base_url: &str, posts: &[Post]) -> String {
    let mut entries: Vec<Entry> = STATIC_PAGE_KEYS
        .iter()
        .map(|key| Entry {
            loc: if *key == "home" {
                format!("{base_url}/")
            } else {
                format!("{base_url}/{key}")
            },
            lastmod: None,
        })
        .collect();

    entries.extend(
        posts
            .iter()
            .filter(|p| p.published && p.indexable)
            .map(|p| Entry {
                loc: format!("{base_url}/blog/{}", p.slug),
                lastmod: Some(p.updated_at),
            }),
    );

    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');
    for entry in entries {
        xml.push_str("  <url><loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>");
        if let Some(lastmod) = entry.lastmod {
            xml.push_str("<lastmod>");
            xml.push_str(&lastmod.format("%Y-%m-%d").to_string());
            xml.push_str("</lastmod>");
        }
        xml.push_str("</url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kemas_core::lang::Localized;
    use uuid::Uuid;

    fn post(slug: &str, published: bool, indexable: bool) -> Post {
        Post {
            id: Uuid::new_v4(),
            slug: slug.into(),
            title: Localized::default(),
            body: Localized::default(),
            published,
            indexable,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn includes_static_routes() {
        let xml = sitemap_xml("https://kemas.example", &[]);
        assert!(xml.contains("<loc>https://kemas.example/</loc>"));
        assert!(xml.contains("<loc>https://kemas.example/about</loc>"));
        assert!(xml.contains("<loc>https://kemas.example/products</loc>"));
        assert!(xml.contains("<loc>https://kemas.example/contact</loc>"));
    }

    #[test]
    fn filters_posts_by_publish_and_indexing_toggles() {
        let posts = vec![
            post("visible", true, true),
            post("draft", false, true),
            post("hidden", true, false),
        ];
        let xml = sitemap_xml("https://kemas.example", &posts);
        assert!(xml.contains("/blog/visible"));
        assert!(!xml.contains("/blog/draft"));
        assert!(!xml.contains("/blog/hidden"));
    }

    #[test]
    fn escapes_url_characters() {
        let posts = vec![post("a&b", true, true)];
        let xml = sitemap_xml("https://kemas.example", &posts);
        assert!(xml.contains("/blog/a&amp;b"));
    }
}
