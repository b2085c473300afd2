//! Page containers: operator-created custom pages (the block store proper),
//! fixed-shape static marketing pages, and blog posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::block::model::{ContentBlock, CtaData, FeaturesData, HeroData, StatsData};
use crate::lang::{Lang, Localized};

/// Which chrome a custom page is rendered inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageTemplate {
    #[default]
    Default,
    Landing,
    Blank,
}

impl PageTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageTemplate::Default => "default",
            PageTemplate::Landing => "landing",
            PageTemplate::Blank => "blank",
        }
    }

    /// Parse the stored column value. Unrecognized values fall back to the
    /// default chrome rather than failing the row.
    pub fn parse(value: &str) -> PageTemplate {
        match value {
            "landing" => PageTemplate::Landing,
            "blank" => PageTemplate::Blank,
            _ => PageTemplate::Default,
        }
    }
}

/// An operator-created page addressed by a URL slug, optionally nested
/// under a parent page. Its two block arrays are the block store this
/// system is about; deleting the page deletes them with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPage {
    pub id: Uuid,
    pub slug: String,
    pub parent_id: Option<Uuid>,
    pub template: PageTemplate,
    pub published: bool,
    pub indexable: bool,
    pub content: Localized<Vec<ContentBlock>>,
    /// Monotonic save counter, optionally checked on write.
    pub revision: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomPage {
    pub fn blocks(&self, lang: Lang) -> &[ContentBlock] {
        self.content.get(lang)
    }

    /// Page title derived from the slug; custom pages carry no title field.
    pub fn display_title(&self) -> String {
        let mut title = String::with_capacity(self.slug.len());
        let mut start_of_word = true;
        for c in self.slug.chars() {
            if c == '-' {
                title.push(' ');
                start_of_word = true;
            } else if start_of_word {
                title.extend(c.to_uppercase());
                start_of_word = false;
            } else {
                title.push(c);
            }
        }
        title
    }
}

/// Built-in marketing page keys. These resolve before any custom page.
pub const STATIC_PAGE_KEYS: [&str; 4] = ["home", "about", "products", "contact"];

/// Fixed-shape content for one built-in marketing page: a set of optional
/// sections rather than a block array. Section shapes are shared with the
/// corresponding block kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticContent {
    pub hero: Option<HeroData>,
    pub features: Option<FeaturesData>,
    pub stats: Option<StatsData>,
    pub cta: Option<CtaData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticPage {
    pub page_key: String,
    pub content: Localized<StaticContent>,
    pub updated_at: DateTime<Utc>,
}

impl StaticPage {
    /// The empty content a key starts with before any save.
    pub fn empty(page_key: &str) -> Self {
        Self {
            page_key: page_key.to_string(),
            content: Localized::default(),
            updated_at: Utc::now(),
        }
    }
}

/// A blog post. The body is operator-authored rich HTML, sanitized at
/// render time like a text block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub slug: String,
    pub title: Localized<String>,
    pub body: Localized<String>,
    pub published: bool,
    pub indexable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq)]
pub enum SlugError {
    #[error("slug cannot be empty")]
    Empty,
    #[error("slug contains invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("slug {0:?} is reserved")]
    Reserved(String),
}

/// Route prefixes a custom page slug may not shadow.
const RESERVED_SLUGS: [&str; 9] = [
    "home",
    "about",
    "products",
    "contact",
    "blog",
    "media",
    "v1",
    "health",
    "sitemap.xml",
];

/// Slug rules for custom pages and posts: non-empty, lowercase ASCII
/// alphanumerics and hyphens, not a reserved route segment.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if let Some(c) = slug
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(SlugError::InvalidCharacter(c));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(SlugError::Reserved(slug.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_rules() {
        assert_eq!(validate_slug("our-factory"), Ok(()));
        assert_eq!(validate_slug("promo-2026"), Ok(()));
        assert_eq!(validate_slug(""), Err(SlugError::Empty));
        assert_eq!(
            validate_slug("Our Factory"),
            Err(SlugError::InvalidCharacter('O'))
        );
        assert_eq!(
            validate_slug("a/b"),
            Err(SlugError::InvalidCharacter('/'))
        );
        assert_eq!(
            validate_slug("blog"),
            Err(SlugError::Reserved("blog".into()))
        );
    }

    #[test]
    fn template_parse_falls_back_to_default() {
        assert_eq!(PageTemplate::parse("landing"), PageTemplate::Landing);
        assert_eq!(PageTemplate::parse("blank"), PageTemplate::Blank);
        assert_eq!(PageTemplate::parse("fancy"), PageTemplate::Default);
    }

    #[test]
    fn display_title_humanizes_the_slug() {
        let page = CustomPage {
            id: Uuid::new_v4(),
            slug: "custom-carton-boxes".into(),
            parent_id: None,
            template: PageTemplate::Default,
            published: true,
            indexable: true,
            content: Localized::default(),
            revision: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(page.display_title(), "Custom Carton Boxes");
    }
}
