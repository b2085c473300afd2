//! Rich-text sanitization.
//!
//! Block data originates from admin input that is trusted less than code;
//! any free-form HTML must pass through here before it is inserted into a
//! page. This is the one correctness-critical rule in the renderer.

use std::sync::OnceLock;

use ammonia::Builder;

fn cleaner() -> &'static Builder<'static> {
    static CLEANER: OnceLock<Builder<'static>> = OnceLock::new();
    CLEANER.get_or_init(|| {
        let mut builder = Builder::default();
        // Operators style their rich text through classes; everything
        // script-executing stays on ammonia's default deny list.
        builder.add_generic_attributes(["class"]);
        builder
    })
}

/// Strip script-executing constructs (script tags, event handlers,
/// javascript: URLs) from operator-authored HTML, keeping benign markup.
pub fn clean_rich_text(html: &str) -> String {
    cleaner().clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_tags_but_keeps_content() {
        let out = clean_rich_text("<script>alert(1)</script><p>ok</p>");
        assert!(!out.contains("<script"));
        assert!(!out.contains("alert(1)"));
        assert!(out.contains("<p>ok</p>"));
    }

    #[test]
    fn strips_event_handler_attributes() {
        let out = clean_rich_text(r#"<p onclick="steal()">hi</p>"#);
        assert!(!out.contains("onclick"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn strips_javascript_urls() {
        let out = clean_rich_text(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!out.contains("javascript:"));
    }

    #[test]
    fn keeps_ordinary_rich_text() {
        let input = r#"<h2>Title</h2><p class="lead">Body with <strong>bold</strong> and <a href="https://example.com">a link</a>.</p>"#;
        let out = clean_rich_text(input);
        assert!(out.contains("<h2>Title</h2>"));
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains(r#"class="lead""#));
    }
}
