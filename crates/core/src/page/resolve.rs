//! Slug-path resolution over the custom-page tree.
//!
//! Pages form a tree through `parent_id`; a page's public path is its slug
//! chain from the root (`parent/child`). Resolution walks the path one
//! segment at a time, so two pages may share a slug as long as their
//! parents differ.

use std::collections::HashSet;

use uuid::Uuid;

use super::model::CustomPage;

/// Find the page addressed by a `parent/child` slug path. Empty segments
/// (doubled or trailing slashes) are ignored.
pub fn resolve_path<'a>(path: &str, pages: &'a [CustomPage]) -> Option<&'a CustomPage> {
    let mut parent: Option<Uuid> = None;
    let mut current: Option<&CustomPage> = None;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current = pages
            .iter()
            .find(|p| p.slug == segment && p.parent_id == parent);
        match current {
            Some(page) => parent = Some(page.id),
            None => return None,
        }
    }
    current
}

/// Full public path of a page: its slug chain from the root. A broken or
/// cyclic parent chain terminates at the last resolvable ancestor.
pub fn page_path(page: &CustomPage, pages: &[CustomPage]) -> String {
    let mut segments = vec![page.slug.as_str()];
    let mut seen: HashSet<Uuid> = HashSet::from([page.id]);
    let mut parent = page.parent_id;
    while let Some(parent_id) = parent {
        if !seen.insert(parent_id) {
            break;
        }
        match pages.iter().find(|p| p.id == parent_id) {
            Some(ancestor) => {
                segments.push(ancestor.slug.as_str());
                parent = ancestor.parent_id;
            }
            None => break,
        }
    }
    segments.reverse();
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Localized;
    use crate::page::model::PageTemplate;
    use chrono::Utc;

    fn page(slug: &str, parent_id: Option<Uuid>) -> CustomPage {
        CustomPage {
            id: Uuid::new_v4(),
            slug: slug.into(),
            parent_id,
            template: PageTemplate::Default,
            published: true,
            indexable: true,
            content: Localized::default(),
            revision: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn resolves_root_and_nested_paths() {
        let services = page("services", None);
        let printing = page("printing", Some(services.id));
        let pages = vec![services.clone(), printing.clone()];

        assert_eq!(resolve_path("services", &pages).unwrap().id, services.id);
        assert_eq!(
            resolve_path("services/printing", &pages).unwrap().id,
            printing.id
        );
        assert_eq!(
            resolve_path("/services/printing/", &pages).unwrap().id,
            printing.id
        );
    }

    #[test]
    fn nested_slug_does_not_resolve_at_root() {
        let services = page("services", None);
        let printing = page("printing", Some(services.id));
        let pages = vec![services, printing];

        assert!(resolve_path("printing", &pages).is_none());
        assert!(resolve_path("services/missing", &pages).is_none());
    }

    #[test]
    fn sibling_subtrees_can_reuse_slugs() {
        let a = page("left", None);
        let b = page("right", None);
        let under_a = page("info", Some(a.id));
        let under_b = page("info", Some(b.id));
        let pages = vec![a, b, under_a.clone(), under_b.clone()];

        assert_eq!(resolve_path("left/info", &pages).unwrap().id, under_a.id);
        assert_eq!(resolve_path("right/info", &pages).unwrap().id, under_b.id);
    }

    #[test]
    fn page_path_builds_the_slug_chain() {
        let root = page("services", None);
        let child = page("printing", Some(root.id));
        let grandchild = page("labels", Some(child.id));
        let pages = vec![root.clone(), child.clone(), grandchild.clone()];

        assert_eq!(page_path(&root, &pages), "services");
        assert_eq!(page_path(&grandchild, &pages), "services/printing/labels");
    }

    #[test]
    fn page_path_survives_a_cyclic_parent_chain() {
        let mut a = page("a", None);
        let mut b = page("b", None);
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        let pages = vec![a.clone(), b];

        // Must terminate; exact shape of the truncated path is not part of
        // the contract.
        let _ = page_path(&a, &pages);
    }
}
