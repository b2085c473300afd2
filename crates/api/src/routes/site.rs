//! Public page resolution: a requested URL path resolves to a built-in
//! marketing page, a blog post, or a custom page, in that order; the
//! language-appropriate content is rendered and anything else is a 404
//! page rather than a JSON error.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use kemas_core::lang::Lang;
use kemas_core::page::model::{CustomPage, PageTemplate, STATIC_PAGE_KEYS};
use kemas_core::page::resolve::resolve_path;
use kemas_render::layout;
use kemas_render::{page_layout, render_blocks, render_static_sections};
use maud::html;

use crate::error::ApiResult;
use crate::repo;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    lang: Option<String>,
}

impl LangQuery {
    pub fn lang(&self) -> Lang {
        self.lang.as_deref().map(Lang::parse).unwrap_or_default()
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/{*path}", get(page))
}

async fn home(State(state): State<AppState>, Query(query): Query<LangQuery>) -> ApiResult<Response> {
    render_static(&state, "home", query.lang()).await
}

async fn page(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<LangQuery>,
) -> ApiResult<Response> {
    let lang = query.lang();
    let path = path.trim_matches('/');

    if STATIC_PAGE_KEYS.contains(&path) {
        return render_static(&state, path, lang).await;
    }
    if path == "blog" {
        return blog_index(&state, lang).await;
    }
    if let Some(slug) = path.strip_prefix("blog/") {
        return blog_post(&state, slug, lang).await;
    }

    let pages = repo::pages::list(state.pool()).await?;
    match resolve_path(path, &pages) {
        Some(page) if page.published => Ok(custom_page(page, lang)),
        _ => Ok(not_found(lang)),
    }
}

/// Render one of the built-in marketing pages. Shared with the exact-path
/// contact route.
pub async fn render_static(state: &AppState, page_key: &str, lang: Lang) -> ApiResult<Response> {
    let page = repo::statics::get(state.pool(), page_key).await?;
    let title = static_title(page_key, lang);
    let content = render_static_sections(page.content.get(lang));
    let markup = page_layout(PageTemplate::Default, lang, title, content);
    Ok(Html(markup.into_string()).into_response())
}

fn static_title(page_key: &str, lang: Lang) -> &'static str {
    match (page_key, lang) {
        ("home", Lang::En) => "Home",
        ("home", Lang::Id) => "Beranda",
        ("about", Lang::En) => "About",
        ("about", Lang::Id) => "Tentang",
        ("products", Lang::En) => "Products",
        ("products", Lang::Id) => "Produk",
        ("contact", Lang::En) => "Contact",
        ("contact", Lang::Id) => "Kontak",
        _ => "Kemas",
    }
}

async fn blog_index(state: &AppState, lang: Lang) -> ApiResult<Response> {
    let posts = repo::posts::list_published(state.pool()).await?;
    let title = "Blog";
    let content = html! {
        h1 { (title) }
        ul class="post-list" {
            @for post in &posts {
                li {
                    a href=(format!("/blog/{}?lang={}", post.slug, lang.as_str())) {
                        (post.title.get(lang))
                    }
                }
            }
        }
    };
    let markup = page_layout(PageTemplate::Default, lang, title, content);
    Ok(Html(markup.into_string()).into_response())
}

async fn blog_post(state: &AppState, slug: &str, lang: Lang) -> ApiResult<Response> {
    match repo::posts::get_by_slug(state.pool(), slug).await? {
        Some(post) if post.published => {
            Ok(Html(layout::post_page(lang, &post).into_string()).into_response())
        }
        _ => Ok(not_found(lang)),
    }
}

fn custom_page(page: &CustomPage, lang: Lang) -> Response {
    let markup = page_layout(
        page.template,
        lang,
        &page.display_title(),
        render_blocks(page.blocks(lang)),
    );
    Html(markup.into_string()).into_response()
}

fn not_found(lang: Lang) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(layout::not_found(lang).into_string()),
    )
        .into_response()
}
