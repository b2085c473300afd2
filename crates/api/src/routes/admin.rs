//! Admin CRUD over custom pages. Block arrays are accepted and returned
//! wholesale; there is no per-block endpoint.

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use kemas_core::block::model::ContentBlock;
use kemas_core::block::validate::validate_block_list;
use kemas_core::page::model::{validate_slug, CustomPage, PageTemplate};
use kemas_core::page::resolve::page_path;

use crate::error::{ApiError, ApiResult, FieldError};
use crate::repo;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/pages", get(list_pages).post(create_page))
        .route(
            "/v1/pages/{slug}",
            get(get_page).put(update_page).delete(delete_page),
        )
        .route("/v1/pages/{slug}/content", put(save_content))
}

#[derive(Debug, Serialize)]
struct PageSummary {
    id: Uuid,
    slug: String,
    /// Full public path through the page tree.
    path: String,
    parent_id: Option<Uuid>,
    template: PageTemplate,
    published: bool,
    indexable: bool,
    revision: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PageSummary {
    fn from_page(page: &CustomPage, all: &[CustomPage]) -> Self {
        Self {
            id: page.id,
            slug: page.slug.clone(),
            path: page_path(page, all),
            parent_id: page.parent_id,
            template: page.template,
            published: page.published,
            indexable: page.indexable,
            revision: page.revision,
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}

async fn list_pages(State(state): State<AppState>) -> ApiResult<Json<Vec<PageSummary>>> {
    let pages = repo::pages::list(state.pool()).await?;
    let summaries = pages
        .iter()
        .map(|p| PageSummary::from_page(p, &pages))
        .collect();
    Ok(Json(summaries))
}

#[derive(Debug, Deserialize)]
struct CreatePageRequest {
    slug: String,
    parent_id: Option<Uuid>,
    #[serde(default)]
    template: PageTemplate,
}

async fn create_page(
    State(state): State<AppState>,
    Json(request): Json<CreatePageRequest>,
) -> ApiResult<Json<CustomPage>> {
    validate_slug(&request.slug)
        .map_err(|e| ApiError::Validation(vec![FieldError::new("slug", &e.to_string())]))?;
    if repo::pages::slug_exists(state.pool(), &request.slug).await? {
        return Err(ApiError::Conflict(format!(
            "slug {:?} is already in use",
            request.slug
        )));
    }
    if let Some(parent_id) = request.parent_id {
        if repo::pages::get_by_id(state.pool(), parent_id).await?.is_none() {
            return Err(ApiError::BadRequest(format!(
                "parent page {parent_id} does not exist"
            )));
        }
    }

    let page =
        repo::pages::insert(state.pool(), &request.slug, request.parent_id, request.template)
            .await?;
    tracing::info!(slug = %page.slug, "created page");
    Ok(Json(page))
}

async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<CustomPage>> {
    let page = repo::pages::get_by_slug(state.pool(), &slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no page with slug {slug:?}")))?;
    Ok(Json(page))
}

/// Metadata update. `parent_id` distinguishes "absent" (leave as is) from
/// `null` (move to root); the block arrays have their own endpoint.
#[derive(Debug, Deserialize)]
struct UpdatePageRequest {
    template: Option<PageTemplate>,
    published: Option<bool>,
    indexable: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_some")]
    parent_id: Option<Option<Uuid>>,
}

fn deserialize_some<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Uuid>::deserialize(deserializer).map(Some)
}

async fn update_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<UpdatePageRequest>,
) -> ApiResult<Json<CustomPage>> {
    let mut page = repo::pages::get_by_slug(state.pool(), &slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no page with slug {slug:?}")))?;

    if let Some(template) = request.template {
        page.template = template;
    }
    if let Some(published) = request.published {
        page.published = published;
    }
    if let Some(indexable) = request.indexable {
        page.indexable = indexable;
    }
    if let Some(parent_id) = request.parent_id {
        if let Some(new_parent) = parent_id {
            let pages = repo::pages::list(state.pool()).await?;
            ensure_no_cycle(&page, new_parent, &pages)?;
        }
        page.parent_id = parent_id;
    }

    repo::pages::save_meta(state.pool(), &page).await?;
    Ok(Json(page))
}

/// Reparenting must keep the page tree a tree.
fn ensure_no_cycle(page: &CustomPage, new_parent: Uuid, pages: &[CustomPage]) -> ApiResult<()> {
    let mut current = Some(new_parent);
    while let Some(id) = current {
        if id == page.id {
            return Err(ApiError::BadRequest(
                "a page cannot be nested under itself or its descendants".into(),
            ));
        }
        current = pages.iter().find(|p| p.id == id).and_then(|p| p.parent_id);
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct SaveContentRequest {
    content_en: Option<Vec<ContentBlock>>,
    content_id: Option<Vec<ContentBlock>>,
    /// When present, the save is refused if another editor saved first.
    /// When absent the write is last-write-wins, as the admin UI has
    /// always behaved.
    expected_revision: Option<i64>,
}

async fn save_content(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<SaveContentRequest>,
) -> ApiResult<Json<Value>> {
    let page = repo::pages::get_by_slug(state.pool(), &slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no page with slug {slug:?}")))?;

    if let Some(expected) = request.expected_revision {
        if expected != page.revision {
            return Err(ApiError::Conflict(format!(
                "page was saved by someone else (revision {} != expected {expected})",
                page.revision
            )));
        }
    }

    let mut content = page.content;
    if let Some(en) = request.content_en {
        content.en = en;
    }
    if let Some(id) = request.content_id {
        content.id = id;
    }
    for blocks in [&content.en, &content.id] {
        validate_block_list(blocks).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }

    let revision = repo::pages::save_content(state.pool(), page.id, &content).await?;
    state.event_bus().page_saved(&slug, revision);
    tracing::info!(%slug, revision, "saved page content");

    Ok(Json(json!({ "slug": slug, "revision": revision })))
}

async fn delete_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Value>> {
    if !repo::pages::delete_by_slug(state.pool(), &slug).await? {
        return Err(ApiError::NotFound(format!("no page with slug {slug:?}")));
    }
    tracing::info!(%slug, "deleted page");
    Ok(Json(json!({ "deleted": slug })))
}
