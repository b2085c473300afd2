use kemas_core::block::model::ContentBlock;
use kemas_core::lang::Localized;
use kemas_core::page::model::{CustomPage, PageTemplate};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

const PAGE_COLUMNS: &str = "id, slug, parent_id, template, published, indexable, \
     content_en, content_id, revision, created_at, updated_at";

fn from_row(row: &PgRow) -> Result<CustomPage, sqlx::Error> {
    let Json(content_en): Json<Vec<ContentBlock>> = row.try_get("content_en")?;
    let Json(content_id): Json<Vec<ContentBlock>> = row.try_get("content_id")?;
    let template: String = row.try_get("template")?;
    Ok(CustomPage {
        id: row.try_get("id")?,
        slug: row.try_get("slug")?,
        parent_id: row.try_get("parent_id")?,
        template: PageTemplate::parse(&template),
        published: row.try_get("published")?,
        indexable: row.try_get("indexable")?,
        content: Localized::new(content_en, content_id),
        revision: row.try_get("revision")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub async fn list(pool: &PgPool) -> Result<Vec<CustomPage>, sqlx::Error> {
    let sql = format!("SELECT {PAGE_COLUMNS} FROM pages ORDER BY created_at");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    rows.iter().map(from_row).collect()
}

pub async fn get_by_slug(pool: &PgPool, slug: &str) -> Result<Option<CustomPage>, sqlx::Error> {
    let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE slug = $1");
    let row = sqlx::query(&sql).bind(slug).fetch_optional(pool).await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<CustomPage>, sqlx::Error> {
    let sql = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1");
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn slug_exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM pages WHERE slug = $1)")
        .bind(slug)
        .fetch_one(pool)
        .await?;
    row.try_get(0)
}

pub async fn insert(
    pool: &PgPool,
    slug: &str,
    parent_id: Option<Uuid>,
    template: PageTemplate,
) -> Result<CustomPage, sqlx::Error> {
    let sql = format!(
        "INSERT INTO pages (slug, parent_id, template) VALUES ($1, $2, $3) RETURNING {PAGE_COLUMNS}"
    );
    let row = sqlx::query(&sql)
        .bind(slug)
        .bind(parent_id)
        .bind(template.as_str())
        .fetch_one(pool)
        .await?;
    from_row(&row)
}

/// Persist page metadata (everything except the block arrays).
pub async fn save_meta(pool: &PgPool, page: &CustomPage) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE pages SET parent_id = $2, template = $3, published = $4, indexable = $5, \
         updated_at = now() WHERE id = $1",
    )
    .bind(page.id)
    .bind(page.parent_id)
    .bind(page.template.as_str())
    .bind(page.published)
    .bind(page.indexable)
    .execute(pool)
    .await?;
    Ok(())
}

/// Replace both block arrays wholesale and bump the revision counter.
/// Returns the new revision.
pub async fn save_content(
    pool: &PgPool,
    id: Uuid,
    content: &Localized<Vec<ContentBlock>>,
) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        "UPDATE pages SET content_en = $2, content_id = $3, revision = revision + 1, \
         updated_at = now() WHERE id = $1 RETURNING revision",
    )
    .bind(id)
    .bind(Json(&content.en))
    .bind(Json(&content.id))
    .fetch_one(pool)
    .await?;
    row.try_get("revision")
}

/// Delete a page and, with it, its blocks. Children are re-parented to the
/// root by the schema's `ON DELETE SET NULL`.
pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pages WHERE slug = $1")
        .bind(slug)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
