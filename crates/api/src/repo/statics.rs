use kemas_core::lang::Localized;
use kemas_core::page::model::{StaticContent, StaticPage};
use sqlx::types::Json;
use sqlx::{PgPool, Row};

/// Fetch one built-in page's content. A key that has never been saved
/// yields its empty default rather than an error.
pub async fn get(pool: &PgPool, page_key: &str) -> Result<StaticPage, sqlx::Error> {
    let row = sqlx::query(
        "SELECT page_key, content_en, content_id, updated_at FROM static_pages WHERE page_key = $1",
    )
    .bind(page_key)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => {
            let Json(en): Json<StaticContent> = row.try_get("content_en")?;
            let Json(id): Json<StaticContent> = row.try_get("content_id")?;
            Ok(StaticPage {
                page_key: row.try_get("page_key")?,
                content: Localized::new(en, id),
                updated_at: row.try_get("updated_at")?,
            })
        }
        None => Ok(StaticPage::empty(page_key)),
    }
}

/// Replace one built-in page's content blobs wholesale.
pub async fn upsert(
    pool: &PgPool,
    page_key: &str,
    content: &Localized<StaticContent>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO static_pages (page_key, content_en, content_id) VALUES ($1, $2, $3) \
         ON CONFLICT (page_key) DO UPDATE SET content_en = EXCLUDED.content_en, \
         content_id = EXCLUDED.content_id, updated_at = now()",
    )
    .bind(page_key)
    .bind(Json(&content.en))
    .bind(Json(&content.id))
    .execute(pool)
    .await?;
    Ok(())
}
