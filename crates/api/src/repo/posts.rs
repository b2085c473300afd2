use kemas_core::lang::Localized;
use kemas_core::page::model::Post;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const POST_COLUMNS: &str =
    "id, slug, title_en, title_id, body_en, body_id, published, indexable, created_at, updated_at";

fn from_row(row: &PgRow) -> Result<Post, sqlx::Error> {
    Ok(Post {
        id: row.try_get("id")?,
        slug: row.try_get("slug")?,
        title: Localized::new(row.try_get("title_en")?, row.try_get("title_id")?),
        body: Localized::new(row.try_get("body_en")?, row.try_get("body_id")?),
        published: row.try_get("published")?,
        indexable: row.try_get("indexable")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub async fn list(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let sql = format!("SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    rows.iter().map(from_row).collect()
}

pub async fn list_published(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE published ORDER BY created_at DESC");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    rows.iter().map(from_row).collect()
}

pub async fn get_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
    let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
    let row = sqlx::query(&sql).bind(slug).fetch_optional(pool).await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn insert(pool: &PgPool, post: &Post) -> Result<Post, sqlx::Error> {
    let sql = format!(
        "INSERT INTO posts (slug, title_en, title_id, body_en, body_id, published, indexable) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {POST_COLUMNS}"
    );
    let row = sqlx::query(&sql)
        .bind(&post.slug)
        .bind(&post.title.en)
        .bind(&post.title.id)
        .bind(&post.body.en)
        .bind(&post.body.id)
        .bind(post.published)
        .bind(post.indexable)
        .fetch_one(pool)
        .await?;
    from_row(&row)
}

pub async fn update(pool: &PgPool, post: &Post) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE posts SET title_en = $2, title_id = $3, body_en = $4, body_id = $5, \
         published = $6, indexable = $7, updated_at = now() WHERE id = $1",
    )
    .bind(post.id)
    .bind(&post.title.en)
    .bind(&post.title.id)
    .bind(&post.body.en)
    .bind(&post.body.id)
    .bind(post.published)
    .bind(post.indexable)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE slug = $1")
        .bind(slug)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
