use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

fn from_row(row: &PgRow) -> Result<ContactSubmission, sqlx::Error> {
    Ok(ContactSubmission {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        company: row.try_get("company")?,
        subject: row.try_get("subject")?,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
    })
}

pub async fn insert(pool: &PgPool, submission: &NewSubmission) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query(
        "INSERT INTO contact_submissions (name, email, phone, company, subject, message) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(&submission.name)
    .bind(&submission.email)
    .bind(&submission.phone)
    .bind(&submission.company)
    .bind(&submission.subject)
    .bind(&submission.message)
    .fetch_one(pool)
    .await?;
    row.try_get("id")
}

pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, name, email, phone, company, subject, message, created_at \
         FROM contact_submissions ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    rows.iter().map(from_row).collect()
}
