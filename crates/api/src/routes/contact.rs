//! The contact-form endpoint the rendered contact_form block posts to,
//! plus the admin inbox listing. Exactly one submission row is written per
//! valid submit; block data is never touched here.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Deserialize;

use kemas_render::layout;

use crate::error::{ApiResult, FieldError};
use crate::repo;
use crate::routes::site::{render_static, LangQuery};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contact", get(contact_page).post(submit))
        .route("/v1/contact", get(list_submissions))
}

/// The public contact page; an exact route because POST lives on the same
/// path.
async fn contact_page(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> ApiResult<Response> {
    render_static(&state, "contact", query.lang()).await
}

#[derive(Debug, Deserialize)]
struct SubmissionForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    phone: Option<String>,
    company: Option<String>,
    subject: Option<String>,
    #[serde(default)]
    message: String,
}

/// Name and email are required whatever the block's configured field
/// subset was; everything else is best-effort.
fn validate(form: &SubmissionForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    let email = form.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !looks_like_email(email) {
        errors.push(FieldError::new("email", "Email does not look valid"));
    }
    errors
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

async fn submit(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Form(form): Form<SubmissionForm>,
) -> ApiResult<Response> {
    let lang = query.lang();
    let errors = validate(&form);
    if !errors.is_empty() {
        let listed: Vec<(String, String)> = errors
            .into_iter()
            .map(|e| (e.field, e.message))
            .collect();
        return Ok((
            StatusCode::BAD_REQUEST,
            Html(layout::contact_invalid(lang, &listed).into_string()),
        )
            .into_response());
    }

    let submission = repo::contact::NewSubmission {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: none_if_blank(form.phone),
        company: none_if_blank(form.company),
        subject: none_if_blank(form.subject),
        message: form.message.trim().to_string(),
    };
    let id = repo::contact::insert(state.pool(), &submission).await?;
    state.event_bus().contact_received(id);
    tracing::info!(%id, "contact submission received");

    Ok(Html(layout::contact_thanks(lang).into_string()).into_response())
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Admin inbox.
async fn list_submissions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<repo::contact::ContactSubmission>>> {
    Ok(Json(repo::contact::list(state.pool()).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> SubmissionForm {
        SubmissionForm {
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
            subject: None,
            message: String::new(),
        }
    }

    #[test]
    fn requires_name_and_email() {
        let errors = validate(&form("", ""));
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["name", "email"]);
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(validate(&form("Ani", "ani@kemas.example")).is_empty());
        assert!(validate(&form("Ani", "not-an-email"))
            .iter()
            .any(|e| e.field == "email"));
        assert!(validate(&form("Ani", "a@b"))
            .iter()
            .any(|e| e.field == "email"));
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@co."));
        assert!(!looks_like_email("plain"));
    }
}
