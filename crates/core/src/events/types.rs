use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events emitted after successful writes, consumed by admin-side
/// listeners (live preview refresh, inbox badge).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CmsEvent {
    Welcome,
    PageSaved(PageSavedEvent),
    ContactReceived(ContactReceivedEvent),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSavedEvent {
    pub slug: String,
    pub revision: i64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceivedEvent {
    pub submission_id: Uuid,
    pub timestamp: DateTime<Utc>,
}
